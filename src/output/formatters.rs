//! Formatting utilities for terminal output

use crate::core::EditKind;

/// One-character marker for an edit kind
#[must_use]
pub const fn kind_symbol(kind: EditKind) -> char {
    match kind {
        EditKind::Change => '~',
        EditKind::Add => '+',
        EditKind::Remove => '-',
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar for one length bucket, scaled to the largest bucket
#[must_use]
pub fn bucket_bar(count: usize, largest: usize, width: usize) -> String {
    create_progress_bar(count as f64, largest as f64, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_symbols() {
        assert_eq!(kind_symbol(EditKind::Change), '~');
        assert_eq!(kind_symbol(EditKind::Add), '+');
        assert_eq!(kind_symbol(EditKind::Remove), '-');
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn bucket_bar_with_no_words() {
        assert_eq!(bucket_bar(0, 0, 4), "░░░░");
        assert_eq!(bucket_bar(5, 10, 4), "██░░");
    }
}
