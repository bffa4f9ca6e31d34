//! Word list loading utilities
//!
//! Reads raw lines from a file or the embedded sample. Validation and length
//! filtering happen later in `Dictionary::from_words`.

use std::fs;
use std::io;
use std::path::Path;

/// Load raw non-blank lines from a file
///
/// Lines are trimmed; nothing else is checked here.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_graph::wordlists::loader::load_from_file;
///
/// let lines = load_from_file("data/sample_words.txt").unwrap();
/// println!("Read {} lines", lines.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(lines_from_str(&content))
}

/// Split text into trimmed, non-blank lines
#[must_use]
pub fn lines_from_str(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Convert an embedded string slice to owned lines
///
/// # Examples
/// ```
/// use word_graph::wordlists::loader::words_from_slice;
/// use word_graph::wordlists::SAMPLE;
///
/// let words = words_from_slice(SAMPLE);
/// assert_eq!(words.len(), SAMPLE.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn lines_are_trimmed_and_blank_lines_dropped() {
        let lines = lines_from_str("  cat \n\n\tBAT\r\n   \ncats");
        assert_eq!(lines, vec!["cat", "BAT", "cats"]);
    }

    #[test]
    fn words_from_slice_keeps_order() {
        let words = words_from_slice(&["at", "cat", "cats"]);
        assert_eq!(words, vec!["at", "cat", "cats"]);
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn load_from_file_reads_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "dog\n  cog\n").unwrap();

        let lines = load_from_file(file.path()).unwrap();
        assert_eq!(lines, vec!["dog", "cog"]);
    }

    #[test]
    fn load_from_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_from_file(dir.path().join("missing.txt"));
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
    }
}
