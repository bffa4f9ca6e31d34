//! Ladder command
//!
//! Finds a shortest chain of single edits between two words.

use crate::core::{EditKind, Word, classify};
use crate::graph::{Graph, find_ladder};
use anyhow::Result;

/// Result of a ladder search
pub struct LadderResult {
    pub from: String,
    pub to: String,
    /// Each word after the first, with the edit that produced it
    pub steps: Vec<(String, EditKind)>,
}

impl LadderResult {
    /// Number of edits in the ladder
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True when `from` and `to` are the same word
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Find a shortest ladder between two words
///
/// # Errors
///
/// Returns an error if:
/// - Either word is invalid
/// - Either word is not in the graph
/// - No ladder exists within `max_depth` steps
pub fn solve_ladder(from: &str, to: &str, max_depth: usize, graph: &Graph) -> Result<LadderResult> {
    let from = Word::new(from)?;
    let to = Word::new(to)?;

    let path = find_ladder(graph, from.text(), to.text(), max_depth)?;

    let steps = path
        .windows(2)
        .filter_map(|pair| classify(&pair[0], &pair[1]).map(|kind| (pair[1].clone(), kind)))
        .collect();

    Ok(LadderResult {
        from: from.text().to_string(),
        to: to.text().to_string(),
        steps,
    })
}
