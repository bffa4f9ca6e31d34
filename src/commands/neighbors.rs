//! Neighbors command
//!
//! Lists every word one edit away from a given word.

use crate::core::{EditKind, Word};
use crate::graph::Graph;
use anyhow::{Result, bail};

/// Result of a neighbor lookup
pub struct NeighborsResult {
    pub word: String,
    pub neighbors: Vec<(String, EditKind)>,
}

impl NeighborsResult {
    /// Number of neighbors reached by `kind`
    #[must_use]
    pub fn count(&self, kind: EditKind) -> usize {
        self.neighbors.iter().filter(|(_, k)| *k == kind).count()
    }
}

/// Find the neighbors of `word` in `graph`
///
/// # Errors
///
/// Returns an error if:
/// - The word contains non-letters or is too long
/// - The word is not a node of the graph
pub fn find_neighbors(word: &str, graph: &Graph) -> Result<NeighborsResult> {
    let word = Word::new(word)?;

    if !graph.contains(word.text()) {
        bail!("word '{word}' not in word list");
    }

    let mut neighbors: Vec<(String, EditKind)> = graph
        .neighbors(word.text())
        .into_iter()
        .map(|n| (n.word.to_string(), n.kind))
        .collect();
    neighbors.sort_by(|(w1, k1), (w2, k2)| k1.cmp(k2).then_with(|| w1.cmp(w2)));

    Ok(NeighborsResult {
        word: word.text().to_string(),
        neighbors,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SingleLetterLut;
    use crate::graph::GraphBuilder;
    use crate::wordlists::Dictionary;

    fn graph() -> Graph {
        let dictionary = Dictionary::from_words(["cat", "bat", "cats", "at", "dog"], 2, 4);
        let lut = SingleLetterLut::new(2, 4);
        GraphBuilder::new(&dictionary, &lut).build()
    }

    #[test]
    fn neighbors_grouped_by_kind() {
        let result = find_neighbors("cat", &graph()).unwrap();

        assert_eq!(result.word, "CAT");
        assert_eq!(
            result.neighbors,
            vec![
                ("BAT".to_string(), EditKind::Change),
                ("CATS".to_string(), EditKind::Add),
                ("AT".to_string(), EditKind::Remove),
            ]
        );
        assert_eq!(result.count(EditKind::Add), 1);
    }

    #[test]
    fn isolated_word_has_no_neighbors() {
        let result = find_neighbors("DOG", &graph()).unwrap();
        assert!(result.neighbors.is_empty());
    }

    #[test]
    fn unknown_word_is_error() {
        assert!(find_neighbors("COG", &graph()).is_err());
        assert!(find_neighbors("c4t", &graph()).is_err());
    }
}
