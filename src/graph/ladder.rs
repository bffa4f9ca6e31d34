//! Word ladders: shortest edit chains between two words
//!
//! Breadth-first search over a finished graph, treating every edge as
//! undirected and one step long. Parent pointers are stored instead of
//! paths; the ladder is rebuilt once the target is reached.

use super::Graph;
use rustc_hash::FxHashMap;
use std::collections::VecDeque;
use thiserror::Error;

/// Default search depth limit
pub const DEFAULT_MAX_DEPTH: usize = 100;

/// Why no ladder was returned
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LadderError {
    #[error("{0} is not in the word graph")]
    UnknownWord(String),
    #[error("cannot connect {from} to {to} within {max_depth} steps")]
    Unreachable {
        from: String,
        to: String,
        max_depth: usize,
    },
}

/// Find a shortest ladder from `from` to `to`, both endpoints included
///
/// Words must already be in the graph's form (uppercase).
///
/// # Errors
/// Returns `LadderError::UnknownWord` if either word is not a node and
/// `LadderError::Unreachable` if no ladder of at most `max_depth` steps exists.
///
/// # Examples
/// ```
/// use word_graph::core::SingleLetterLut;
/// use word_graph::graph::{find_ladder, GraphBuilder};
/// use word_graph::wordlists::Dictionary;
///
/// let dictionary = Dictionary::from_words(["cat", "cot", "cog", "dog"], 3, 3);
/// let lut = SingleLetterLut::new(3, 3);
/// let graph = GraphBuilder::new(&dictionary, &lut).build();
///
/// let ladder = find_ladder(&graph, "CAT", "DOG", 10).unwrap();
/// assert_eq!(ladder, ["CAT", "COT", "COG", "DOG"]);
/// ```
pub fn find_ladder(
    graph: &Graph,
    from: &str,
    to: &str,
    max_depth: usize,
) -> Result<Vec<String>, LadderError> {
    for word in [from, to] {
        if !graph.contains(word) {
            return Err(LadderError::UnknownWord(word.to_string()));
        }
    }

    let adjacency = undirected_adjacency(graph);

    // word -> (distance, parent); the start is its own parent
    let mut visited: FxHashMap<&str, (usize, &str)> = FxHashMap::default();
    let mut queue: VecDeque<&str> = VecDeque::new();

    visited.insert(from, (0, from));
    queue.push_back(from);

    while let Some(current) = queue.pop_front() {
        if current == to {
            return Ok(rebuild_path(&visited, to));
        }

        let depth = visited[current].0;
        if depth >= max_depth {
            continue;
        }

        for &next in adjacency.get(current).map_or(&[][..], Vec::as_slice) {
            if !visited.contains_key(next) {
                visited.insert(next, (depth + 1, current));
                queue.push_back(next);
            }
        }
    }

    Err(LadderError::Unreachable {
        from: from.to_string(),
        to: to.to_string(),
        max_depth,
    })
}

/// Neighbor lists with every edge usable in both directions
fn undirected_adjacency(graph: &Graph) -> FxHashMap<&str, Vec<&str>> {
    let mut adjacency: FxHashMap<&str, Vec<&str>> = FxHashMap::default();
    for edge in graph.edges() {
        adjacency
            .entry(edge.source.as_str())
            .or_default()
            .push(edge.target.as_str());
        adjacency
            .entry(edge.target.as_str())
            .or_default()
            .push(edge.source.as_str());
    }
    adjacency
}

fn rebuild_path(visited: &FxHashMap<&str, (usize, &str)>, to: &str) -> Vec<String> {
    let mut path = vec![to.to_string()];
    let mut current = to;
    while let Some(&(_, parent)) = visited.get(current) {
        if parent == current {
            break;
        }
        path.push(parent.to_string());
        current = parent;
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SingleLetterLut;
    use crate::graph::GraphBuilder;
    use crate::wordlists::Dictionary;

    fn graph_of(words: &[&str]) -> Graph {
        let dictionary = Dictionary::from_words(words, 2, 6);
        let lut = SingleLetterLut::new(2, 6);
        GraphBuilder::new(&dictionary, &lut).build()
    }

    #[test]
    fn same_word_is_single_step_ladder() {
        let graph = graph_of(&["CAT"]);
        assert_eq!(find_ladder(&graph, "CAT", "CAT", 10).unwrap(), ["CAT"]);
    }

    #[test]
    fn ladder_crosses_lengths() {
        let graph = graph_of(&["AT", "CAT", "CATS", "COTS"]);
        let ladder = find_ladder(&graph, "AT", "COTS", 10).unwrap();
        assert_eq!(ladder, ["AT", "CAT", "CATS", "COTS"]);
    }

    #[test]
    fn ladder_walks_change_edges_backwards() {
        // Change edges are stored later-word-first; search must ignore direction
        let graph = graph_of(&["DOG", "COG", "COT", "CAT"]);
        let ladder = find_ladder(&graph, "DOG", "CAT", 10).unwrap();
        assert_eq!(ladder, ["DOG", "COG", "COT", "CAT"]);
    }

    #[test]
    fn ladder_is_shortest() {
        let graph = graph_of(&["CAT", "COT", "COG", "DOG", "CAG", "DAG"]);
        let ladder = find_ladder(&graph, "CAT", "DOG", 10).unwrap();
        assert_eq!(ladder.len(), 4);
    }

    #[test]
    fn unknown_word() {
        let graph = graph_of(&["CAT", "BAT"]);
        assert_eq!(
            find_ladder(&graph, "CAT", "DOG", 10),
            Err(LadderError::UnknownWord("DOG".to_string()))
        );
    }

    #[test]
    fn unreachable_word() {
        let graph = graph_of(&["CAT", "BAT", "DOG"]);
        assert!(matches!(
            find_ladder(&graph, "CAT", "DOG", 10),
            Err(LadderError::Unreachable { .. })
        ));
    }

    #[test]
    fn depth_limit_is_respected() {
        let graph = graph_of(&["CAT", "COT", "COG", "DOG"]);
        assert!(find_ladder(&graph, "CAT", "DOG", 2).is_err());
        assert!(find_ladder(&graph, "CAT", "DOG", 3).is_ok());
    }
}
