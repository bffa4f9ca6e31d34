//! The word edit graph
//!
//! Built once by `GraphBuilder`, then only read: exported, summarized, or
//! searched for ladders.

mod builder;
mod edge;
pub mod ladder;

pub use builder::GraphBuilder;
pub use edge::Edge;
pub use ladder::{DEFAULT_MAX_DEPTH, LadderError, find_ladder};

use crate::core::EditKind;
use std::collections::BTreeMap;

/// Nodes and edges of a finished graph
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    nodes: Vec<String>,
    edges: Vec<Edge>,
}

/// A word one edit away from some other word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbor<'a> {
    pub word: &'a str,
    pub kind: EditKind,
}

/// Summary counts for a graph
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphStats {
    pub node_count: usize,
    pub nodes_by_length: BTreeMap<usize, usize>,
    pub change_edges: usize,
    pub add_edges: usize,
    pub remove_edges: usize,
    /// Nodes with no edge at all
    pub isolated_nodes: usize,
}

impl GraphStats {
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.change_edges + self.add_edges + self.remove_edges
    }
}

impl Graph {
    #[must_use]
    pub const fn new(nodes: Vec<String>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    /// Every distinct word, by length then input order
    #[must_use]
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    /// Every edge in discovery order
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether `word` is a node
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.nodes.iter().any(|node| node == word)
    }

    /// Words reachable from `word` in one edit
    ///
    /// `Change` edges count from either end. `Add`/`Remove` edges are
    /// followed from their source only, since their mirror is stored too.
    #[must_use]
    pub fn neighbors(&self, word: &str) -> Vec<Neighbor<'_>> {
        self.edges
            .iter()
            .filter_map(|edge| {
                let other = match edge.kind {
                    _ if edge.source == word => &edge.target,
                    EditKind::Change if edge.target == word => &edge.source,
                    _ => return None,
                };
                Some(Neighbor {
                    word: other,
                    kind: edge.kind,
                })
            })
            .collect()
    }

    /// Node and edge counts
    #[must_use]
    pub fn stats(&self) -> GraphStats {
        let mut stats = GraphStats {
            node_count: self.nodes.len(),
            ..GraphStats::default()
        };

        for node in &self.nodes {
            *stats.nodes_by_length.entry(node.len()).or_insert(0) += 1;
        }

        let mut connected = rustc_hash::FxHashSet::default();
        for edge in &self.edges {
            match edge.kind {
                EditKind::Change => stats.change_edges += 1,
                EditKind::Add => stats.add_edges += 1,
                EditKind::Remove => stats.remove_edges += 1,
            }
            connected.insert(edge.source.as_str());
            connected.insert(edge.target.as_str());
        }
        stats.isolated_nodes = self
            .nodes
            .iter()
            .filter(|node| !connected.contains(node.as_str()))
            .count();

        stats
    }
}
