//! Graph construction
//!
//! Same-length pairs are tested with the lookup table, one test per
//! unordered pair. Adjacent lengths are compared word against word in both
//! directions, so every insertion pair yields an `Add` edge one way and a
//! `Remove` edge the other.

use super::{Edge, Graph};
use crate::core::{DiffDetector, EditKind, SingleLetterLut, decode};
use crate::wordlists::Dictionary;
use rayon::prelude::*;
use std::time::Instant;
use tracing::{debug, info};

/// Builds a `Graph` from a dictionary and a lookup table
pub struct GraphBuilder<'a> {
    dictionary: &'a Dictionary,
    detector: DiffDetector<'a>,
}

impl<'a> GraphBuilder<'a> {
    /// # Panics
    /// Panics in debug mode if the table does not cover every dictionary length
    #[must_use]
    pub fn new(dictionary: &'a Dictionary, lut: &'a SingleLetterLut) -> Self {
        debug_assert!(
            lut.min_len() <= dictionary.min_len() && dictionary.max_len() <= lut.max_len(),
            "lookup table must cover every dictionary length"
        );
        Self {
            dictionary,
            detector: DiffDetector::new(lut),
        }
    }

    /// `Change` edges among words of `length` letters
    ///
    /// Each unordered pair `(i, j)` with `i < j` is tested exactly once and
    /// emitted as `bucket[j] -> bucket[i]`. The scan is parallel over `j`;
    /// output order matches a sequential scan.
    #[must_use]
    pub fn change_edges(&self, length: usize) -> Vec<Edge> {
        let bucket = self.dictionary.bucket(length);
        let lut = self.detector.lut();

        (0..bucket.len())
            .into_par_iter()
            .flat_map_iter(move |j| {
                let later = bucket[j];
                bucket[..j]
                    .iter()
                    .filter(move |&&earlier| lut.is_change_pair(later, earlier, length))
                    .map(move |&earlier| {
                        Edge::new(
                            decode(later, length),
                            decode(earlier, length),
                            EditKind::Change,
                        )
                    })
            })
            .collect()
    }

    /// `Add` or `Remove` edges from words of `from_len` to words of `to_len`
    ///
    /// Lengths must differ by exactly one; otherwise nothing is returned.
    #[must_use]
    pub fn adjacent_edges(&self, from_len: usize, to_len: usize) -> Vec<Edge> {
        if from_len.abs_diff(to_len) != 1 {
            return Vec::new();
        }

        let from = self.dictionary.bucket(from_len);
        let to = self.dictionary.bucket(to_len);
        let detector = self.detector;

        from.par_iter()
            .flat_map_iter(move |&w1| {
                to.iter().filter_map(move |&w2| {
                    detector
                        .classify_encoded(w1, from_len, w2, to_len)
                        .map(|kind| Edge::new(decode(w1, from_len), decode(w2, to_len), kind))
                })
            })
            .collect()
    }

    /// All edges originating from words of `length` letters
    ///
    /// Changes within the length, then removals to `length - 1`, then
    /// additions to `length + 1`, each only if that length is indexed.
    #[must_use]
    pub fn edges_for_length(&self, length: usize) -> Vec<Edge> {
        let mut edges = self.change_edges(length);

        if length > self.dictionary.min_len() {
            edges.extend(self.adjacent_edges(length, length - 1));
        }
        if length < self.dictionary.max_len() {
            edges.extend(self.adjacent_edges(length, length + 1));
        }

        edges
    }

    /// Build the full graph
    #[must_use]
    pub fn build(&self) -> Graph {
        self.build_with(|_, _| {})
    }

    /// Build the full graph, calling `on_length(length, edges_found)` after
    /// each length is scanned
    #[must_use]
    pub fn build_with<F>(&self, mut on_length: F) -> Graph
    where
        F: FnMut(usize, usize),
    {
        let start = Instant::now();
        let mut edges = Vec::new();

        for (length, bucket) in self.dictionary.buckets() {
            let found = self.edges_for_length(length);
            debug!(length, words = bucket.len(), edges = found.len(), "scanned length");
            on_length(length, found.len());
            edges.extend(found);
        }

        let nodes: Vec<String> = self.dictionary.iter_words().collect();
        info!(
            nodes = nodes.len(),
            edges = edges.len(),
            elapsed_ms = start.elapsed().as_millis(),
            "graph built"
        );

        Graph::new(nodes, edges)
    }
}
