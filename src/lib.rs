//! Word Graph
//!
//! Connects every pair of words one edit apart (a letter changed, added or
//! removed) and exports the result as node and edge tables.
//!
//! # Quick Start
//!
//! ```rust
//! use word_graph::core::SingleLetterLut;
//! use word_graph::graph::GraphBuilder;
//! use word_graph::wordlists::Dictionary;
//!
//! let dictionary = Dictionary::from_words(["cat", "bat", "cats", "at"], 2, 4);
//! let lut = SingleLetterLut::new(2, 4);
//! let graph = GraphBuilder::new(&dictionary, &lut).build();
//!
//! assert_eq!(graph.node_count(), 4);
//! assert_eq!(graph.edge_count(), 7);
//! ```

// Word encoding and edit detection
pub mod core;

// Run configuration
pub mod config;

// Word lists and the length-bucketed dictionary
pub mod wordlists;

// Graph construction and search
pub mod graph;

// CSV export
pub mod export;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
