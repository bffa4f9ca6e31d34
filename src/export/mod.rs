//! Graph export to delimited text
//!
//! Two tables for graph tools such as Gephi: `nodes.csv` (`Id,Label`) and
//! `edges.csv` (`Source,Target,Weight`). Words equal to a DOT keyword get a
//! leading underscore in both tables so the labels stay consistent.

mod csv;

pub use csv::{
    EDGES_FILE, EDGES_HEADER, ExportError, ExportSummary, NODES_FILE, NODES_HEADER,
    RESERVED_WORDS, escape_label, export_to_dir, write_edges, write_nodes,
};
