//! CSV writers for nodes and edges

use crate::graph::Graph;
use std::borrow::Cow;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Node table file name
pub const NODES_FILE: &str = "nodes.csv";

/// Edge table file name
pub const EDGES_FILE: &str = "edges.csv";

/// Node table header
pub const NODES_HEADER: &str = "Id,Label";

/// Edge table header
pub const EDGES_HEADER: &str = "Source,Target,Weight";

/// DOT keywords that may not appear verbatim as labels
pub const RESERVED_WORDS: [&str; 6] = ["NODE", "EDGE", "GRAPH", "DIGRAPH", "SUBGRAPH", "STRICT"];

/// Prefix marking an escaped reserved word
const ESCAPE_PREFIX: char = '_';

/// Failure writing an output table
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("cannot create output directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// What `export_to_dir` wrote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub nodes_path: PathBuf,
    pub edges_path: PathBuf,
    pub nodes_written: usize,
    pub edges_written: usize,
}

/// Prefix reserved words with an underscore; exact, case-sensitive match
///
/// # Examples
/// ```
/// use word_graph::export::escape_label;
///
/// assert_eq!(escape_label("GRAPH"), "_GRAPH");
/// assert_eq!(escape_label("GRAPHS"), "GRAPHS");
/// assert_eq!(escape_label("graph"), "graph");
/// ```
#[must_use]
pub fn escape_label(word: &str) -> Cow<'_, str> {
    if RESERVED_WORDS.contains(&word) {
        Cow::Owned(format!("{ESCAPE_PREFIX}{word}"))
    } else {
        Cow::Borrowed(word)
    }
}

/// Write the node table, one row per word
///
/// # Errors
/// Returns any I/O error from the writer.
pub fn write_nodes<W: Write>(out: &mut W, graph: &Graph) -> io::Result<usize> {
    writeln!(out, "{NODES_HEADER}")?;
    for node in graph.nodes() {
        let label = escape_label(node);
        writeln!(out, "\"{label}\",\"{label}\"")?;
    }
    Ok(graph.node_count())
}

/// Write the edge table, one row per edge
///
/// # Errors
/// Returns any I/O error from the writer.
pub fn write_edges<W: Write>(out: &mut W, graph: &Graph) -> io::Result<usize> {
    writeln!(out, "{EDGES_HEADER}")?;
    for edge in graph.edges() {
        writeln!(
            out,
            "\"{}\",\"{}\",{}",
            escape_label(&edge.source),
            escape_label(&edge.target),
            edge.weight()
        )?;
    }
    Ok(graph.edge_count())
}

/// Write `nodes.csv` and `edges.csv` into `dir`, creating it if needed
///
/// # Errors
/// Returns `ExportError` naming the directory or file that failed.
pub fn export_to_dir(graph: &Graph, dir: &Path) -> Result<ExportSummary, ExportError> {
    fs::create_dir_all(dir).map_err(|source| ExportError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let nodes_path = dir.join(NODES_FILE);
    let nodes_written = write_table(&nodes_path, |out| write_nodes(out, graph))?;

    let edges_path = dir.join(EDGES_FILE);
    let edges_written = write_table(&edges_path, |out| write_edges(out, graph))?;

    info!(
        nodes = nodes_written,
        edges = edges_written,
        dir = %dir.display(),
        "exported graph"
    );

    Ok(ExportSummary {
        nodes_path,
        edges_path,
        nodes_written,
        edges_written,
    })
}

fn write_table<F>(path: &Path, write: F) -> Result<usize, ExportError>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<usize>,
{
    let wrap = |source: io::Error| ExportError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut out = BufWriter::new(File::create(path).map_err(wrap)?);
    let rows = write(&mut out).map_err(wrap)?;
    out.flush().map_err(wrap)?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EditKind;
    use crate::graph::Edge;

    fn graph() -> Graph {
        Graph::new(
            vec!["EDGE".into(), "EDGY".into(), "HEDGE".into()],
            vec![
                Edge::new("EDGY".into(), "EDGE".into(), EditKind::Change),
                Edge::new("EDGE".into(), "HEDGE".into(), EditKind::Add),
                Edge::new("HEDGE".into(), "EDGE".into(), EditKind::Remove),
            ],
        )
    }

    fn render<F>(write: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<usize>,
    {
        let mut buffer = Vec::new();
        write(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn escapes_every_reserved_word() {
        for word in RESERVED_WORDS {
            assert_eq!(escape_label(word), format!("_{word}"));
        }
        assert_eq!(escape_label("NODES"), "NODES");
        assert_eq!(escape_label("Node"), "Node");
    }

    #[test]
    fn node_table() {
        let graph = graph();
        let text = render(|out| write_nodes(out, &graph));
        assert_eq!(
            text,
            "Id,Label\n\"_EDGE\",\"_EDGE\"\n\"EDGY\",\"EDGY\"\n\"HEDGE\",\"HEDGE\"\n"
        );
    }

    #[test]
    fn edge_table() {
        let graph = graph();
        let text = render(|out| write_edges(out, &graph));
        assert_eq!(
            text,
            "Source,Target,Weight\n\
             \"EDGY\",\"_EDGE\",2\n\
             \"_EDGE\",\"HEDGE\",1\n\
             \"HEDGE\",\"_EDGE\",1\n"
        );
    }

    #[test]
    fn empty_graph_writes_headers_only() {
        let graph = Graph::default();
        assert_eq!(render(|out| write_nodes(out, &graph)), "Id,Label\n");
        assert_eq!(render(|out| write_edges(out, &graph)), "Source,Target,Weight\n");
    }

    #[test]
    fn export_creates_directory_and_files() {
        let dir = tempfile::tempdir().unwrap();
        let out_dir = dir.path().join("nested/out");

        let summary = export_to_dir(&graph(), &out_dir).unwrap();

        assert_eq!(summary.nodes_written, 3);
        assert_eq!(summary.edges_written, 3);
        let nodes = fs::read_to_string(&summary.nodes_path).unwrap();
        let edges = fs::read_to_string(&summary.edges_path).unwrap();
        assert!(nodes.starts_with("Id,Label\n"));
        assert_eq!(edges.lines().count(), 4);
    }

    #[test]
    fn export_into_file_path_fails() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = export_to_dir(&graph(), file.path()).unwrap_err();
        assert!(matches!(err, ExportError::CreateDir { .. }));
    }
}
