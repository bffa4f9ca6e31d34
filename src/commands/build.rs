//! Build command
//!
//! Loads the dictionary, builds the lookup table and graph, and optionally
//! exports the CSV tables.

use crate::config::GraphConfig;
use crate::core::SingleLetterLut;
use crate::export::{ExportSummary, export_to_dir};
use crate::graph::{Graph, GraphBuilder, GraphStats};
use crate::wordlists::Dictionary;
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::info;

/// Configuration for a build run
pub struct BuildConfig {
    pub graph: GraphConfig,
    /// Where to write `nodes.csv` and `edges.csv`; `None` skips export
    pub output_dir: Option<PathBuf>,
    pub show_progress: bool,
}

impl BuildConfig {
    #[must_use]
    pub const fn new(graph: GraphConfig, output_dir: Option<PathBuf>) -> Self {
        Self {
            graph,
            output_dir,
            show_progress: false,
        }
    }
}

/// Result of a build run
pub struct BuildResult {
    pub graph: Graph,
    pub stats: GraphStats,
    pub lut_patterns: usize,
    pub export: Option<ExportSummary>,
    pub duration: Duration,
}

/// Load, index and connect the configured word list
///
/// Returns the graph and the number of lookup table patterns used.
///
/// # Errors
///
/// Returns an error if:
/// - The configuration is invalid (length bounds)
/// - The word list cannot be read or has no usable words
pub fn build_graph(config: &GraphConfig, show_progress: bool) -> Result<(Graph, usize)> {
    config.validate().context("invalid configuration")?;

    let dictionary = Dictionary::load(&config.source, config.min_len, config.max_len)
        .context("failed to load dictionary")?;

    let lut = SingleLetterLut::new(config.min_len, config.max_len);
    info!(patterns = lut.len(), "built single-letter lookup table");

    let pb = if show_progress {
        let pb = ProgressBar::new(config.lengths().count() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] length {pos}/{len} | {msg}")?
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut total = 0;
    let graph = GraphBuilder::new(&dictionary, &lut).build_with(|length, found| {
        total += found;
        pb.set_message(format!("{total} edges (length {length} done)"));
        pb.inc(1);
    });
    pb.finish_with_message(format!("{} edges", graph.edge_count()));

    Ok((graph, lut.len()))
}

/// Build the graph and export it if an output directory is set
///
/// # Errors
///
/// Returns an error if building fails (see `build_graph`) or the output
/// tables cannot be written.
pub fn run_build(config: &BuildConfig) -> Result<BuildResult> {
    let start = Instant::now();

    let (graph, lut_patterns) = build_graph(&config.graph, config.show_progress)?;

    let export = config
        .output_dir
        .as_deref()
        .map(|dir| export_to_dir(&graph, dir))
        .transpose()
        .context("failed to export graph")?;

    let stats = graph.stats();

    Ok(BuildResult {
        graph,
        stats,
        lut_patterns,
        export,
        duration: start.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WordSource;
    use std::fs;

    fn file_config(dir: &std::path::Path, words: &str) -> GraphConfig {
        let path = dir.join("words.txt");
        fs::write(&path, words).unwrap();
        GraphConfig {
            min_len: 2,
            max_len: 4,
            source: WordSource::File(path),
        }
    }

    #[test]
    fn build_without_export() {
        let dir = tempfile::tempdir().unwrap();
        let config = BuildConfig::new(file_config(dir.path(), "cat\nbat\ncats\nat\n"), None);

        let result = run_build(&config).unwrap();

        assert!(result.export.is_none());
        assert_eq!(result.stats.node_count, 4);
        assert_eq!(result.stats.change_edges, 1);
        assert_eq!(result.stats.add_edges, 3);
        assert_eq!(result.stats.remove_edges, 3);
        assert_eq!(result.lut_patterns, (2 + 3 + 4) * 31);
    }

    #[test]
    fn build_with_export() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        let config = BuildConfig::new(file_config(dir.path(), "cat\nbat\n"), Some(out.clone()));

        let result = run_build(&config).unwrap();

        let summary = result.export.unwrap();
        assert_eq!(summary.nodes_written, 2);
        assert_eq!(summary.edges_written, 1);
        assert!(out.join("nodes.csv").exists());
        assert!(out.join("edges.csv").exists());
    }

    #[test]
    fn invalid_config_is_rejected_before_loading() {
        let config = GraphConfig {
            min_len: 2,
            max_len: 12,
            source: WordSource::File("does/not/exist.txt".into()),
        };
        let err = build_graph(&config, false).err().unwrap();
        assert!(err.to_string().contains("invalid configuration"));
    }

    #[test]
    fn missing_word_list_is_fatal() {
        let config = GraphConfig {
            source: WordSource::File("does/not/exist.txt".into()),
            ..GraphConfig::default()
        };
        let err = build_graph(&config, false).err().unwrap();
        assert!(err.to_string().contains("failed to load dictionary"));
    }

    #[test]
    fn embedded_sample_builds() {
        let (graph, _) = build_graph(&GraphConfig::default(), false).unwrap();
        assert!(graph.node_count() > 1000);
        assert!(graph.edge_count() > graph.node_count());
    }
}
