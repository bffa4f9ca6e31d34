//! Word Graph - CLI
//!
//! Builds the single-edit graph over a word list and writes `nodes.csv` and
//! `edges.csv` for graph visualization tools.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use word_graph::{
    commands::{BuildConfig, build_graph, find_neighbors, run_build, solve_ladder},
    config::GraphConfig,
    graph::DEFAULT_MAX_DEPTH,
    output::{print_build_result, print_ladder_result, print_neighbors_result, print_stats},
    wordlists::WordSource,
};

#[derive(Parser)]
#[command(
    name = "word_graph",
    about = "Connects words one letter change, insertion or deletion apart",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'sample' (embedded) or path to a file with one word per line.
    /// Falls back to WORD_GRAPH_WORDLIST, then 'sample'
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,

    /// Shortest word length to include
    #[arg(long, global = true)]
    min_len: Option<usize>,

    /// Longest word length to include (at most 8)
    #[arg(long, global = true)]
    max_len: Option<usize>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the graph and write nodes.csv and edges.csv (default)
    Build {
        /// Output directory
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
    },

    /// Print graph statistics without writing files
    Stats,

    /// List the words one edit away from a word
    Neighbors {
        /// The word to look up
        word: String,
    },

    /// Find a shortest chain of edits between two words
    Ladder {
        /// Starting word
        from: String,

        /// Target word
        to: String,

        /// Give up after this many steps
        #[arg(short = 'd', long, default_value_t = DEFAULT_MAX_DEPTH)]
        max_depth: usize,
    },
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("word_graph={default_level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Merge environment defaults with command-line overrides
fn resolve_config(cli: &Cli) -> Result<GraphConfig> {
    let mut config = GraphConfig::from_env().context("invalid environment configuration")?;

    if let Some(wordlist) = &cli.wordlist {
        config.source = WordSource::from_name(wordlist);
    }
    if let Some(min_len) = cli.min_len {
        config.min_len = min_len;
    }
    if let Some(max_len) = cli.max_len {
        config.max_len = max_len;
    }

    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = resolve_config(&cli)?;

    // Default to Build into the current directory if no command given
    let command = cli.command.unwrap_or_else(|| Commands::Build {
        output: PathBuf::from("."),
    });

    match command {
        Commands::Build { output } => run_build_command(config, output),
        Commands::Stats => run_stats_command(&config),
        Commands::Neighbors { word } => run_neighbors_command(&config, &word),
        Commands::Ladder {
            from,
            to,
            max_depth,
        } => run_ladder_command(&config, &from, &to, max_depth),
    }
}

fn run_build_command(config: GraphConfig, output: PathBuf) -> Result<()> {
    println!("Building word graph from {}...", config.source);

    let mut build_config = BuildConfig::new(config, Some(output));
    build_config.show_progress = true;

    let result = run_build(&build_config)?;
    print_build_result(&result);
    Ok(())
}

fn run_stats_command(config: &GraphConfig) -> Result<()> {
    let (graph, _) = build_graph(config, true)?;
    print_stats(&graph.stats());
    Ok(())
}

fn run_neighbors_command(config: &GraphConfig, word: &str) -> Result<()> {
    let (graph, _) = build_graph(config, false)?;
    let result = find_neighbors(word, &graph)?;
    print_neighbors_result(&result);
    Ok(())
}

fn run_ladder_command(config: &GraphConfig, from: &str, to: &str, max_depth: usize) -> Result<()> {
    let (graph, _) = build_graph(config, false)?;
    let result = solve_ladder(from, to, max_depth, &graph)?;
    print_ladder_result(&result);
    Ok(())
}
