//! Display functions for command results

use super::formatters::{bucket_bar, kind_symbol};
use crate::commands::{BuildResult, LadderResult, NeighborsResult};
use crate::core::EditKind;
use crate::graph::GraphStats;
use colored::Colorize;

/// Print per-length node counts and edge totals
pub fn print_stats(stats: &GraphStats) {
    println!("\n📊 {}", "Nodes by length:".bright_cyan().bold());
    let largest = stats.nodes_by_length.values().copied().max().unwrap_or(0);
    for (&length, &count) in &stats.nodes_by_length {
        println!(
            "   {length}: {} {count:6}",
            bucket_bar(count, largest, 40).green()
        );
    }

    println!("\n🔗 {}", "Edges:".bright_cyan().bold());
    println!(
        "   Change (weight 2):  {}",
        stats.change_edges.to_string().bright_yellow()
    );
    println!("   Add    (weight 1):  {}", stats.add_edges);
    println!("   Remove (weight 1):  {}", stats.remove_edges);
    println!(
        "   Total:              {}",
        stats.edge_count().to_string().bright_yellow().bold()
    );
    println!(
        "   Isolated words:     {}",
        stats.isolated_nodes.to_string().bright_black()
    );
}

/// Print the result of a build
pub fn print_build_result(result: &BuildResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "WORD GRAPH".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Words:            {}", result.stats.node_count);
    println!("   LUT patterns:     {}", result.lut_patterns);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    print_stats(&result.stats);

    if let Some(export) = &result.export {
        println!("\n💾 {}", "Written:".bright_cyan().bold());
        println!(
            "   {} ({} rows)",
            export.nodes_path.display(),
            export.nodes_written
        );
        println!(
            "   {} ({} rows)",
            export.edges_path.display(),
            export.edges_written
        );
    }
}

/// Print the neighbors of a word
pub fn print_neighbors_result(result: &NeighborsResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Neighbors of {}: {}",
        result.word.bright_yellow().bold(),
        result.neighbors.len()
    );
    println!("{}", "─".repeat(60).cyan());

    for kind in [EditKind::Change, EditKind::Add, EditKind::Remove] {
        let words: Vec<&str> = result
            .neighbors
            .iter()
            .filter(|(_, k)| *k == kind)
            .map(|(w, _)| w.as_str())
            .collect();
        if words.is_empty() {
            continue;
        }
        println!(
            "\n{} {} ({}):",
            kind_symbol(kind),
            kind.label().bright_cyan(),
            words.len()
        );
        println!("   {}", words.join(" "));
    }
}

/// Print a word ladder
pub fn print_ladder_result(result: &LadderResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Ladder: {} → {}",
        result.from.bright_yellow().bold(),
        result.to.bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    println!("\n   {}", result.from);
    for (word, kind) in &result.steps {
        println!(" {} {word}", kind_symbol(*kind).to_string().bright_black());
    }

    println!();
    println!(
        "{}",
        format!("✅ {} steps", result.len()).green().bold()
    );
}
