//! `pathviz show` command - summarize a parsed graph file

use std::path::Path;
use std::time::Instant;

use tracing::debug;

use crate::cli::{Cli, OutputFormat};
use crate::commands::helpers::{load_graph, node_label};
use pathviz_core::error::Result;
use pathviz_core::graph::node_name;

/// Execute the show command
pub fn execute(cli: &Cli, file: &Path, start: Instant) -> Result<()> {
    let graph = load_graph(file)?;

    if cli.verbose {
        debug!(elapsed = ?start.elapsed(), "show_graph");
    }

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "nodes": graph.node_count(),
                "edges": graph.edges(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!("nodes: {}", graph.node_count());
            println!("edges: {}", graph.edge_count());
            for node in graph.nodes() {
                let adjacency = graph
                    .neighbors(node)?
                    .into_iter()
                    .map(|(n, w)| format!("{}({})", node_name(n), w))
                    .collect::<Vec<_>>()
                    .join(", ");
                if adjacency.is_empty() {
                    println!("{}: -", node_label(node));
                } else {
                    println!("{}: {}", node_label(node), adjacency);
                }
            }
        }
    }

    Ok(())
}
