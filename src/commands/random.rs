//! `pathviz random` command - generate a random connected graph
//!
//! Defaults come from `pathviz.toml` when present; flags always win.

use std::fs;
use std::path::Path;
use std::time::Instant;

use tracing::debug;

use crate::cli::{Cli, OutputFormat};
use pathviz_core::config::VizConfig;
use pathviz_core::error::Result;
use pathviz_core::graph::{format_graph, random_graph};

/// Execute the random command
pub fn execute(
    cli: &Cli,
    nodes: Option<u32>,
    density: Option<u8>,
    max_weight: Option<u64>,
    seed: Option<u64>,
    output: Option<&Path>,
    start: Instant,
) -> Result<()> {
    let config = VizConfig::load(cli.config.as_deref())?;

    let mut opts = config.random_options(seed);
    if let Some(nodes) = nodes {
        opts.nodes = nodes;
    }
    if let Some(density) = density {
        opts.density = density;
    }
    if let Some(max_weight) = max_weight {
        opts.max_weight = max_weight;
    }

    let graph = random_graph(&opts)?;
    let text = format_graph(&graph);

    if cli.verbose {
        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            elapsed = ?start.elapsed(),
            "random_graph"
        );
    }

    if let Some(path) = output {
        fs::write(path, &text)?;
        match cli.format {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "file": path.display().to_string(),
                    "nodes": graph.node_count(),
                    "edges": graph.edge_count(),
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Human => {
                if !cli.quiet {
                    println!(
                        "wrote {} nodes, {} edges to {}",
                        graph.node_count(),
                        graph.edge_count(),
                        path.display()
                    );
                }
            }
        }
        return Ok(());
    }

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "nodes": graph.node_count(),
                "edges": graph.edges(),
                "text": text,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            print!("{}", text);
        }
    }

    Ok(())
}
