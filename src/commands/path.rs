//! `pathviz path` command - shortest path between two nodes
//!
//! An unreachable target is a valid result, not an error: the command
//! still exits 0 and reports `found: false`.

use std::path::Path;
use std::time::Instant;

use tracing::debug;

use crate::cli::{Cli, OutputFormat};
use crate::commands::helpers::{load_graph, node_label, path_display, resolve_node, result_json};
use pathviz_core::error::Result;
use pathviz_core::graph::shortest_path;

/// Execute the path command
pub fn execute(cli: &Cli, file: &Path, source: &str, target: &str, start: Instant) -> Result<()> {
    let graph = load_graph(file)?;
    let source = resolve_node(&graph, source)?;
    let target = resolve_node(&graph, target)?;

    let result = shortest_path(&graph, source, target)?;

    if cli.verbose {
        debug!(%source, %target, found = result.is_some(), elapsed = ?start.elapsed(), "shortest_path");
    }

    match cli.format {
        OutputFormat::Json => {
            let output = result_json(source, target, result.as_ref());
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => match result {
            Some(result) => {
                println!("path: {}", path_display(&result.path));
                println!(
                    "ids: {}",
                    result
                        .path
                        .iter()
                        .map(|n| n.to_string())
                        .collect::<Vec<_>>()
                        .join(" -> ")
                );
                println!("distance: {}", result.distance);
            }
            None => {
                println!(
                    "no path from {} to {}",
                    node_label(source),
                    node_label(target)
                );
            }
        },
    }

    Ok(())
}
