//! `pathviz trace` command - shortest path with the full step trace
//!
//! The step sequence is fully materialized before printing; an animation
//! frontend maps each step to a highlight change and a timed pause.

use std::path::Path;
use std::time::Instant;

use tracing::debug;

use crate::cli::{Cli, OutputFormat};
use crate::commands::helpers::{load_graph, node_label, path_display, resolve_node, result_json};
use pathviz_core::error::Result;
use pathviz_core::graph::{node_name, shortest_path_traced, Step};

/// Execute the trace command
pub fn execute(cli: &Cli, file: &Path, source: &str, target: &str, start: Instant) -> Result<()> {
    let graph = load_graph(file)?;
    let source = resolve_node(&graph, source)?;
    let target = resolve_node(&graph, target)?;

    let (steps, result) = shortest_path_traced(&graph, source, target)?;

    if cli.verbose {
        debug!(%source, %target, steps = steps.len(), elapsed = ?start.elapsed(), "shortest_path_traced");
    }

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "steps": steps,
                "result": result_json(source, target, result.as_ref()),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            let width = steps.len().to_string().len();
            for (i, step) in steps.iter().enumerate() {
                println!("{:>width$}. {}", i + 1, step_display(step), width = width);
            }
            match result {
                Some(result) => {
                    println!();
                    println!("path: {}", path_display(&result.path));
                    println!("distance: {}", result.distance);
                }
                None => {
                    println!();
                    println!(
                        "no path from {} to {}",
                        node_label(source),
                        node_label(target)
                    );
                }
            }
        }
    }

    Ok(())
}

/// One-line human rendering of a step
fn step_display(step: &Step) -> String {
    match step {
        Step::Initialize { source } => {
            format!("initialize source={}", node_name(*source))
        }
        Step::VisitNode { node, distance } => {
            format!("visit {} distance={}", node_name(*node), distance)
        }
        Step::CheckNeighbor {
            from,
            to,
            current_distance,
        } => format!(
            "check {} -> {} (at distance {})",
            node_name(*from),
            node_name(*to),
            current_distance
        ),
        Step::UpdateDistance {
            from,
            to,
            new_distance,
        } => format!(
            "update {} via {} distance={}",
            node_name(*to),
            node_name(*from),
            new_distance
        ),
        Step::Complete {
            target,
            final_distance,
        } => match final_distance {
            Some(distance) => format!("complete target={} distance={}", node_name(*target), distance),
            None => format!("complete target={} unreachable", node_name(*target)),
        },
    }
}
