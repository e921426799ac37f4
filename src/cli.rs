//! CLI argument parsing for pathviz
//!
//! Uses clap derive with global flags `--format`, `--quiet`, `--verbose`,
//! `--log-level`, `--log-json` and `--config`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use pathviz_core::format::OutputFormat;

/// Value parser for `--format` (core type, parsed via FromStr)
fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Pathviz - Dijkstra shortest-path CLI with replayable traces
#[derive(Parser, Debug)]
#[command(name = "pathviz")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human or json)
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level override (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "PATHVIZ_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON to stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Config file path (defaults to ./pathviz.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the shortest path between two nodes of a graph file
    Path {
        /// Graph description file (`n e` header, then `u v w` lines)
        file: PathBuf,
        /// Source node (id like `0` or name like `A`)
        source: String,
        /// Target node (id like `2` or name like `C`)
        target: String,
    },

    /// Compute the shortest path and emit the full algorithm step trace
    Trace {
        /// Graph description file (`n e` header, then `u v w` lines)
        file: PathBuf,
        /// Source node (id like `0` or name like `A`)
        source: String,
        /// Target node (id like `2` or name like `C`)
        target: String,
    },

    /// Generate a random connected graph in the text format
    Random {
        /// Number of nodes
        #[arg(long)]
        nodes: Option<u32>,

        /// Probability (0-100) of extra edges between non-consecutive nodes
        #[arg(long)]
        density: Option<u8>,

        /// Maximum edge weight
        #[arg(long)]
        max_weight: Option<u64>,

        /// RNG seed for reproducible graphs
        #[arg(long)]
        seed: Option<u64>,

        /// Write the graph to a file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Parse a graph file and summarize its nodes and adjacency
    Show {
        /// Graph description file (`n e` header, then `u v w` lines)
        file: PathBuf,
    },
}
