//! Random graph generation
//!
//! Builds a connected chain through all nodes, then adds extra edges
//! between non-consecutive pairs with the configured probability. Chain
//! edges guarantee every pair of nodes is connected, which keeps randomly
//! generated demos interesting (every query has an answer).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{PathvizError, Result};
use crate::graph::model::Graph;

/// Options for random graph generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomGraphOptions {
    /// Number of nodes to create
    pub nodes: u32,
    /// Probability (0-100) of an extra edge between non-consecutive nodes
    pub density: u8,
    /// Edge weights are drawn uniformly from `1..=max_weight`
    pub max_weight: u64,
    /// Fixed RNG seed for reproducible graphs
    pub seed: Option<u64>,
}

impl Default for RandomGraphOptions {
    fn default() -> Self {
        RandomGraphOptions {
            nodes: 8,
            density: 30,
            max_weight: 10,
            seed: None,
        }
    }
}

/// Generate a random connected graph.
#[tracing::instrument]
pub fn random_graph(opts: &RandomGraphOptions) -> Result<Graph> {
    if opts.max_weight < 1 {
        return Err(PathvizError::invalid_value("max weight", opts.max_weight));
    }
    if opts.density > 100 {
        return Err(PathvizError::invalid_value("density", opts.density));
    }

    let mut rng = match opts.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut graph = Graph::new();
    let nodes: Vec<_> = (0..opts.nodes).map(|_| graph.add_node()).collect();

    // Connectivity chain through consecutive nodes
    for pair in nodes.windows(2) {
        let weight = rng.random_range(1..=opts.max_weight) as i64;
        graph.add_edge(pair[0], pair[1], weight)?;
    }

    // Extra edges between non-consecutive pairs
    let prob = f64::from(opts.density) / 100.0;
    for i in 0..nodes.len() {
        for j in (i + 2)..nodes.len() {
            if rng.random::<f64>() < prob {
                let weight = rng.random_range(1..=opts.max_weight) as i64;
                graph.add_edge(nodes[i], nodes[j], weight)?;
            }
        }
    }

    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "random_graph"
    );
    Ok(graph)
}
