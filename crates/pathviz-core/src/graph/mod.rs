//! Graph model and shortest-path operations
//!
//! Provides the weighted undirected graph arena and the algorithms over it:
//! - Graph construction (manual, random, or seeded from text)
//! - Dijkstra path-finding with a pinned deterministic tie-break
//! - Step-by-step traces for driving animation frontends

pub mod engine;
pub mod model;
pub mod name;
pub mod parse;
pub mod random;
pub mod trace;

pub use engine::{shortest_path, PathResult};
pub use model::{Edge, EdgeId, Graph, NodeId};
pub use name::{node_name, parse_node_ref};
pub use parse::{format_graph, parse_graph};
pub use random::{random_graph, RandomGraphOptions};
pub use trace::{shortest_path_traced, Step};
