//! Graph arena: node and edge tables
//!
//! Nodes and edges are identified by integer ids into graph-owned tables
//! rather than by references, so the graph is the single owner of all
//! topology and weights. A visualizer only ever grows its graph; there are
//! no removal operations.

use serde::Serialize;
use std::fmt;

use crate::error::GraphError;

/// Stable node identifier, assigned sequentially from 0 at creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct NodeId(u32);

impl NodeId {
    pub fn new(id: u32) -> Self {
        NodeId(id)
    }

    pub fn value(self) -> u32 {
        self.0
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Index into the graph's edge table, in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct EdgeId(u32);

impl EdgeId {
    pub fn value(self) -> u32 {
        self.0
    }
}

/// Undirected weighted connection between two distinct nodes.
///
/// The endpoint pair is unordered: `(u, v)` and `(v, u)` denote the same
/// edge. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub a: NodeId,
    pub b: NodeId,
    pub weight: u64,
}

impl Edge {
    /// The endpoint opposite `n`, or `None` if `n` is not an endpoint.
    pub fn other_endpoint(&self, n: NodeId) -> Option<NodeId> {
        if self.a == n {
            Some(self.b)
        } else if self.b == n {
            Some(self.a)
        } else {
            None
        }
    }

    /// Whether this edge connects the unordered pair `(u, v)`.
    pub fn connects(&self, u: NodeId, v: NodeId) -> bool {
        (self.a == u && self.b == v) || (self.a == v && self.b == u)
    }
}

/// Weighted undirected graph owning its node and edge tables.
///
/// Nodes carry no attributes beyond their id; display names are derived
/// (see [`crate::graph::name`]). Adjacency is recomputed per query by
/// scanning the edge table, so neighbor order is edge-insertion order.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    node_count: u32,
    edges: Vec<Edge>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new node with the next sequential identifier. Never fails.
    pub fn add_node(&mut self) -> NodeId {
        let id = NodeId(self.node_count);
        self.node_count += 1;
        id
    }

    /// Add an undirected edge between `u` and `v` with the given weight.
    ///
    /// Rejects unknown endpoints, self-loops, non-positive weights and
    /// parallel edges; the graph is unchanged on failure.
    pub fn add_edge(&mut self, u: NodeId, v: NodeId, weight: i64) -> Result<EdgeId, GraphError> {
        if !self.has_node(u) {
            return Err(GraphError::InvalidNode(u));
        }
        if !self.has_node(v) {
            return Err(GraphError::InvalidNode(v));
        }
        if u == v {
            return Err(GraphError::SelfLoop(u));
        }
        if weight < 1 {
            return Err(GraphError::InvalidWeight(weight));
        }
        if self.edges.iter().any(|e| e.connects(u, v)) {
            return Err(GraphError::DuplicateEdge(u, v));
        }

        let id = EdgeId(self.edges.len() as u32);
        self.edges.push(Edge {
            a: u,
            b: v,
            weight: weight as u64,
        });
        Ok(id)
    }

    /// All nodes adjacent to `n` with the connecting weight, in
    /// edge-insertion order. Recomputed on each call.
    pub fn neighbors(&self, n: NodeId) -> Result<Vec<(NodeId, u64)>, GraphError> {
        if !self.has_node(n) {
            return Err(GraphError::InvalidNode(n));
        }
        Ok(self
            .edges
            .iter()
            .filter_map(|e| e.other_endpoint(n).map(|m| (m, e.weight)))
            .collect())
    }

    pub fn node_count(&self) -> usize {
        self.node_count as usize
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn has_node(&self, n: NodeId) -> bool {
        n.0 < self.node_count
    }

    /// All node ids in identifier order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.node_count).map(NodeId)
    }

    /// The edge table in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}
