//! Shared helpers for command implementations

use std::fs;
use std::path::Path;

use pathviz_core::error::{GraphError, PathvizError, Result};
use pathviz_core::graph::{node_name, parse_graph, parse_node_ref, Graph, NodeId, PathResult};

/// Read and parse a graph description file
pub fn load_graph(path: &Path) -> Result<Graph> {
    let text = fs::read_to_string(path)?;
    let graph = parse_graph(&text)?;
    tracing::debug!(
        path = %path.display(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "load_graph"
    );
    Ok(graph)
}

/// Resolve a user-supplied node reference against a graph.
///
/// Malformed references are usage errors; well-formed references naming a
/// node the graph does not have surface as `InvalidNode`.
pub fn resolve_node(graph: &Graph, text: &str) -> Result<NodeId> {
    let id = parse_node_ref(text).ok_or_else(|| PathvizError::UnknownNodeRef(text.to_string()))?;
    if !graph.has_node(id) {
        return Err(GraphError::InvalidNode(id).into());
    }
    Ok(id)
}

/// `A (0)` style label used across human output
pub fn node_label(id: NodeId) -> String {
    format!("{} ({})", node_name(id), id)
}

/// `A -> B -> C` rendering of a path
pub fn path_display(path: &[NodeId]) -> String {
    path.iter()
        .map(|&n| node_name(n))
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Stable JSON shape for a path query result shared by `path` and `trace`
pub fn result_json(
    source: NodeId,
    target: NodeId,
    result: Option<&PathResult>,
) -> serde_json::Value {
    match result {
        Some(result) => serde_json::json!({
            "source": source,
            "target": target,
            "found": true,
            "path": result.path,
            "names": result.path.iter().map(|&n| node_name(n)).collect::<Vec<_>>(),
            "distance": result.distance,
        }),
        None => serde_json::json!({
            "source": source,
            "target": target,
            "found": false,
            "path": serde_json::Value::Null,
            "names": serde_json::Value::Null,
            "distance": serde_json::Value::Null,
        }),
    }
}
