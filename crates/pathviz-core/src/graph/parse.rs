//! Graph description text format
//!
//! Competitive-programming style seed format: a header `n e`, then `e`
//! lines `u v w` where `u`/`v` are 1-based node labels and `w` the edge
//! weight. Example:
//!
//! ```text
//! 3 2
//! 1 2 3
//! 2 3 1
//! ```
//!
//! Labels are translated to the core's 0-based ids at this boundary.
//! Malformed lines are errors, never skipped.

use crate::error::{PathvizError, Result};
use crate::graph::model::{Graph, NodeId};

/// Parse graph text into a fresh [`Graph`].
pub fn parse_graph(text: &str) -> Result<Graph> {
    let mut lines = text.lines().enumerate().filter(|(_, l)| !l.trim().is_empty());

    let (header_no, header) = lines
        .next()
        .ok_or_else(|| PathvizError::graph_text(1, "empty input, expected `n e` header"))?;
    let (node_count, edge_count) = parse_header(header_no + 1, header)?;

    let mut graph = Graph::new();
    for _ in 0..node_count {
        graph.add_node();
    }

    for _ in 0..edge_count {
        let (line_no, line) = lines.next().ok_or_else(|| {
            PathvizError::graph_text(
                header_no + 1,
                format!("header promises {} edges, input has fewer", edge_count),
            )
        })?;
        let (u, v, weight) = parse_edge_line(line_no + 1, line)?;
        graph.add_edge(u, v, weight)?;
    }

    if let Some((line_no, _)) = lines.next() {
        return Err(PathvizError::graph_text(
            line_no + 1,
            format!("trailing content after {} edge lines", edge_count),
        ));
    }

    Ok(graph)
}

/// Serialize a graph back to the text format, with 1-based labels.
pub fn format_graph(graph: &Graph) -> String {
    let mut out = format!("{} {}\n", graph.node_count(), graph.edge_count());
    for edge in graph.edges() {
        out.push_str(&format!(
            "{} {} {}\n",
            edge.a.value() + 1,
            edge.b.value() + 1,
            edge.weight
        ));
    }
    out
}

fn parse_header(line_no: usize, line: &str) -> Result<(u32, usize)> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [n, e] = fields.as_slice() else {
        return Err(PathvizError::graph_text(
            line_no,
            "header must be exactly `n e`",
        ));
    };
    let n = n
        .parse::<u32>()
        .map_err(|_| PathvizError::graph_text(line_no, format!("invalid node count `{}`", n)))?;
    let e = e
        .parse::<usize>()
        .map_err(|_| PathvizError::graph_text(line_no, format!("invalid edge count `{}`", e)))?;
    Ok((n, e))
}

fn parse_edge_line(line_no: usize, line: &str) -> Result<(NodeId, NodeId, i64)> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [u, v, w] = fields.as_slice() else {
        return Err(PathvizError::graph_text(
            line_no,
            "edge line must be exactly `u v w`",
        ));
    };
    let u = parse_label(line_no, u)?;
    let v = parse_label(line_no, v)?;
    let w = w
        .parse::<i64>()
        .map_err(|_| PathvizError::graph_text(line_no, format!("invalid weight `{}`", w)))?;
    Ok((u, v, w))
}

/// 1-based text label -> 0-based NodeId
fn parse_label(line_no: usize, text: &str) -> Result<NodeId> {
    let label = text
        .parse::<u32>()
        .map_err(|_| PathvizError::graph_text(line_no, format!("invalid node label `{}`", text)))?;
    if label == 0 {
        return Err(PathvizError::graph_text(
            line_no,
            "node labels are 1-based, got `0`",
        ));
    }
    Ok(NodeId::new(label - 1))
}
