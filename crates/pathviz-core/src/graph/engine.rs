//! Dijkstra shortest-path engine
//!
//! Single-source single-target Dijkstra over non-negative integer weights.
//! The loop is written once and instrumented through [`DijkstraObserver`];
//! the untraced entry point runs it with the no-op `()` observer and the
//! trace recorder (see [`crate::graph::trace`]) with a step collector, so
//! the traced and untraced computations cannot diverge.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use serde::Serialize;

use crate::error::GraphError;
use crate::graph::model::{Graph, NodeId};

/// Sentinel for "not yet reached". Never added to; the relaxation step
/// only adds weights to finalized (finite) distances.
const INFINITY: u64 = u64::MAX;

/// Wrapper for BinaryHeap to use as min-heap (ordered by tentative distance)
///
/// Ties on distance resolve by ascending node id so extraction order is
/// reproducible across runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HeapEntry {
    node: NodeId,
    distance: u64,
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.distance
            .cmp(&other.distance)
            .then(self.node.cmp(&other.node))
    }
}

/// Shortest path from a source to a target, inclusive of both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathResult {
    /// Node sequence from source to target
    pub path: Vec<NodeId>,
    /// Sum of edge weights along `path`
    pub distance: u64,
}

/// Hooks into the algorithm's observable actions.
///
/// Implementations must not influence the computation; default methods do
/// nothing so the plain engine pays for no bookkeeping.
pub(crate) trait DijkstraObserver {
    fn on_initialize(&mut self, _source: NodeId) {}
    fn on_visit(&mut self, _node: NodeId, _distance: u64) {}
    fn on_check_neighbor(&mut self, _from: NodeId, _to: NodeId, _current_distance: u64) {}
    fn on_update_distance(&mut self, _from: NodeId, _to: NodeId, _new_distance: u64) {}
    fn on_complete(&mut self, _target: NodeId, _final_distance: Option<u64>) {}
}

/// No-op observer for the untraced engine
impl DijkstraObserver for () {}

/// Compute the shortest path between two nodes.
///
/// Returns `Ok(None)` when `target` is unreachable from `source`; unknown
/// endpoints are a contract violation and surface as `InvalidNode`.
/// Pure over the graph: repeated calls on an unmutated graph return
/// identical results.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn shortest_path(
    graph: &Graph,
    source: NodeId,
    target: NodeId,
) -> Result<Option<PathResult>, GraphError> {
    run_dijkstra(graph, source, target, &mut ())
}

/// The Dijkstra loop shared by the engine and the trace recorder.
pub(crate) fn run_dijkstra<O: DijkstraObserver>(
    graph: &Graph,
    source: NodeId,
    target: NodeId,
    observer: &mut O,
) -> Result<Option<PathResult>, GraphError> {
    if !graph.has_node(source) {
        return Err(GraphError::InvalidNode(source));
    }
    if !graph.has_node(target) {
        return Err(GraphError::InvalidNode(target));
    }

    let n = graph.node_count();
    let mut dist = vec![INFINITY; n];
    let mut prev: Vec<Option<NodeId>> = vec![None; n];
    let mut visited = vec![false; n];
    let mut heap: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();

    dist[source.index()] = 0;
    heap.push(Reverse(HeapEntry {
        node: source,
        distance: 0,
    }));
    observer.on_initialize(source);

    while let Some(Reverse(HeapEntry { node, distance })) = heap.pop() {
        // Stale entry: this node was already finalized with a smaller
        // distance via a later relaxation.
        if visited[node.index()] {
            continue;
        }
        visited[node.index()] = true;
        observer.on_visit(node, distance);

        // Early exit: the target's distance is final once extracted.
        if node == target {
            break;
        }

        for (neighbor, weight) in graph.neighbors(node)? {
            observer.on_check_neighbor(node, neighbor, distance);
            if visited[neighbor.index()] {
                continue;
            }
            let alt = distance + weight;
            if alt < dist[neighbor.index()] {
                dist[neighbor.index()] = alt;
                prev[neighbor.index()] = Some(node);
                heap.push(Reverse(HeapEntry {
                    node: neighbor,
                    distance: alt,
                }));
                observer.on_update_distance(node, neighbor, alt);
            }
        }
    }

    let final_distance = dist[target.index()];
    if final_distance == INFINITY {
        observer.on_complete(target, None);
        return Ok(None);
    }
    observer.on_complete(target, Some(final_distance));

    Ok(Some(PathResult {
        path: reconstruct_path(source, target, &prev),
        distance: final_distance,
    }))
}

/// Walk the predecessor chain back from the target.
fn reconstruct_path(source: NodeId, target: NodeId, prev: &[Option<NodeId>]) -> Vec<NodeId> {
    let mut path = vec![target];
    let mut current = target;
    while current != source {
        match prev[current.index()] {
            Some(p) => {
                path.push(p);
                current = p;
            }
            None => break,
        }
    }
    path.reverse();
    path
}
