//! Replayable traces of the path engine
//!
//! Runs the exact same Dijkstra loop as [`crate::graph::engine`] but
//! records every observable action as an ordered [`Step`] sequence. A
//! frontend replays the steps at its own pace (highlighting nodes, edges
//! and tentative distances); the core never owns a clock.

use serde::Serialize;

use crate::error::GraphError;
use crate::graph::engine::{run_dijkstra, DijkstraObserver, PathResult};
use crate::graph::model::{Graph, NodeId};

/// One discrete algorithm action, in emission order.
///
/// Serialized with a `step` tag so frontends can dispatch on the variant:
/// `{"step":"visit_node","node":1,"distance":3}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum Step {
    /// Emitted once, first
    Initialize { source: NodeId },
    /// A node was extracted from the frontier; its distance is final
    VisitNode { node: NodeId, distance: u64 },
    /// An edge out of the visited node is being examined. `current_distance`
    /// is the settled distance of `from`.
    CheckNeighbor {
        from: NodeId,
        to: NodeId,
        current_distance: u64,
    },
    /// The examined edge improved the neighbor's tentative distance
    UpdateDistance {
        from: NodeId,
        to: NodeId,
        new_distance: u64,
    },
    /// Emitted once, last. `final_distance` is `None` when unreachable.
    Complete {
        target: NodeId,
        final_distance: Option<u64>,
    },
}

/// Observer that materializes the step sequence
#[derive(Debug, Default)]
struct StepRecorder {
    steps: Vec<Step>,
}

impl DijkstraObserver for StepRecorder {
    fn on_initialize(&mut self, source: NodeId) {
        self.steps.push(Step::Initialize { source });
    }

    fn on_visit(&mut self, node: NodeId, distance: u64) {
        self.steps.push(Step::VisitNode { node, distance });
    }

    fn on_check_neighbor(&mut self, from: NodeId, to: NodeId, current_distance: u64) {
        self.steps.push(Step::CheckNeighbor {
            from,
            to,
            current_distance,
        });
    }

    fn on_update_distance(&mut self, from: NodeId, to: NodeId, new_distance: u64) {
        self.steps.push(Step::UpdateDistance {
            from,
            to,
            new_distance,
        });
    }

    fn on_complete(&mut self, target: NodeId, final_distance: Option<u64>) {
        self.steps.push(Step::Complete {
            target,
            final_distance,
        });
    }
}

/// Compute the shortest path and the full step trace.
///
/// The returned result is identical to [`crate::graph::engine::shortest_path`]
/// for the same inputs; tracing is transparent instrumentation, not a
/// separate implementation.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn shortest_path_traced(
    graph: &Graph,
    source: NodeId,
    target: NodeId,
) -> Result<(Vec<Step>, Option<PathResult>), GraphError> {
    let mut recorder = StepRecorder::default();
    let result = run_dijkstra(graph, source, target, &mut recorder)?;
    tracing::debug!(steps = recorder.steps.len(), found = result.is_some(), "trace_complete");
    Ok((recorder.steps, result))
}
