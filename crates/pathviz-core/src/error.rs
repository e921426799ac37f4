//! Error types and exit codes for pathviz
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (bad graph file, unknown node, rejected edge)

use crate::graph::NodeId;
use thiserror::Error;

/// Exit codes per pathviz convention
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - bad graph file, unknown node (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Rejected graph-construction or query requests.
///
/// Every variant leaves the graph unchanged; "no path found" is not an
/// error and is represented as `None` by the engine instead.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    #[error("unknown node: {0}")]
    InvalidNode(NodeId),

    #[error("self-loop rejected on node {0}")]
    SelfLoop(NodeId),

    #[error("invalid edge weight: {0} (must be >= 1)")]
    InvalidWeight(i64),

    #[error("duplicate edge between {0} and {1}")]
    DuplicateEdge(NodeId, NodeId),
}

/// Errors that can occur during pathviz operations
#[derive(Error, Debug)]
pub enum PathvizError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("unknown node reference: {0} (expected a node id or name)")]
    UnknownNodeRef(String),

    // Data errors (exit code 3)
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("invalid graph text at line {line}: {reason}")]
    InvalidGraphText { line: usize, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl PathvizError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        PathvizError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for malformed graph text (1-based line numbers)
    pub fn graph_text(line: usize, reason: impl Into<String>) -> Self {
        PathvizError::InvalidGraphText {
            line,
            reason: reason.into(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            // Usage errors
            PathvizError::UnknownFormat(_)
            | PathvizError::UsageError(_)
            | PathvizError::InvalidValue { .. }
            | PathvizError::UnknownNodeRef(_) => ExitCode::Usage,

            // Data errors
            PathvizError::Graph(_) | PathvizError::InvalidGraphText { .. } => ExitCode::Data,

            // Generic failures
            PathvizError::Io(_)
            | PathvizError::Json(_)
            | PathvizError::Toml(_)
            | PathvizError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            PathvizError::UnknownFormat(_) => "unknown_format",
            PathvizError::UsageError(_) => "usage_error",
            PathvizError::InvalidValue { .. } => "invalid_value",
            PathvizError::UnknownNodeRef(_) => "unknown_node_ref",
            PathvizError::Graph(GraphError::InvalidNode(_)) => "invalid_node",
            PathvizError::Graph(GraphError::SelfLoop(_)) => "self_loop",
            PathvizError::Graph(GraphError::InvalidWeight(_)) => "invalid_weight",
            PathvizError::Graph(GraphError::DuplicateEdge(..)) => "duplicate_edge",
            PathvizError::InvalidGraphText { .. } => "invalid_graph_text",
            PathvizError::Io(_) => "io_error",
            PathvizError::Json(_) => "json_error",
            PathvizError::Toml(_) => "toml_error",
            PathvizError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for pathviz operations
pub type Result<T> = std::result::Result<T, PathvizError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_mapping() {
        assert_eq!(
            PathvizError::UnknownFormat("xml".into()).exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            PathvizError::from(GraphError::InvalidNode(NodeId::new(7))).exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            PathvizError::graph_text(2, "missing weight").exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            PathvizError::Other("boom".into()).exit_code(),
            ExitCode::Failure
        );
    }

    #[test]
    fn test_error_json_envelope() {
        let err = PathvizError::from(GraphError::SelfLoop(NodeId::new(3)));
        let json = err.to_json();
        assert_eq!(json["error"]["code"], 3);
        assert_eq!(json["error"]["type"], "self_loop");
        assert_eq!(json["error"]["message"], "self-loop rejected on node 3");
    }

    #[test]
    fn test_graph_error_messages() {
        assert_eq!(
            GraphError::DuplicateEdge(NodeId::new(0), NodeId::new(1)).to_string(),
            "duplicate edge between 0 and 1"
        );
        assert_eq!(
            GraphError::InvalidWeight(0).to_string(),
            "invalid edge weight: 0 (must be >= 1)"
        );
    }
}
