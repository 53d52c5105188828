//! Error types for the reachgraph library.

use thiserror::Error;

/// All errors that can occur in the reachgraph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Traversal was requested on a graph with no vertices.
    #[error("Graph is empty")]
    EmptyGraph,

    /// No vertex carries the requested payload.
    #[error("Key {key:?} does not exist in the graph")]
    KeyNotFound { key: String },

    /// An edge line names a vertex that was never parsed.
    #[error("Edge endpoint {token:?} does not match any vertex")]
    EdgeEndpointNotFound { token: String },

    /// The input file has fewer lines than the declared section layout.
    #[error("Input truncated: expected at least {expected} lines, got {got}")]
    TruncatedInput { expected: usize, got: usize },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for reachgraph operations.
pub type GraphResult<T> = Result<T, GraphError>;
