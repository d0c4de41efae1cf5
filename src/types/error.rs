//! Error types for the routegraph library.

use thiserror::Error;

/// All errors that can occur in the routegraph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Unrecognized traversal mode name.
    #[error("Unknown traversal mode: {0}")]
    UnknownMode(String),

    /// No vertex with this key exists in the graph.
    #[error("Node {0} not found")]
    NodeNotFound(String),

    /// Weight lookup between two vertices with no connecting edge.
    #[error("Nodes {0} and {1} are not adjacent")]
    NotAdjacent(String, String),

    /// Cycle construction reached a vertex whose neighbors are all visited
    /// while unvisited vertices remain.
    #[error("No unvisited neighbor reachable from {0}")]
    NoUnvisitedNeighbor(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed line in an edge-list file.
    #[error("Malformed edge list at line {line}: {reason}")]
    MalformedEdgeList { line: usize, reason: String },
}

/// Convenience result type for routegraph operations.
pub type GraphResult<T> = Result<T, GraphError>;
