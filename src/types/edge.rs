//! The core edge struct.

use serde::Serialize;

use super::{NodeId, Weight};

/// A half-edge: one direction of an undirected connection, stored on the
/// source vertex and pointing at the adjacent one.
///
/// The graph records the mirror half-edge on the other endpoint, so every
/// undirected connection exists as two of these with equal weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge {
    /// Dense id of the adjacent vertex.
    pub target: NodeId,
    /// Non-negative traversal cost of this connection.
    pub weight: Weight,
}

impl Edge {
    /// Create a new half-edge.
    pub fn new(target: NodeId, weight: Weight) -> Self {
        Self { target, weight }
    }
}
