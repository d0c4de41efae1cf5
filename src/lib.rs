//! routegraph — weighted undirected graph with traversals and a
//! Hamiltonian-cycle heuristic.
//!
//! Builds an immutable graph from `(from, to, weight)` triples, walks it
//! breadth-first or depth-first, verifies Ore's sufficiency condition for
//! Hamiltonian-cycle existence, and greedily constructs a cycle when the
//! condition guarantees one.

pub mod cli;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{CycleRoute, GraphBuilder, TraversalMode, WeightedGraph};
pub use types::{Edge, GraphError, GraphResult, Node, NodeId, Weight};
