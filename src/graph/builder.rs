//! Fluent API for building WeightedGraph instances.

use std::fmt;
use std::hash::Hash;

use crate::types::Weight;

use super::WeightedGraph;

/// Fluent builder for constructing a [`WeightedGraph`] without assembling a
/// triple list by hand.
pub struct GraphBuilder<K> {
    triples: Vec<(K, K, Weight)>,
}

impl<K> GraphBuilder<K>
where
    K: Clone + Eq + Hash + fmt::Display,
{
    /// Create a new builder with no edges.
    pub fn new() -> Self {
        Self {
            triples: Vec::new(),
        }
    }

    /// Add an undirected edge between `from` and `to`.
    pub fn edge(&mut self, from: K, to: K, weight: Weight) -> &mut Self {
        self.triples.push((from, to, weight));
        self
    }

    /// Build the final WeightedGraph.
    pub fn build(self) -> WeightedGraph<K> {
        WeightedGraph::from_triples(self.triples)
    }
}

impl<K> Default for GraphBuilder<K>
where
    K: Clone + Eq + Hash + fmt::Display,
{
    fn default() -> Self {
        Self::new()
    }
}
