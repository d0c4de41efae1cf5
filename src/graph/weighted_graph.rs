//! Core graph structure — interned vertices + symmetric weighted edges.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use log::debug;

use crate::types::{GraphError, GraphResult, Node, NodeId, Weight};

/// A weighted, undirected graph built once from `(from, to, weight)` triples
/// and read-only afterwards.
///
/// Vertices live in a vector in first-seen order; a key-to-id map interns
/// each distinct key exactly once. Every edge is recorded on both endpoints
/// with the same weight, so adjacency is symmetric by construction.
///
/// Repeated triples for the same vertex pair do not accumulate: the last
/// weight seen wins. Self-loops are accepted and stored as a single edge.
pub struct WeightedGraph<K> {
    /// All vertices, in first-seen order.
    nodes: Vec<Node<K>>,
    /// Interning index: key -> dense id.
    index: HashMap<K, NodeId>,
}

impl<K> WeightedGraph<K>
where
    K: Clone + Eq + Hash + fmt::Display,
{
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Build a graph from an edge-list of `(from, to, weight)` triples.
    ///
    /// The first occurrence of a key creates its vertex; later occurrences
    /// reuse it. Both edge directions are inserted for each triple.
    pub fn from_triples<I>(triples: I) -> Self
    where
        I: IntoIterator<Item = (K, K, Weight)>,
    {
        let mut graph = Self::new();
        for (from, to, weight) in triples {
            let from_id = graph.add_or_get(from);
            let to_id = graph.add_or_get(to);
            graph.link(from_id, to_id, weight);
        }
        debug!(
            "built graph: {} vertices, {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );
        graph
    }

    /// Intern a key, creating its vertex on first sight.
    fn add_or_get(&mut self, value: K) -> NodeId {
        if let Some(&id) = self.index.get(&value) {
            return id;
        }
        let id = self.nodes.len();
        self.index.insert(value.clone(), id);
        self.nodes.push(Node::new(value));
        id
    }

    /// Record the undirected edge `a -- b`, replacing the weight of an
    /// existing one. A self-loop is stored once.
    fn link(&mut self, a: NodeId, b: NodeId, weight: Weight) {
        self.nodes[a].upsert_edge(b, weight);
        if a != b {
            self.nodes[b].upsert_edge(a, weight);
        }
    }

    /// Number of distinct vertices.
    pub fn vertex_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges (mirror records counted once, self-loops
    /// once).
    pub fn edge_count(&self) -> usize {
        let mut halves = 0;
        let mut loops = 0;
        for (id, node) in self.nodes.iter().enumerate() {
            halves += node.degree();
            loops += node.edges().iter().filter(|e| e.target == id).count();
        }
        (halves + loops) / 2
    }

    /// Whether the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether a vertex with this key exists.
    pub fn contains(&self, value: &K) -> bool {
        self.index.contains_key(value)
    }

    /// All vertex keys, in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.nodes.iter().map(|n| &n.value)
    }

    /// All vertices, in first-seen order.
    pub fn nodes(&self) -> &[Node<K>] {
        &self.nodes
    }

    /// Degree of the vertex with this key, if it exists.
    pub fn degree(&self, value: &K) -> Option<usize> {
        self.index.get(value).map(|&id| self.nodes[id].degree())
    }

    /// Neighbors of the vertex with this key, as `(key, weight)` pairs in
    /// edge-insertion order. `None` if the key is unknown.
    pub fn neighbors(&self, value: &K) -> Option<impl Iterator<Item = (&K, Weight)>> {
        let &id = self.index.get(value)?;
        Some(
            self.nodes[id]
                .edges()
                .iter()
                .map(move |e| (&self.nodes[e.target].value, e.weight)),
        )
    }

    /// Whether two keys name adjacent vertices. False when either key is
    /// unknown.
    pub fn adjacent(&self, a: &K, b: &K) -> bool {
        match (self.index.get(a), self.index.get(b)) {
            (Some(&a_id), Some(&b_id)) => self.adjacent_ids(a_id, b_id),
            _ => false,
        }
    }

    /// Weight of the edge between two adjacent vertices.
    ///
    /// Fails with [`GraphError::NodeNotFound`] for an unknown key and
    /// [`GraphError::NotAdjacent`] when no edge connects the pair.
    pub fn weight_between(&self, a: &K, b: &K) -> GraphResult<Weight> {
        let a_id = self.id_of(a)?;
        let b_id = self.id_of(b)?;
        self.weight_between_ids(a_id, b_id)
    }

    /// Resolve a key to its dense id.
    pub(crate) fn id_of(&self, value: &K) -> GraphResult<NodeId> {
        self.index
            .get(value)
            .copied()
            .ok_or_else(|| GraphError::NodeNotFound(value.to_string()))
    }

    /// The vertex behind a dense id.
    pub(crate) fn node(&self, id: NodeId) -> &Node<K> {
        &self.nodes[id]
    }

    /// Adjacency by dense id. One direction suffices: edges are mirrored at
    /// construction.
    pub(crate) fn adjacent_ids(&self, a: NodeId, b: NodeId) -> bool {
        self.nodes[a].has_edge_to(b)
    }

    /// Weight lookup by dense id.
    pub(crate) fn weight_between_ids(&self, a: NodeId, b: NodeId) -> GraphResult<Weight> {
        self.nodes[a].weight_to(b).ok_or_else(|| {
            GraphError::NotAdjacent(
                self.nodes[a].value.to_string(),
                self.nodes[b].value.to_string(),
            )
        })
    }
}

impl<K> Default for WeightedGraph<K>
where
    K: Clone + Eq + Hash + fmt::Display,
{
    fn default() -> Self {
        Self::new()
    }
}
