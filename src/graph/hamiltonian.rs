//! Hamiltonian-cycle existence check and greedy cycle construction.
//!
//! The check is Ore's theorem: in a graph of n >= 3 vertices, if every pair
//! of non-adjacent vertices has degree sum >= n, a Hamiltonian cycle exists.
//! The condition is sufficient, not necessary — a graph failing it may still
//! contain a cycle, but the heuristic refuses to search without the
//! guarantee. Construction is nearest-neighbor: always extend the route via
//! the cheapest edge to an unvisited vertex, then close back to the start.
//! The result is a valid cycle, not a minimum-weight one.

use std::fmt;
use std::hash::Hash;

use log::trace;
use serde::Serialize;

use crate::types::{GraphError, GraphResult, NodeId, Weight};

use super::WeightedGraph;

/// A closed route through every vertex, plus its accumulated weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CycleRoute<K> {
    /// Vertex keys in visit order; the start key is repeated at the end, so
    /// the length is vertex count + 1.
    pub route: Vec<K>,
    /// Sum of the weights of the edges traversed, closing edge included.
    pub total_weight: Weight,
}

impl<K: fmt::Display> CycleRoute<K> {
    /// Render the route as `"A -> B -> C -> A"`.
    pub fn describe(&self) -> String {
        self.route
            .iter()
            .map(|k| k.to_string())
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}

impl<K> WeightedGraph<K>
where
    K: Clone + Eq + Hash + fmt::Display,
{
    /// Whether Ore's degree-sum condition holds for this graph.
    ///
    /// False for fewer than 3 vertices. Otherwise false iff some pair of
    /// distinct, non-adjacent vertices has degree sum below the vertex
    /// count. O(n^2) pair inspections with an O(degree) adjacency test
    /// each — sized for the small graphs the heuristic targets.
    pub fn satisfies_ore_condition(&self) -> bool {
        let n = self.vertex_count();
        if n < 3 {
            return false;
        }
        for a in 0..n {
            for b in (a + 1)..n {
                if self.adjacent_ids(a, b) {
                    continue;
                }
                if self.node(a).degree() + self.node(b).degree() < n {
                    return false;
                }
            }
        }
        true
    }

    /// Greedily construct a Hamiltonian cycle, if existence is guaranteed.
    ///
    /// Returns `Ok(None)` when [`satisfies_ore_condition`] fails: no
    /// existence guarantee, so the greedy walk is not attempted. With the
    /// guarantee in place, the walk starts at `start` (default: the
    /// first-inserted vertex) and repeatedly moves to the unvisited
    /// neighbor behind the lowest-weight edge, then closes back to the
    /// start. Equal-weight candidates resolve to the first edge inserted.
    ///
    /// Fails with [`GraphError::NodeNotFound`] for an unknown `start`,
    /// [`GraphError::NoUnvisitedNeighbor`] if the walk dead-ends (possible
    /// only for degenerate input, e.g. self-loop-inflated degrees masking
    /// a disconnected graph), and [`GraphError::NotAdjacent`] if the final
    /// vertex has no edge back to the start.
    ///
    /// [`satisfies_ore_condition`]: WeightedGraph::satisfies_ore_condition
    pub fn find_hamiltonian_cycle(&self, start: Option<&K>) -> GraphResult<Option<CycleRoute<K>>> {
        if !self.satisfies_ore_condition() {
            return Ok(None);
        }

        // The condition passing implies vertex_count >= 3.
        let start_id = match start {
            Some(key) => self.id_of(key)?,
            None => 0,
        };

        let n = self.vertex_count();
        let mut visited = vec![false; n];
        let mut route = Vec::with_capacity(n + 1);
        let mut total_weight: Weight = 0;

        visited[start_id] = true;
        route.push(self.node(start_id).value.clone());

        let mut current = start_id;
        for _ in 1..n {
            let (next, weight) = self.nearest_unvisited(current, &visited).ok_or_else(|| {
                GraphError::NoUnvisitedNeighbor(self.node(current).value.to_string())
            })?;
            trace!(
                "cycle step: {} -> {} (weight {})",
                self.node(current).value,
                self.node(next).value,
                weight
            );
            visited[next] = true;
            route.push(self.node(next).value.clone());
            total_weight += weight;
            current = next;
        }

        total_weight += self.weight_between_ids(current, start_id)?;
        route.push(self.node(start_id).value.clone());

        Ok(Some(CycleRoute {
            route,
            total_weight,
        }))
    }

    /// The unvisited neighbor behind the cheapest incident edge. Ties keep
    /// the first edge in insertion order.
    fn nearest_unvisited(&self, from: NodeId, visited: &[bool]) -> Option<(NodeId, Weight)> {
        let mut best: Option<(NodeId, Weight)> = None;
        for edge in self.node(from).edges() {
            if visited[edge.target] {
                continue;
            }
            match best {
                Some((_, weight)) if edge.weight >= weight => {}
                _ => best = Some((edge.target, edge.weight)),
            }
        }
        best
    }
}
