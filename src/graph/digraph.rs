//! Core graph structure: vertices mapped to their successor sets.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;

use crate::types::DigraphResult;

use super::cycle::{self, CycleSearch};

/// A directed graph stored as an adjacency map.
///
/// Edges are not separate entities: `(u, v)` is an edge iff `v` is in the
/// successor set of `u`. Every endpoint of an edge is also a key of the map,
/// possibly with an empty successor set. Keys iterate in their `Ord` order,
/// which fixes the order of every scan and of the DOT output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digraph<T: Ord> {
    adjacency: BTreeMap<T, BTreeSet<T>>,
}

impl<T: Ord> Default for Digraph<T> {
    fn default() -> Self {
        Self {
            adjacency: BTreeMap::new(),
        }
    }
}

impl<T: Ord + Clone> Digraph<T> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Modifiers ====================

    /// Insert a vertex with no successors. An existing vertex keeps its successor set.
    pub fn insert_vertex(&mut self, u: T) {
        self.adjacency.entry(u).or_default();
    }

    /// Insert the edge `(u, v)`, creating either endpoint if needed. Idempotent.
    pub fn insert_edge(&mut self, u: T, v: T) {
        self.insert_vertex(v.clone());
        self.adjacency.entry(u).or_default().insert(v);
    }

    /// Remove a vertex and every edge incident to it, in both directions.
    ///
    /// Returns `false` if the vertex was not present.
    pub fn remove_vertex(&mut self, u: &T) -> bool {
        if self.adjacency.remove(u).is_none() {
            return false;
        }
        for successors in self.adjacency.values_mut() {
            successors.remove(u);
        }
        true
    }

    /// Remove the directed edge `(u, v)`. The reverse edge `(v, u)` is left alone.
    ///
    /// Returns `false` if the edge was not present.
    pub fn remove_edge(&mut self, u: &T, v: &T) -> bool {
        self.adjacency
            .get_mut(u)
            .map(|successors| successors.remove(v))
            .unwrap_or(false)
    }

    /// Remove both `(u, v)` and `(v, u)` if either is present.
    ///
    /// Returns `true` if at least one of the two edges was removed.
    pub fn remove_edge_pair(&mut self, u: &T, v: &T) -> bool {
        let forward = self.remove_edge(u, v);
        let backward = self.remove_edge(v, u);
        forward || backward
    }

    // ==================== Characteristics ====================

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeSet::len).sum()
    }

    /// True if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// True if `u` is a vertex of the graph.
    pub fn contains_vertex(&self, u: &T) -> bool {
        self.adjacency.contains_key(u)
    }

    /// True if `(u, v)` is an edge of the graph.
    pub fn has_edge(&self, u: &T, v: &T) -> bool {
        self.adjacency
            .get(u)
            .is_some_and(|successors| successors.contains(v))
    }

    /// All vertices, in key order.
    pub fn vertices(&self) -> impl Iterator<Item = &T> {
        self.adjacency.keys()
    }

    /// All edges as `(source, target)`, ordered by source then target.
    pub fn edges(&self) -> impl Iterator<Item = (&T, &T)> {
        self.adjacency
            .iter()
            .flat_map(|(u, successors)| successors.iter().map(move |v| (u, v)))
    }

    /// Every `p` such that `(p, u)` is an edge. Scans the whole graph.
    pub fn predecessors(&self, u: &T) -> BTreeSet<T> {
        self.adjacency
            .iter()
            .filter(|(_, successors)| successors.contains(u))
            .map(|(p, _)| p.clone())
            .collect()
    }

    /// Every `s` such that `(u, s)` is an edge. Empty if `u` is absent.
    pub fn successors(&self, u: &T) -> BTreeSet<T> {
        self.successor_set(u).cloned().unwrap_or_default()
    }

    /// Borrow the successor set of `u`, if `u` is present.
    pub(crate) fn successor_set(&self, u: &T) -> Option<&BTreeSet<T>> {
        self.adjacency.get(u)
    }

    /// Number of predecessors of `u`.
    pub fn in_degree(&self, u: &T) -> usize {
        self.adjacency
            .values()
            .filter(|successors| successors.contains(u))
            .count()
    }

    /// Number of successors of `u`.
    pub fn out_degree(&self, u: &T) -> usize {
        self.adjacency.get(u).map_or(0, BTreeSet::len)
    }

    /// In-degree of every vertex, computed in one sweep over the edges.
    pub fn in_degrees(&self) -> BTreeMap<T, usize> {
        let mut degrees: BTreeMap<T, usize> =
            self.adjacency.keys().map(|u| (u.clone(), 0)).collect();
        for successors in self.adjacency.values() {
            for v in successors {
                if let Some(count) = degrees.get_mut(v) {
                    *count += 1;
                }
            }
        }
        degrees
    }

    // ==================== Predicates ====================

    /// True if the self-edge `(u, u)` exists.
    pub fn is_loop(&self, u: &T) -> bool {
        self.has_edge(u, u)
    }

    /// True if `u` has no successors. A vertex absent from the graph is a sink.
    pub fn is_sink(&self, u: &T) -> bool {
        self.out_degree(u) == 0
    }

    /// True if `u` relays traffic through a single edge on one side:
    /// out-degree 1 with some predecessor, or in-degree 1 with some successor.
    pub fn is_bypass(&self, u: &T) -> bool {
        bypass_degrees(self.in_degree(u), self.out_degree(u))
    }
}

impl<T: Ord + Clone + Debug> Digraph<T> {
    /// True if the edge `(u, v)` lies on no directed cycle.
    pub fn acyclic(&self, u: &T, v: &T) -> DigraphResult<bool> {
        self.acyclic_with(u, v, CycleSearch::default())
    }

    /// [`Digraph::acyclic`] with an explicit search strategy.
    pub fn acyclic_with(&self, u: &T, v: &T, mode: CycleSearch) -> DigraphResult<bool> {
        Ok(!self.cyclic_with(u, v, mode)?)
    }

    /// True if `v` leads back to `u`, closing a cycle through `(u, v)`.
    ///
    /// Fails on an empty graph and when either endpoint is not a vertex.
    pub fn cyclic(&self, u: &T, v: &T) -> DigraphResult<bool> {
        self.cyclic_with(u, v, CycleSearch::default())
    }

    /// [`Digraph::cyclic`] with an explicit search strategy.
    pub fn cyclic_with(&self, u: &T, v: &T, mode: CycleSearch) -> DigraphResult<bool> {
        let returns = cycle::reaches(self, v, u, mode)?;
        // A cycle leaves u through some edge; a sink closes nothing.
        Ok(returns && !self.is_sink(u))
    }
}

/// The bypass rule on precomputed degrees.
pub(crate) fn bypass_degrees(in_degree: usize, out_degree: usize) -> bool {
    (out_degree == 1 && in_degree > 0) || (in_degree == 1 && out_degree > 0)
}

impl<T: Ord + Clone> FromIterator<(T, T)> for Digraph<T> {
    fn from_iter<I: IntoIterator<Item = (T, T)>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}

impl<T: Ord + Clone> Extend<(T, T)> for Digraph<T> {
    fn extend<I: IntoIterator<Item = (T, T)>>(&mut self, iter: I) {
        for (u, v) in iter {
            self.insert_edge(u, v);
        }
    }
}
