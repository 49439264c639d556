//! Fluent API for building Digraph instances.

use super::Digraph;

/// Fluent builder for constructing a Digraph.
pub struct DigraphBuilder<T: Ord> {
    graph: Digraph<T>,
}

impl<T: Ord + Clone> DigraphBuilder<T> {
    /// Create a new builder for an empty graph.
    pub fn new() -> Self {
        Self {
            graph: Digraph::new(),
        }
    }

    /// Add a vertex.
    pub fn vertex(mut self, u: T) -> Self {
        self.graph.insert_vertex(u);
        self
    }

    /// Add several vertices.
    pub fn vertices<I: IntoIterator<Item = T>>(mut self, vertices: I) -> Self {
        for u in vertices {
            self.graph.insert_vertex(u);
        }
        self
    }

    /// Add an edge between two vertices.
    pub fn edge(mut self, u: T, v: T) -> Self {
        self.graph.insert_edge(u, v);
        self
    }

    /// Add an edge from `u` to each of `targets`.
    pub fn edges_from<I: IntoIterator<Item = T>>(mut self, u: T, targets: I) -> Self {
        for v in targets {
            self.graph.insert_edge(u.clone(), v);
        }
        self
    }

    /// Build the final Digraph.
    pub fn build(self) -> Digraph<T> {
        self.graph
    }
}

impl<T: Ord + Clone> Default for DigraphBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
