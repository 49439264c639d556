//! Reduction passes: basic, intermediate and advanced.

use std::fmt::Debug;

use serde::Serialize;

use crate::graph::digraph::bypass_degrees;
use crate::graph::{CycleSearch, Digraph};
use crate::types::{DigraphError, DigraphResult};

use super::report::{LevelOutcome, ReductionReport};

/// Settings shared by every reduction pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReductionConfig {
    /// Strategy used by the cycle test of the advanced reduction.
    pub cycle_search: CycleSearch,
}

impl ReductionConfig {
    /// Use the given cycle search strategy.
    pub fn with_cycle_search(mut self, cycle_search: CycleSearch) -> Self {
        self.cycle_search = cycle_search;
        self
    }
}

/// One of the three reduction passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReductionLevel {
    /// Remove loops and sinks.
    Basic,
    /// Remove bypass vertices, rewiring their neighbours.
    Intermediate,
    /// Remove edges that lie on no cycle.
    Advanced,
}

impl ReductionLevel {
    /// Parse a level from its name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "basic" => Some(Self::Basic),
            "intermediate" => Some(Self::Intermediate),
            "advanced" => Some(Self::Advanced),
            _ => None,
        }
    }

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    /// Every level, weakest first.
    pub fn all() -> [Self; 3] {
        [Self::Basic, Self::Intermediate, Self::Advanced]
    }
}

/// Applies reduction passes to a graph.
///
/// Each pass runs to its own fixpoint and reports whether it changed
/// anything. Every pass refuses an empty graph.
#[derive(Debug, Clone, Default)]
pub struct ReductionEngine {
    config: ReductionConfig,
}

impl ReductionEngine {
    /// Create a new reduction engine.
    pub fn new(config: ReductionConfig) -> Self {
        Self { config }
    }

    /// The engine's configuration.
    pub fn config(&self) -> &ReductionConfig {
        &self.config
    }

    /// Run one pass by level.
    pub fn apply<T: Ord + Clone + Debug>(
        &self,
        graph: &mut Digraph<T>,
        level: ReductionLevel,
    ) -> DigraphResult<bool> {
        match level {
            ReductionLevel::Basic => self.basic_reduction(graph),
            ReductionLevel::Intermediate => self.intermediate_reduction(graph),
            ReductionLevel::Advanced => self.advanced_reduction(graph),
        }
    }

    /// Remove loop and sink vertices until none remain.
    pub fn basic_reduction<T: Ord + Clone + Debug>(
        &self,
        graph: &mut Digraph<T>,
    ) -> DigraphResult<bool> {
        ensure_non_empty(graph, "basic reduction")?;

        let mut removed = 0usize;
        loop {
            // Loops and sinks stay loops and sinks when other vertices go,
            // so a whole scan can be removed at once.
            let doomed: Vec<T> = graph
                .vertices()
                .filter(|u| graph.is_loop(u) || graph.is_sink(u))
                .cloned()
                .collect();
            if doomed.is_empty() {
                break;
            }
            for u in &doomed {
                log::trace!("basic: removing {:?}", u);
                graph.remove_vertex(u);
            }
            removed += doomed.len();
        }

        log::debug!(
            "basic reduction removed {} vertices, {} remain",
            removed,
            graph.vertex_count()
        );
        Ok(removed > 0)
    }

    /// Remove non-loop bypass vertices, linking around each, until none remain.
    pub fn intermediate_reduction<T: Ord + Clone + Debug>(
        &self,
        graph: &mut Digraph<T>,
    ) -> DigraphResult<bool> {
        ensure_non_empty(graph, "intermediate reduction")?;

        let mut removed = 0usize;
        while let Some(u) = next_bypass(graph) {
            bypass_vertex(graph, &u);
            removed += 1;
        }

        log::debug!(
            "intermediate reduction bypassed {} vertices, {} remain",
            removed,
            graph.vertex_count()
        );
        Ok(removed > 0)
    }

    /// Remove edges that lie on no cycle until every edge is on one.
    pub fn advanced_reduction<T: Ord + Clone + Debug>(
        &self,
        graph: &mut Digraph<T>,
    ) -> DigraphResult<bool> {
        ensure_non_empty(graph, "advanced reduction")?;

        let mut removed = 0usize;
        loop {
            // No cycle runs through an acyclic edge, so dropping one leaves
            // the others acyclic and a whole scan can be removed at once.
            let mut doomed: Vec<(T, T)> = Vec::new();
            for (u, v) in graph.edges() {
                if graph.acyclic_with(u, v, self.config.cycle_search)? {
                    doomed.push((u.clone(), v.clone()));
                }
            }
            if doomed.is_empty() {
                break;
            }
            for (u, v) in &doomed {
                log::trace!("advanced: removing edge {:?} -> {:?}", u, v);
                graph.remove_edge(u, v);
            }
            removed += doomed.len();
        }

        log::debug!(
            "advanced reduction removed {} edges, {} remain",
            removed,
            graph.edge_count()
        );
        Ok(removed > 0)
    }

    /// Run `levels` in order, repeating the sequence until a full round
    /// changes nothing or the graph is empty.
    pub fn reduce<T: Ord + Clone + Debug>(
        &self,
        graph: &mut Digraph<T>,
        levels: &[ReductionLevel],
    ) -> DigraphResult<ReductionReport> {
        ensure_non_empty(graph, "reduction")?;

        let vertices_before = graph.vertex_count();
        let edges_before = graph.edge_count();
        let mut outcomes: Vec<LevelOutcome> = levels
            .iter()
            .map(|&level| LevelOutcome {
                level,
                applied: false,
            })
            .collect();

        let mut rounds = 0usize;
        loop {
            rounds += 1;
            let mut changed = false;
            for outcome in outcomes.iter_mut() {
                if graph.is_empty() {
                    break;
                }
                let applied = self.apply(graph, outcome.level)?;
                outcome.applied |= applied;
                changed |= applied;
            }
            if !changed || graph.is_empty() {
                break;
            }
        }

        log::info!(
            "reduced {} vertices / {} edges to {} / {} in {} rounds",
            vertices_before,
            edges_before,
            graph.vertex_count(),
            graph.edge_count(),
            rounds
        );

        Ok(ReductionReport {
            vertices_before,
            edges_before,
            vertices_after: graph.vertex_count(),
            edges_after: graph.edge_count(),
            rounds,
            levels: outcomes,
        })
    }
}

impl<T: Ord + Clone + Debug> Digraph<T> {
    /// Basic reduction with the default configuration.
    pub fn basic_reduction(&mut self) -> DigraphResult<bool> {
        ReductionEngine::default().basic_reduction(self)
    }

    /// Intermediate reduction with the default configuration.
    pub fn intermediate_reduction(&mut self) -> DigraphResult<bool> {
        ReductionEngine::default().intermediate_reduction(self)
    }

    /// Advanced reduction with the default configuration.
    pub fn advanced_reduction(&mut self) -> DigraphResult<bool> {
        ReductionEngine::default().advanced_reduction(self)
    }
}

fn ensure_non_empty<T: Ord + Clone>(
    graph: &Digraph<T>,
    operation: &'static str,
) -> DigraphResult<()> {
    if graph.is_empty() {
        return Err(DigraphError::empty(operation));
    }
    Ok(())
}

/// First vertex, in key order, that is a bypass and not a loop.
fn next_bypass<T: Ord + Clone>(graph: &Digraph<T>) -> Option<T> {
    let in_degrees = graph.in_degrees();
    graph
        .vertices()
        .find(|u| {
            let in_degree = in_degrees.get(*u).copied().unwrap_or(0);
            !graph.is_loop(u) && bypass_degrees(in_degree, graph.out_degree(u))
        })
        .cloned()
}

fn bypass_vertex<T: Ord + Clone + Debug>(graph: &mut Digraph<T>, u: &T) {
    let successors = graph.successors(u);
    let predecessors = graph.predecessors(u);

    if successors.len() == 1 && !predecessors.is_empty() {
        if let Some(s) = successors.first() {
            for p in &predecessors {
                graph.insert_edge(p.clone(), s.clone());
            }
        }
    } else if predecessors.len() == 1 && !successors.is_empty() {
        if let Some(p) = predecessors.first() {
            for s in &successors {
                graph.insert_edge(p.clone(), s.clone());
            }
        }
    }

    log::trace!("intermediate: bypassing {:?}", u);
    graph.remove_vertex(u);
}
