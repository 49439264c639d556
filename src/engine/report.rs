//! What a reduction run did to the graph.

use serde::Serialize;

use super::reduce::ReductionLevel;

/// Whether one requested level changed the graph during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelOutcome {
    pub level: ReductionLevel,
    pub applied: bool,
}

/// Counts before and after [`ReductionEngine::reduce`](super::ReductionEngine::reduce).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReductionReport {
    pub vertices_before: usize,
    pub edges_before: usize,
    pub vertices_after: usize,
    pub edges_after: usize,
    /// Rounds of the level sequence, including the final one that changed nothing.
    pub rounds: usize,
    pub levels: Vec<LevelOutcome>,
}

impl ReductionReport {
    /// True if any level changed the graph.
    pub fn changed(&self) -> bool {
        self.levels.iter().any(|outcome| outcome.applied)
    }

    /// The two-line dictionary summary printed by the CLI.
    pub fn summary_lines(&self) -> [String; 2] {
        [
            format!(
                "Original dictionary: {} words and {} links.",
                self.vertices_before, self.edges_before
            ),
            format!("Number of essential words: {}", self.vertices_after),
        ]
    }
}
