//! digraph-reduce: reduce a directed graph to its essential core.
//!
//! A word-reference dictionary is read as a graph with an edge from each
//! word to every word its definition uses. Reduction passes then strip the
//! words that carry no dependency information, leaving the essential ones.

pub mod cli;
pub mod engine;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use engine::{LevelOutcome, ReductionConfig, ReductionEngine, ReductionLevel, ReductionReport};
pub use format::{DotWriter, PairReader};
pub use graph::{reaches, CycleSearch, Digraph, DigraphBuilder};
pub use types::{DigraphError, DigraphResult, Label};
