//! High-level operations: the reduction engine.

pub mod reduce;
pub mod report;

pub use reduce::{ReductionConfig, ReductionEngine, ReductionLevel};
pub use report::{LevelOutcome, ReductionReport};
