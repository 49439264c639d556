//! In-memory directed graph: the store every reduction works on.

pub mod builder;
pub mod cycle;
pub mod digraph;

pub use builder::DigraphBuilder;
pub use cycle::{reaches, CycleSearch};
pub use digraph::Digraph;
