//! Shared types for the digraph-reduce library.

pub mod error;
pub mod label;

pub use error::{DigraphError, DigraphResult};
pub use label::Label;
