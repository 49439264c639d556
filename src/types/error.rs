//! Error types for the digraph-reduce library.

use thiserror::Error;

/// All errors that can occur in the digraph-reduce library.
#[derive(Error, Debug)]
pub enum DigraphError {
    /// An operation that requires at least one vertex ran on an empty graph.
    #[error("{operation} requires a non-empty graph")]
    EmptyGraph { operation: &'static str },

    /// A vertex that must already be present is missing.
    #[error("Vertex {0} not found")]
    VertexNotFound(String),

    /// Unknown reduction level name.
    #[error("Invalid reduction level: {0}")]
    InvalidLevel(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON rendering error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DigraphError {
    pub(crate) fn empty(operation: &'static str) -> Self {
        DigraphError::EmptyGraph { operation }
    }

    pub(crate) fn not_found<T: std::fmt::Debug>(vertex: &T) -> Self {
        DigraphError::VertexNotFound(format!("{:?}", vertex))
    }
}

/// Convenience result type for digraph-reduce operations.
pub type DigraphResult<T> = Result<T, DigraphError>;
