// Typed errors with thiserror. Surfaced to JS as thrown Error objects.
// See DESIGN.md: Module notes (error)

use thiserror::Error;

/// Scrollbar engine error types.
///
/// Only caller bugs end up here. Degenerate geometry, non-primary input and
/// redundant writes are normal outcomes and are reported through return values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScrollbarError {
    #[error("Invalid orientation value \"{0}\".")]
    InvalidOrientation(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for ScrollbarError {
    fn from(err: serde_json::Error) -> Self {
        ScrollbarError::Serialization(err.to_string())
    }
}
