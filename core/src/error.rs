//! Common error types for the canonical graph.

use crate::MemberId;
use thiserror::Error;

/// Errors raised by core graph types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// No id follows the given one.
    #[error("No member id left after {0}")]
    IdsExhausted(MemberId),
}

/// Result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
