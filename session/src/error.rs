//! Session error types.

use pedigree_mutation::MutationError;
use thiserror::Error;

use crate::transfer::TransferError;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Session errors.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Mutation error.
    #[error("mutation error: {0}")]
    Mutation(#[from] MutationError),

    /// Import or export error.
    #[error("transfer error: {0}")]
    Transfer(#[from] TransferError),

    /// The seeding adapter failed.
    #[error("seeding failed: {message}")]
    Seed { message: String },

    /// Nothing to render.
    #[error("the tree has no members")]
    EmptyGraph,
}

impl SessionError {
    pub fn seed(message: impl Into<String>) -> Self {
        Self::Seed {
            message: message.into(),
        }
    }

    /// True for failures caused by bad input rather than missing members.
    pub fn is_validation(&self) -> bool {
        match self {
            Self::Mutation(err) => err.is_validation(),
            Self::Transfer(_) => true,
            Self::Seed { .. } | Self::EmptyGraph => false,
        }
    }
}
