//! Mutation error types.

use pedigree_core::{GraphError, MemberId};
use thiserror::Error;

/// Result type for mutation operations.
pub type MutationResult<T> = Result<T, MutationError>;

/// Errors that can occur during mutation execution.
///
/// Every variant except `NotFound` is a validation failure; see
/// [`MutationError::is_validation`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MutationError {
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("A member cannot be its own partner: {0}")]
    SelfPartner(MemberId),

    #[error("Member id already in use: {0}")]
    DuplicateId(MemberId),

    #[error("Gender mismatch for {role}: expected {expected}, got {actual}")]
    GenderMismatch {
        role: String,
        expected: String,
        actual: String,
    },

    #[error("Member {0} already has both parents registered")]
    ParentSlotsFull(MemberId),

    #[error("No member id left after {0}")]
    IdsExhausted(MemberId),

    #[error("Invalid mutation: {message}")]
    Invalid { message: String },

    #[error("Member not found: {0}")]
    NotFound(MemberId),
}

impl MutationError {
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    pub fn gender_mismatch(
        role: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::GenderMismatch {
            role: role.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }

    /// True for the ValidationError family.
    pub fn is_validation(&self) -> bool {
        !self.is_not_found()
    }

    /// True when the operation referenced a nonexistent id.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl From<GraphError> for MutationError {
    fn from(e: GraphError) -> Self {
        match e {
            GraphError::IdsExhausted(id) => Self::IdsExhausted(id),
        }
    }
}
