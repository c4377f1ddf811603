//! Identity types for pedigree members.
//!
//! Member identifiers are non-negative integers that are:
//! - Unique within a canonical graph
//! - Stable across import/export round trips
//! - Serialized as plain JSON numbers

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{GraphError, GraphResult};

/// Unique identifier for a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(pub u64);

impl MemberId {
    /// Create a new MemberId from a raw value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw value.
    pub fn raw(&self) -> u64 {
        self.0
    }

    /// The id following this one.
    ///
    /// Fails when this is the largest representable id.
    pub fn next(&self) -> GraphResult<Self> {
        self.0
            .checked_add(1)
            .map(Self)
            .ok_or(GraphError::IdsExhausted(*self))
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for MemberId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}
