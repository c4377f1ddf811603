//! Graph generation tracking.
//!
//! A render is a one-shot request against one version of the canonical
//! graph. The generation identifies that version so late results can be
//! recognised and dropped.

/// Monotonic version counter for the canonical member list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Generation(u64);

impl Generation {
    /// Create a new counter at zero.
    pub fn new() -> Self {
        Self(0)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// Move to the next version.
    pub fn advance(&mut self) -> Generation {
        self.0 = self.0.wrapping_add(1);
        *self
    }
}
