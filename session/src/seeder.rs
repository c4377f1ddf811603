//! Seeding adapter interface.

use pedigree_core::{Hierarchy, Member, MemberId};

/// The external algorithm that lays the canonical graph out as a rooted
/// hierarchy.
///
/// Implementations are expected to be lossy: marriages only appear for
/// couples with shared children, and spouses of members with several
/// partners may be misattributed. The session repairs both.
pub trait Seeder {
    type Error: std::error::Error;

    /// Build the hierarchy for `members`, anchored at `root`.
    fn seed(&self, members: &[Member], root: MemberId) -> Result<Hierarchy, Self::Error>;
}

impl<S: Seeder + ?Sized> Seeder for &S {
    type Error = S::Error;

    fn seed(&self, members: &[Member], root: MemberId) -> Result<Hierarchy, Self::Error> {
        (**self).seed(members, root)
    }
}
