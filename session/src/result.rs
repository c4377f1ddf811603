//! Session result types.

use pedigree_core::{Member, MemberId};
use pedigree_graph::CanonicalIndex;

use crate::generation::Generation;

/// Summary of a committed relation flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationSummary {
    /// The partner, child or parent on the other side.
    pub related: MemberId,
    /// Whether `related` was created.
    pub created: bool,
    /// Name of an automatically added child.
    pub offspring: Option<String>,
}

/// Snapshot handed to the seeder for one render pass.
#[derive(Debug, Clone)]
pub struct RenderRequest {
    /// Generation the snapshot was taken at.
    pub generation: Generation,
    /// Member the hierarchy is anchored at.
    pub root: MemberId,
    /// Members with dangling references removed.
    pub members: Vec<Member>,
    /// Canonical lookup for reconciliation.
    pub index: CanonicalIndex,
}
