//! Mutation executor - binds a member snapshot to an offspring policy.
//!
//! The executor delegates to specialized operation modules in `ops/`:
//! - `ops/add.rs` - ADD (member creation)
//! - `ops/remove.rs` - REMOVE (deletion with reference scrubbing)
//! - `ops/link.rs` - LINK (partnership)
//! - `ops/edit.rs` - EDIT (name and gender)
//! - `ops/offspring.rs` - automatic offspring
//! - `ops/relate.rs` - partner/child/parent flows

use pedigree_core::{Member, MemberId};

use crate::error::MutationResult;
use crate::ops::{self, NewMember, OffspringPolicy};
use crate::result::{OffspringOutcome, RelationOutcome};

/// Mutation executor over a borrowed member snapshot.
pub struct MutationExecutor<'m> {
    members: &'m [Member],
    policy: OffspringPolicy,
}

impl<'m> MutationExecutor<'m> {
    /// Create a new executor with the default offspring policy.
    pub fn new(members: &'m [Member]) -> Self {
        Self {
            members,
            policy: OffspringPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: OffspringPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> &OffspringPolicy {
        &self.policy
    }

    pub fn add(&self, data: NewMember) -> MutationResult<Vec<Member>> {
        ops::add_member(self.members, data)
    }

    pub fn remove(&self, id: MemberId) -> MutationResult<Vec<Member>> {
        ops::remove_member(self.members, id)
    }

    pub fn edit(&self, id: MemberId, name: &str, gender: &str) -> MutationResult<Vec<Member>> {
        ops::edit_member(self.members, id, name, gender)
    }

    /// Link two partners, then infer offspring if the policy allows it.
    pub fn link(&self, a: MemberId, b: MemberId) -> MutationResult<OffspringOutcome> {
        let linked = ops::link_partners(self.members, a, b)?;
        Ok(self.infer(&linked, a, b))
    }

    pub fn add_partner(&self, id: MemberId, name: &str) -> MutationResult<RelationOutcome> {
        ops::add_partner(self.members, id, name, &self.policy)
    }

    pub fn add_child(
        &self,
        father: MemberId,
        mother: MemberId,
        name: &str,
        gender: &str,
    ) -> MutationResult<RelationOutcome> {
        ops::add_child(self.members, father, mother, name, gender)
    }

    pub fn add_parent(
        &self,
        child: MemberId,
        name: &str,
        gender: &str,
    ) -> MutationResult<RelationOutcome> {
        ops::add_parent(self.members, child, name, gender)
    }

    fn infer(&self, members: &[Member], a: MemberId, b: MemberId) -> OffspringOutcome {
        if !self.policy.enabled {
            return OffspringOutcome::unchanged(members);
        }
        ops::infer_automatic_child_with(members, a, b, &self.policy.gender)
    }
}
