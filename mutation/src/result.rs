//! Mutation result types.

use pedigree_core::{Member, MemberId};

/// Outcome of offspring inference.
#[derive(Debug, Clone, PartialEq)]
pub struct OffspringOutcome {
    /// The member list after inference (unchanged when nothing was created).
    pub members: Vec<Member>,
    /// Name of the synthesized child, if one was created.
    pub child_name: Option<String>,
    /// Id of the synthesized child, if one was created.
    pub child_id: Option<MemberId>,
}

impl OffspringOutcome {
    /// Nothing synthesized.
    pub fn unchanged(members: &[Member]) -> Self {
        Self {
            members: members.to_vec(),
            child_name: None,
            child_id: None,
        }
    }

    pub fn created(members: Vec<Member>, child_id: MemberId, child_name: String) -> Self {
        Self {
            members,
            child_name: Some(child_name),
            child_id: Some(child_id),
        }
    }

    /// True if a child was synthesized.
    pub fn is_created(&self) -> bool {
        self.child_id.is_some()
    }
}

/// Outcome of a composite relation flow (partner, child or parent).
#[derive(Debug, Clone, PartialEq)]
pub struct RelationOutcome {
    /// The member list after the flow.
    pub members: Vec<Member>,
    /// The member on the other side of the relation.
    pub related: MemberId,
    /// True if `related` was created by this flow.
    pub created: bool,
    /// Name of an automatically synthesized child, if any.
    pub offspring: Option<String>,
}

impl RelationOutcome {
    pub fn new(members: Vec<Member>, related: MemberId, created: bool) -> Self {
        Self {
            members,
            related,
            created,
            offspring: None,
        }
    }

    pub fn with_offspring(mut self, offspring: OffspringOutcome) -> Self {
        self.members = offspring.members;
        self.offspring = offspring.child_name;
        self
    }
}
