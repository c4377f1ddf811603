//! REMOVE operation - deletes a member and scrubs references to it.

use pedigree_core::{Member, MemberId};

use crate::error::MutationResult;
use crate::validation;

/// Remove a member. Every parent slot and partner entry that pointed at it
/// is cleared on the remaining members.
pub fn remove_member(members: &[Member], id: MemberId) -> MutationResult<Vec<Member>> {
    validation::ensure_exists(members, id)?;

    Ok(members
        .iter()
        .filter(|member| member.id != id)
        .map(|member| {
            let mut member = member.clone();
            member.forget(id);
            member
        })
        .collect())
}
