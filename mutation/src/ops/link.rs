//! LINK operation - records a partnership on both members.

use pedigree_core::{Member, MemberId};

use crate::error::{MutationError, MutationResult};
use crate::validation;

/// Link two members as partners on both sides.
///
/// Re-linking an existing pair yields a list equal to the input.
pub fn link_partners(members: &[Member], a: MemberId, b: MemberId) -> MutationResult<Vec<Member>> {
    if a == b {
        return Err(MutationError::SelfPartner(a));
    }
    validation::ensure_exists(members, a)?;
    validation::ensure_exists(members, b)?;

    Ok(synchronize_partners(members, a, b))
}

/// Lenient form of [`link_partners`]: returns an unchanged copy when the ids
/// are equal or either member is missing.
pub fn synchronize_partners(members: &[Member], a: MemberId, b: MemberId) -> Vec<Member> {
    let resolvable = a != b
        && members.iter().any(|member| member.id == a)
        && members.iter().any(|member| member.id == b);
    if !resolvable {
        return members.to_vec();
    }

    members
        .iter()
        .map(|member| {
            let mut member = member.clone();
            if member.id == a {
                member.add_partner(b);
            } else if member.id == b {
                member.add_partner(a);
            }
            member
        })
        .collect()
}
