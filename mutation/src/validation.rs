//! Field and lookup helpers shared by mutation operations.

use pedigree_core::{Member, MemberId};

use crate::error::{MutationError, MutationResult};

/// Require a non-blank text field.
pub fn require_text<'a>(field: &str, value: &'a str) -> MutationResult<&'a str> {
    if value.trim().is_empty() {
        return Err(MutationError::missing_field(field));
    }
    Ok(value)
}

/// Find a member by id.
pub fn find_member(members: &[Member], id: MemberId) -> MutationResult<&Member> {
    members
        .iter()
        .find(|member| member.id == id)
        .ok_or(MutationError::NotFound(id))
}

/// Fail unless `id` exists.
pub fn ensure_exists(members: &[Member], id: MemberId) -> MutationResult<()> {
    find_member(members, id).map(|_| ())
}

/// Copy of `members` with `update` applied to the member with `id`.
pub fn update_member(
    members: &[Member],
    id: MemberId,
    update: impl Fn(&mut Member),
) -> Vec<Member> {
    members
        .iter()
        .map(|member| {
            let mut member = member.clone();
            if member.id == id {
                update(&mut member);
            }
            member
        })
        .collect()
}
