//! EDIT operation - updates name and gender of an existing member.

use pedigree_core::{Member, MemberId};

use crate::error::MutationResult;
use crate::validation;

/// Replace a member's name and gender. The name is stored trimmed.
pub fn edit_member(
    members: &[Member],
    id: MemberId,
    name: &str,
    gender: &str,
) -> MutationResult<Vec<Member>> {
    let name = validation::require_text("name", name)?.trim().to_string();
    let gender = validation::require_text("gender", gender)?.to_string();
    validation::ensure_exists(members, id)?;

    Ok(validation::update_member(members, id, |member| {
        member.name = name.clone();
        member.gender = gender.clone();
    }))
}
