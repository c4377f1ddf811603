//! Composite relation flows: partner, child and parent.
//!
//! Each flow combines the primitive operations the way an editor does when
//! the user registers a relation for a selected member.

use pedigree_core::{Gender, Member, MemberId};

use crate::error::{MutationError, MutationResult};
use crate::ops::add::{insert_member, NewMember};
use crate::ops::link::synchronize_partners;
use crate::ops::offspring::{infer_automatic_child_with, OffspringPolicy};
use crate::result::RelationOutcome;
use crate::validation;

/// Register a partner named `name` for member `id`.
///
/// An existing member whose name matches case-insensitively is linked;
/// otherwise a new member of the opposite gender is created. When the policy
/// is enabled, offspring inference runs on the new couple.
pub fn add_partner(
    members: &[Member],
    id: MemberId,
    name: &str,
    policy: &OffspringPolicy,
) -> MutationResult<RelationOutcome> {
    let name = validation::require_text("name", name)?.trim();
    let selected = validation::find_member(members, id)?;
    let selected_gender = selected.canonical_gender();
    if !selected_gender.is_known() {
        return Err(MutationError::invalid(format!(
            "member {} needs a known gender before adding a partner",
            id
        )));
    }
    let expected = selected_gender.opposite();

    let wanted = name.to_lowercase();
    let existing = members
        .iter()
        .find(|member| member.name.trim().to_lowercase() == wanted);

    let outcome = match existing {
        Some(partner) if partner.id == id => return Err(MutationError::SelfPartner(id)),
        Some(partner) => {
            let actual = partner.canonical_gender();
            if actual.is_known() && actual != expected {
                return Err(MutationError::gender_mismatch(
                    "partner",
                    expected.as_str(),
                    actual.as_str(),
                ));
            }
            let partner_id = partner.id;
            let mut next = synchronize_partners(members, id, partner_id);
            if !actual.is_known() {
                next = validation::update_member(&next, partner_id, |member| {
                    member.gender = expected.as_str().to_string();
                });
            }
            RelationOutcome::new(next, partner_id, false)
        }
        None => {
            let data = NewMember::new(name, expected.as_str()).with_partners([id]);
            let (next, partner_id) = insert_member(members, data)?;
            RelationOutcome::new(next, partner_id, true)
        }
    };

    if !policy.enabled {
        return Ok(outcome);
    }
    let offspring =
        infer_automatic_child_with(&outcome.members, id, outcome.related, &policy.gender);
    Ok(outcome.with_offspring(offspring))
}

/// Register a child of `father` and `mother`, who become partners.
pub fn add_child(
    members: &[Member],
    father: MemberId,
    mother: MemberId,
    name: &str,
    gender: &str,
) -> MutationResult<RelationOutcome> {
    require_gender(members, father, "father", Gender::Man)?;
    require_gender(members, mother, "mother", Gender::Woman)?;

    let data = NewMember::new(name, gender).with_parents(Some(father), Some(mother));
    let (next, child) = insert_member(members, data)?;
    let next = synchronize_partners(&next, father, mother);

    Ok(RelationOutcome::new(next, child, true))
}

/// Register a new parent for `child` in its first empty parent slot.
///
/// The new parent is linked as partner to the other parent, if there is one.
pub fn add_parent(
    members: &[Member],
    child: MemberId,
    name: &str,
    gender: &str,
) -> MutationResult<RelationOutcome> {
    let selected = validation::find_member(members, child)?;
    let (first_slot, other) = match (selected.parent1_id, selected.parent2_id) {
        (None, other) => (true, other),
        (Some(other), None) => (false, Some(other)),
        (Some(_), Some(_)) => return Err(MutationError::ParentSlotsFull(child)),
    };

    let (next, parent) = insert_member(members, NewMember::new(name, gender))?;
    let next = validation::update_member(&next, child, |member| {
        if first_slot {
            member.parent1_id = Some(parent);
        } else {
            member.parent2_id = Some(parent);
        }
    });
    let next = match other {
        Some(other) => synchronize_partners(&next, parent, other),
        None => next,
    };

    Ok(RelationOutcome::new(next, parent, true))
}

fn require_gender(
    members: &[Member],
    id: MemberId,
    role: &str,
    expected: Gender,
) -> MutationResult<()> {
    let actual = validation::find_member(members, id)?.canonical_gender();
    if actual != expected {
        return Err(MutationError::gender_mismatch(
            role,
            expected.as_str(),
            actual.as_str(),
        ));
    }
    Ok(())
}
