//! Automatic offspring inference for newly linked couples.

use pedigree_core::{Gender, Member, MemberId};
use tracing::{debug, warn};

use crate::ops::add::{insert_member, NewMember};
use crate::result::OffspringOutcome;

/// Default gender of synthesized offspring.
pub const DEFAULT_OFFSPRING_GENDER: &str = "man";

/// Whether linking partners synthesizes a child, and with which gender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffspringPolicy {
    pub enabled: bool,
    pub gender: String,
}

impl Default for OffspringPolicy {
    fn default() -> Self {
        Self {
            enabled: true,
            gender: DEFAULT_OFFSPRING_GENDER.to_string(),
        }
    }
}

impl OffspringPolicy {
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }
}

/// Descriptive name for a synthesized child, parents in argument order.
pub fn offspring_name(first: &str, second: &str) -> String {
    format!("Offspring of {} and {}", first, second)
}

/// Synthesize a child of `a` and `b` with the default gender.
pub fn infer_automatic_child(members: &[Member], a: MemberId, b: MemberId) -> OffspringOutcome {
    infer_automatic_child_with(members, a, b, DEFAULT_OFFSPRING_GENDER)
}

/// Synthesize a child of `a` and `b` unless one is impossible or already exists.
///
/// Nothing is created when either parent is missing, when the two do not
/// resolve to one man and one woman, or when some member already has exactly
/// this unordered parent pair. The father goes in `parent1Id`.
pub fn infer_automatic_child_with(
    members: &[Member],
    a: MemberId,
    b: MemberId,
    gender: &str,
) -> OffspringOutcome {
    let (Some(first), Some(second)) = (find(members, a), find(members, b)) else {
        return OffspringOutcome::unchanged(members);
    };

    let (father, mother) = match (first.canonical_gender(), second.canonical_gender()) {
        (Gender::Man, Gender::Woman) => (first.id, second.id),
        (Gender::Woman, Gender::Man) => (second.id, first.id),
        _ => return OffspringOutcome::unchanged(members),
    };

    if members
        .iter()
        .any(|member| member.has_parent_pair(father, mother))
    {
        debug!(%father, %mother, "couple already has a child");
        return OffspringOutcome::unchanged(members);
    }

    let name = offspring_name(&first.name, &second.name);
    let child = NewMember::new(name.clone(), gender).with_parents(Some(father), Some(mother));
    match insert_member(members, child) {
        Ok((next, id)) => OffspringOutcome::created(next, id, name),
        Err(err) => {
            warn!(%err, "could not synthesize offspring");
            OffspringOutcome::unchanged(members)
        }
    }
}

fn find(members: &[Member], id: MemberId) -> Option<&Member> {
    members.iter().find(|member| member.id == id)
}
