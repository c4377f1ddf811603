//! ADD operation - appends a new member.

use pedigree_core::{Extensions, Member, MemberId};
use pedigree_graph::dedup_partners;

use crate::error::{MutationError, MutationResult};
use crate::validation;

/// Data for a member that does not exist yet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewMember {
    /// Explicit id; the next unused id is assigned when omitted.
    pub id: Option<MemberId>,
    pub name: String,
    pub gender: String,
    pub nickname: Option<String>,
    pub parent1_id: Option<MemberId>,
    pub parent2_id: Option<MemberId>,
    pub partners: Vec<MemberId>,
    pub extra: Extensions,
}

impl NewMember {
    pub fn new(name: impl Into<String>, gender: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            gender: gender.into(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: MemberId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_parents(mut self, parent1: Option<MemberId>, parent2: Option<MemberId>) -> Self {
        self.parent1_id = parent1;
        self.parent2_id = parent2;
        self
    }

    pub fn with_partners(mut self, partners: impl IntoIterator<Item = MemberId>) -> Self {
        self.partners = partners.into_iter().collect();
        self
    }

    pub fn with_nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = Some(nickname.into());
        self
    }
}

/// One past the largest id in use, or 0 for an empty list.
///
/// Fails when the largest id in use is `u64::MAX`.
pub fn next_id(members: &[Member]) -> MutationResult<MemberId> {
    match members.iter().map(|member| member.id).max() {
        Some(max) => Ok(max.next()?),
        None => Ok(MemberId::new(0)),
    }
}

/// Append a new member.
///
/// Fails when `name` or `gender` is blank, or when an explicit id is taken.
/// Partner ids are deduplicated with the sanitizer's rule; every listed
/// partner that exists gets the new id added to its own partner list.
pub fn add_member(members: &[Member], data: NewMember) -> MutationResult<Vec<Member>> {
    insert_member(members, data).map(|(members, _)| members)
}

/// [`add_member`], also returning the id that was assigned.
pub(crate) fn insert_member(
    members: &[Member],
    data: NewMember,
) -> MutationResult<(Vec<Member>, MemberId)> {
    validation::require_text("name", &data.name)?;
    validation::require_text("gender", &data.gender)?;

    // Assign or check the id
    let id = match data.id {
        Some(id) if members.iter().any(|member| member.id == id) => {
            return Err(MutationError::DuplicateId(id));
        }
        Some(id) => id,
        None => next_id(members)?,
    };

    let partners = dedup_partners(data.partners, Some(id));

    // Reciprocate partner links that resolve
    let mut next: Vec<Member> = members
        .iter()
        .map(|existing| {
            let mut existing = existing.clone();
            if partners.contains(&existing.id) {
                existing.add_partner(id);
            }
            existing
        })
        .collect();

    next.push(Member {
        id,
        name: data.name,
        gender: data.gender,
        nickname: data.nickname,
        parent1_id: data.parent1_id,
        parent2_id: data.parent2_id,
        partners,
        extra: data.extra,
    });

    Ok((next, id))
}
