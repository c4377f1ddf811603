//! Canonical id -> member lookup.

use pedigree_core::{Member, MemberId};
use std::collections::HashMap;

/// Read-only lookup from member id to canonical member.
///
/// Built from a member list; the first occurrence of an id wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CanonicalIndex {
    members: HashMap<MemberId, Member>,
}

impl CanonicalIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index a member list.
    pub fn from_members(members: &[Member]) -> Self {
        members.iter().cloned().collect()
    }

    /// Get a member by id.
    pub fn get(&self, id: MemberId) -> Option<&Member> {
        self.members.get(&id)
    }

    pub fn contains(&self, id: MemberId) -> bool {
        self.members.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Member> + '_ {
        self.members.values()
    }
}

impl FromIterator<Member> for CanonicalIndex {
    fn from_iter<I: IntoIterator<Item = Member>>(iter: I) -> Self {
        let mut members = HashMap::new();
        for member in iter {
            members.entry(member.id).or_insert(member);
        }
        Self { members }
    }
}
