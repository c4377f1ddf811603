//! Canonical member records.
//!
//! A member is the unit of the canonical graph. Parent links are stored on
//! the child; partner links are stored on both sides.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{Gender, MemberId};

/// Uninterpreted fields carried alongside the core record.
pub type Extensions = Map<String, Value>;

/// A member of the canonical graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    /// Unique identifier.
    pub id: MemberId,
    /// Display name.
    pub name: String,
    /// Free-form gender text (see [`Gender::canonical`]).
    pub gender: String,
    /// Optional display nickname.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    /// First parent (by convention the father).
    #[serde(default)]
    pub parent1_id: Option<MemberId>,
    /// Second parent (by convention the mother).
    #[serde(default)]
    pub parent2_id: Option<MemberId>,
    /// Partner ids in insertion order, without duplicates or self.
    #[serde(default)]
    pub partners: Vec<MemberId>,
    /// Fields this crate does not interpret, preserved verbatim.
    #[serde(flatten)]
    pub extra: Extensions,
}

impl Member {
    /// Create a member with no relations.
    pub fn new(id: MemberId, name: impl Into<String>, gender: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            gender: gender.into(),
            nickname: None,
            parent1_id: None,
            parent2_id: None,
            partners: Vec::new(),
            extra: Extensions::new(),
        }
    }

    pub fn with_parents(mut self, parent1: Option<MemberId>, parent2: Option<MemberId>) -> Self {
        self.parent1_id = parent1;
        self.parent2_id = parent2;
        self
    }

    pub fn with_partners(mut self, partners: impl IntoIterator<Item = MemberId>) -> Self {
        for partner in partners {
            self.add_partner(partner);
        }
        self
    }

    pub fn with_nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = Some(nickname.into());
        self
    }

    /// Canonical form of the stored gender.
    pub fn canonical_gender(&self) -> Gender {
        Gender::canonical(&self.gender)
    }

    /// Iterate over the set parent ids.
    pub fn parent_ids(&self) -> impl Iterator<Item = MemberId> + '_ {
        self.parent1_id.into_iter().chain(self.parent2_id)
    }

    /// Check whether this member's two parents are exactly `a` and `b`, in either order.
    pub fn has_parent_pair(&self, a: MemberId, b: MemberId) -> bool {
        match (self.parent1_id, self.parent2_id) {
            (Some(p1), Some(p2)) => (p1 == a && p2 == b) || (p1 == b && p2 == a),
            _ => false,
        }
    }

    /// Check if `id` is one of this member's partners.
    pub fn has_partner(&self, id: MemberId) -> bool {
        self.partners.contains(&id)
    }

    /// Add a partner. Returns false when already present or when `id` is self.
    pub fn add_partner(&mut self, id: MemberId) -> bool {
        if id == self.id || self.partners.contains(&id) {
            return false;
        }
        self.partners.push(id);
        true
    }

    /// Remove a partner. Returns true if it was present.
    pub fn remove_partner(&mut self, id: MemberId) -> bool {
        let before = self.partners.len();
        self.partners.retain(|partner| *partner != id);
        self.partners.len() != before
    }

    /// Check if this member references `id` as a parent or partner.
    pub fn references(&self, id: MemberId) -> bool {
        self.parent1_id == Some(id) || self.parent2_id == Some(id) || self.has_partner(id)
    }

    /// Null every parent slot pointing at `id` and drop it from the partners.
    pub fn forget(&mut self, id: MemberId) {
        if self.parent1_id == Some(id) {
            self.parent1_id = None;
        }
        if self.parent2_id == Some(id) {
            self.parent2_id = None;
        }
        self.remove_partner(id);
    }
}
