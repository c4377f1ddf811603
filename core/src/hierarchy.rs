//! Seeded hierarchy structures.
//!
//! A hierarchy is produced by an external seeding step for one render pass
//! and discarded afterwards. Nothing here is a source of truth: marriages are
//! derived groupings of a spouse and the children shared with that spouse.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Extensions, Member, MemberId};

/// Seeder field carrying the spouse's styling, derived from gender.
const CLASS_HINT: &str = "class";

/// A rooted hierarchy: the seeder may return several roots.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hierarchy {
    pub roots: Vec<HierarchyNode>,
}

impl Hierarchy {
    pub fn new(roots: Vec<HierarchyNode>) -> Self {
        Self { roots }
    }

    /// Depth-first search for a node by id.
    pub fn find(&self, id: MemberId) -> Option<&HierarchyNode> {
        self.roots.iter().find_map(|root| root.find(id))
    }
}

/// A member placed in the hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HierarchyNode {
    pub id: MemberId,
    #[serde(default)]
    pub name: String,
    /// Absent when the seeder emitted no marriage list for this node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marriages: Option<Vec<Marriage>>,
    /// Rendering hints and other seeder fields, passed through.
    #[serde(flatten)]
    pub extra: Extensions,
}

impl HierarchyNode {
    /// A node with an empty marriage list.
    pub fn new(id: MemberId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            marriages: Some(Vec::new()),
            extra: Extensions::new(),
        }
    }

    pub fn with_marriage(mut self, marriage: Marriage) -> Self {
        self.marriages.get_or_insert_with(Vec::new).push(marriage);
        self
    }

    /// Marriages as a slice (empty when absent).
    pub fn marriage_list(&self) -> &[Marriage] {
        self.marriages.as_deref().unwrap_or(&[])
    }

    /// Spouse ids in marriage order, skipping marriages without a spouse.
    pub fn spouse_ids(&self) -> Vec<MemberId> {
        self.marriage_list()
            .iter()
            .filter_map(|marriage| marriage.spouse.as_ref().map(|spouse| spouse.id))
            .collect()
    }

    /// Spouse names in marriage order, skipping marriages without a spouse.
    pub fn spouse_names(&self) -> Vec<&str> {
        self.marriage_list()
            .iter()
            .filter_map(|marriage| marriage.spouse.as_ref().map(|spouse| spouse.name.as_str()))
            .collect()
    }

    /// Depth-first search for a node by id, including this one.
    pub fn find(&self, id: MemberId) -> Option<&HierarchyNode> {
        if self.id == id {
            return Some(self);
        }
        self.marriage_list()
            .iter()
            .flat_map(|marriage| marriage.children.iter())
            .find_map(|child| child.find(id))
    }
}

/// A spouse and the children shared with them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marriage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spouse: Option<SpouseDescriptor>,
    #[serde(default)]
    pub children: Vec<HierarchyNode>,
    #[serde(flatten)]
    pub extra: Extensions,
}

impl Marriage {
    pub fn new(spouse: SpouseDescriptor, children: Vec<HierarchyNode>) -> Self {
        Self {
            spouse: Some(spouse),
            children,
            extra: Extensions::new(),
        }
    }

    /// A marriage that produced no recorded children.
    pub fn childless(spouse: SpouseDescriptor) -> Self {
        Self::new(spouse, Vec::new())
    }
}

/// Display data for the spouse side of a marriage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpouseDescriptor {
    pub id: MemberId,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(flatten)]
    pub extra: Extensions,
}

impl SpouseDescriptor {
    pub fn new(id: MemberId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            gender: None,
            nickname: None,
            extra: Extensions::new(),
        }
    }

    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    /// A fresh descriptor built from canonical data only.
    pub fn from_member(member: &Member) -> Self {
        Self {
            id: member.id,
            name: member.name.clone(),
            gender: Some(member.gender.clone()),
            nickname: member.nickname.clone(),
            extra: Extensions::new(),
        }
    }

    /// This descriptor with identity and display fields taken from `member`.
    /// Seeder-provided extras are kept, except that a `class` hint is reset
    /// to the canonical gender.
    pub fn refreshed(&self, member: &Member) -> Self {
        let mut extra = self.extra.clone();
        if let Some(class) = extra.get_mut(CLASS_HINT) {
            *class = Value::String(member.gender.clone());
        }
        Self {
            id: member.id,
            name: member.name.clone(),
            gender: Some(member.gender.clone()),
            nickname: member.nickname.clone(),
            extra,
        }
    }
}
