//! Marriage completeness.
//!
//! Seeding only derives a marriage from shared children, so childless
//! partnerships never show up. This pass appends one childless marriage per
//! canonical partner that no marriage at the node mentions.

use std::collections::HashSet;

use pedigree_core::{HierarchyNode, Marriage, SpouseDescriptor};
use pedigree_graph::CanonicalIndex;
use tracing::debug;

/// Append missing partnerships at `node` and, recursively, below it.
///
/// Missing partners are appended in canonical list order. A node missing
/// from the index, or without a marriage list, comes back unchanged.
pub fn add_missing_marriages(node: &HierarchyNode, index: &CanonicalIndex) -> HierarchyNode {
    let Some(owner) = index.get(node.id) else {
        return node.clone();
    };
    let Some(marriages) = node.marriages.as_ref() else {
        return node.clone();
    };

    let mut present: HashSet<_> = node.spouse_ids().into_iter().collect();
    let mut next: Vec<Marriage> = marriages
        .iter()
        .map(|marriage| Marriage {
            spouse: marriage.spouse.clone(),
            children: marriage
                .children
                .iter()
                .map(|child| add_missing_marriages(child, index))
                .collect(),
            extra: marriage.extra.clone(),
        })
        .collect();

    for partner in &owner.partners {
        if *partner == owner.id || present.contains(partner) {
            continue;
        }
        let Some(member) = index.get(*partner) else {
            continue;
        };
        debug!(owner = %owner.id, spouse = %member.id, "appending childless marriage");
        present.insert(member.id);
        next.push(Marriage::childless(SpouseDescriptor::from_member(member)));
    }

    HierarchyNode {
        id: node.id,
        name: node.name.clone(),
        marriages: Some(next),
        extra: node.extra.clone(),
    }
}
