//! Spouse identity repair.
//!
//! The seeder may hand every marriage of a multi-partner member the same
//! spouse, often the member itself. Each marriage keeps its spouse only if
//! that spouse is a canonical partner not already claimed by an earlier
//! marriage at the same node; otherwise the next unclaimed partner, in
//! canonical list order, takes its place.

use std::collections::HashSet;

use pedigree_core::{HierarchyNode, Marriage, Member, MemberId, SpouseDescriptor};
use pedigree_graph::CanonicalIndex;
use tracing::{debug, warn};

/// Repair spouse descriptors at `node` and, recursively, below it.
///
/// A node missing from the index, or without a marriage list, comes back
/// unchanged.
pub fn fix_spouse_identities(node: &HierarchyNode, index: &CanonicalIndex) -> HierarchyNode {
    let Some(owner) = index.get(node.id) else {
        warn!(node = %node.id, "hierarchy node has no canonical member, passing through");
        return node.clone();
    };
    let Some(marriages) = node.marriages.as_ref() else {
        return node.clone();
    };

    let mut assigned = HashSet::new();
    let marriages = marriages
        .iter()
        .enumerate()
        .map(|(position, marriage)| {
            let spouse = marriage
                .spouse
                .as_ref()
                .map(|spouse| resolve_spouse(owner, spouse, position, &mut assigned, index));
            Marriage {
                spouse,
                children: marriage
                    .children
                    .iter()
                    .map(|child| fix_spouse_identities(child, index))
                    .collect(),
                extra: marriage.extra.clone(),
            }
        })
        .collect();

    HierarchyNode {
        id: node.id,
        name: node.name.clone(),
        marriages: Some(marriages),
        extra: node.extra.clone(),
    }
}

fn resolve_spouse(
    owner: &Member,
    spouse: &SpouseDescriptor,
    position: usize,
    assigned: &mut HashSet<MemberId>,
    index: &CanonicalIndex,
) -> SpouseDescriptor {
    let accepted =
        spouse.id != owner.id && owner.has_partner(spouse.id) && !assigned.contains(&spouse.id);
    if accepted {
        assigned.insert(spouse.id);
        debug!(owner = %owner.id, position, spouse = %spouse.id, "spouse accepted");
        return match index.get(spouse.id) {
            Some(member) => spouse.refreshed(member),
            None => spouse.clone(),
        };
    }

    let substitute = owner
        .partners
        .iter()
        .filter(|partner| **partner != owner.id && !assigned.contains(*partner))
        .find_map(|partner| index.get(*partner));

    match substitute {
        Some(member) => {
            assigned.insert(member.id);
            debug!(
                owner = %owner.id,
                position,
                seeded = %spouse.id,
                spouse = %member.id,
                "spouse substituted"
            );
            SpouseDescriptor::from_member(member)
        }
        None => {
            warn!(
                owner = %owner.id,
                position,
                seeded = %spouse.id,
                "no canonical partner left for marriage, spouse left unresolved"
            );
            spouse.clone()
        }
    }
}
