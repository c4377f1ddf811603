//! Reconciliation entry points.

use pedigree_core::{Hierarchy, HierarchyNode};
use pedigree_graph::CanonicalIndex;
use tracing::debug;

use crate::completeness::add_missing_marriages;
use crate::spouse::fix_spouse_identities;

/// Reconcile every root of a seeded hierarchy against the canonical index.
pub fn reconcile(hierarchy: &Hierarchy, index: &CanonicalIndex) -> Hierarchy {
    debug!(roots = hierarchy.roots.len(), members = index.len(), "reconciling hierarchy");
    Hierarchy::new(
        hierarchy
            .roots
            .iter()
            .map(|root| reconcile_node(root, index))
            .collect(),
    )
}

/// Identity repair followed by completion, for one subtree.
///
/// Completion must see repaired spouses, otherwise a misattributed marriage
/// and its appended replacement would both name the same partner.
pub fn reconcile_node(node: &HierarchyNode, index: &CanonicalIndex) -> HierarchyNode {
    add_missing_marriages(&fix_spouse_identities(node, index), index)
}
