//! Prepare the canonical list for the external seeder.

use pedigree_core::{Member, MemberId};
use std::collections::HashSet;

/// Copy of `members` with every reference to an unknown member removed.
///
/// Parent ids that do not resolve become null; partner ids that do not
/// resolve, or that point at the member itself, are dropped. The seeder and
/// the reconciliation lookup are both built from this list.
pub fn prepare_for_seeding(members: &[Member]) -> Vec<Member> {
    let known: HashSet<MemberId> = members.iter().map(|member| member.id).collect();
    let resolve = |id: Option<MemberId>| id.filter(|id| known.contains(id));

    members
        .iter()
        .map(|member| Member {
            parent1_id: resolve(member.parent1_id),
            parent2_id: resolve(member.parent2_id),
            partners: member
                .partners
                .iter()
                .copied()
                .filter(|partner| *partner != member.id && known.contains(partner))
                .collect(),
            ..member.clone()
        })
        .collect()
}
