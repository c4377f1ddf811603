//! Merge a stored snapshot over the default members.

use pedigree_core::{Member, MemberId};
use std::collections::HashMap;

use crate::sanitize::dedup_partners;

/// Overlay `stored` on `defaults`, keyed by id.
///
/// - id only in defaults: the default is kept
/// - id only in stored: the stored member is kept as-is
/// - id in both: stored scalar fields win, partner lists are unioned
///
/// Output order is the defaults order followed by stored-only members in
/// stored order. An empty stored list yields the defaults.
pub fn merge(stored: &[Member], defaults: &[Member]) -> Vec<Member> {
    if stored.is_empty() {
        return defaults.to_vec();
    }

    let mut order: Vec<MemberId> = Vec::with_capacity(defaults.len() + stored.len());
    let mut merged: HashMap<MemberId, Member> = HashMap::new();

    for member in defaults {
        if !merged.contains_key(&member.id) {
            order.push(member.id);
            merged.insert(member.id, member.clone());
        }
    }

    for member in stored {
        let combined = match merged.get(&member.id) {
            Some(existing) => merge_member(existing, member),
            None => {
                order.push(member.id);
                member.clone()
            }
        };
        merged.insert(member.id, combined);
    }

    order
        .into_iter()
        .filter_map(|id| merged.remove(&id))
        .collect()
}

/// Stored fields over base fields. Empty stored text does not erase base text.
fn merge_member(base: &Member, stored: &Member) -> Member {
    let mut extra = base.extra.clone();
    extra.extend(stored.extra.iter().map(|(k, v)| (k.clone(), v.clone())));

    let partners = dedup_partners(
        base.partners.iter().chain(stored.partners.iter()).copied(),
        Some(stored.id),
    );

    Member {
        id: stored.id,
        name: prefer_text(&stored.name, &base.name),
        gender: prefer_text(&stored.gender, &base.gender),
        nickname: stored.nickname.clone().or_else(|| base.nickname.clone()),
        parent1_id: stored.parent1_id,
        parent2_id: stored.parent2_id,
        partners,
        extra,
    }
}

fn prefer_text(stored: &str, base: &str) -> String {
    if stored.is_empty() {
        base.to_string()
    } else {
        stored.to_string()
    }
}
