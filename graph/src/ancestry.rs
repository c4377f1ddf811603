//! Parent-chain cycle detection.
//!
//! Writes never check ancestry, so a member can end up as its own ancestor.
//! Rendering is best-effort in that case; callers use this to report it.

use pedigree_core::{Member, MemberId};
use std::collections::HashMap;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Visit {
    InProgress,
    Done,
}

/// Find a chain of parent links that returns to its start.
///
/// The returned path starts and ends with the same id, e.g. `[a, b, a]`
/// when `a` is a parent of `b` and `b` a parent of `a`. Parent ids that do
/// not resolve are ignored.
pub fn find_parent_cycle(members: &[Member]) -> Option<Vec<MemberId>> {
    let index: HashMap<MemberId, &Member> = members.iter().map(|m| (m.id, m)).collect();
    let mut state: HashMap<MemberId, Visit> = HashMap::new();
    let mut path = Vec::new();

    for member in members {
        if let Some(cycle) = visit(member.id, &index, &mut state, &mut path) {
            return Some(cycle);
        }
    }
    None
}

fn visit(
    id: MemberId,
    index: &HashMap<MemberId, &Member>,
    state: &mut HashMap<MemberId, Visit>,
    path: &mut Vec<MemberId>,
) -> Option<Vec<MemberId>> {
    match state.get(&id) {
        Some(Visit::Done) => return None,
        Some(Visit::InProgress) => {
            let start = path.iter().position(|step| *step == id)?;
            let mut cycle = path[start..].to_vec();
            cycle.push(id);
            return Some(cycle);
        }
        None => {}
    }

    let member = index.get(&id)?;
    state.insert(id, Visit::InProgress);
    path.push(id);

    for parent in member.parent_ids() {
        if let Some(cycle) = visit(parent, index, state, path) {
            return Some(cycle);
        }
    }

    path.pop();
    state.insert(id, Visit::Done);
    None
}
