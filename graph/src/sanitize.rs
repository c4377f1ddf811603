//! Sanitizer: arbitrary JSON -> canonical member records.

use pedigree_core::{Extensions, Member, MemberId};
use serde_json::Value;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Keys interpreted by the core record; everything else goes to the extension bag.
const CORE_FIELDS: &[&str] = &[
    "id",
    "name",
    "gender",
    "nickname",
    "parent1Id",
    "parent2Id",
    "partners",
];

/// Normalize arbitrary input into canonical members.
///
/// Non-array input yields an empty list. Entries that are not objects or
/// carry no numeric id are dropped; so are later entries repeating an id.
/// The result is a fixed point: sanitizing its serialized form returns it.
pub fn sanitize(raw: &Value) -> Vec<Member> {
    let Some(entries) = raw.as_array() else {
        debug!("sanitize: input is not an array");
        return Vec::new();
    };

    let mut seen = HashSet::new();
    let mut result = Vec::with_capacity(entries.len());
    for entry in entries {
        let Some(member) = sanitize_entry(entry) else {
            continue;
        };
        if !seen.insert(member.id) {
            warn!(id = %member.id, "sanitize: dropping member with duplicate id");
            continue;
        }
        result.push(member);
    }
    result
}

/// Re-apply the sanitizer rules to typed members.
pub fn sanitize_members(members: &[Member]) -> Vec<Member> {
    let mut seen = HashSet::new();
    members
        .iter()
        .filter(|member| seen.insert(member.id))
        .map(|member| Member {
            partners: dedup_partners(member.partners.iter().copied(), Some(member.id)),
            ..member.clone()
        })
        .collect()
}

/// Coerce a JSON value into a member id.
///
/// Accepts non-negative integral numbers and strings whose trimmed text is one.
pub fn coerce_id(value: &Value) -> Option<MemberId> {
    match value {
        Value::Number(number) => number
            .as_u64()
            .or_else(|| {
                number
                    .as_f64()
                    .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= u64::MAX as f64)
                    .map(|f| f as u64)
            })
            .map(MemberId::new),
        Value::String(text) => text.trim().parse::<u64>().ok().map(MemberId::new),
        _ => None,
    }
}

/// Deduplicate partner ids preserving first occurrence, dropping `owner`.
pub fn dedup_partners(
    partners: impl IntoIterator<Item = MemberId>,
    owner: Option<MemberId>,
) -> Vec<MemberId> {
    let mut seen = HashSet::new();
    partners
        .into_iter()
        .filter(|partner| Some(*partner) != owner && seen.insert(*partner))
        .collect()
}

fn sanitize_entry(entry: &Value) -> Option<Member> {
    let object = entry.as_object()?;
    let id = object.get("id").and_then(coerce_id)?;

    let partners = match object.get("partners") {
        Some(Value::Array(items)) => dedup_partners(items.iter().filter_map(coerce_id), Some(id)),
        _ => Vec::new(),
    };

    let mut extra: Extensions = object.clone();
    for key in CORE_FIELDS {
        extra.remove(*key);
    }

    Some(Member {
        id,
        name: object.get("name").map(coerce_text).unwrap_or_default(),
        gender: object.get("gender").map(coerce_text).unwrap_or_default(),
        nickname: object.get("nickname").and_then(coerce_optional_text),
        parent1_id: object.get("parent1Id").and_then(coerce_id),
        parent2_id: object.get("parent2Id").and_then(coerce_id),
        partners,
        extra,
    })
}

fn coerce_text(value: &Value) -> String {
    coerce_optional_text(value).unwrap_or_default()
}

fn coerce_optional_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}
