//! Import and export of the canonical member list.

use pedigree_core::Member;
use pedigree_graph::{sanitize, sanitize_members};
use serde_json::Value;
use thiserror::Error;

/// Result type for import/export.
pub type TransferResult<T> = Result<T, TransferError>;

/// Import/export errors. Messages are meant for the user.
#[derive(Debug, Error)]
pub enum TransferError {
    #[error("the file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a list of members or an object with a \"members\" list")]
    UnsupportedShape,

    #[error("the file contains no valid members")]
    NoMembers,
}

/// Parse an import document into sanitized members.
///
/// Accepts a bare array or `{"members": [...]}`.
pub fn parse_import(text: &str) -> TransferResult<Vec<Member>> {
    let raw: Value = serde_json::from_str(text)?;
    let list = match &raw {
        Value::Array(_) => &raw,
        Value::Object(object) => match object.get("members") {
            Some(members @ Value::Array(_)) => members,
            _ => return Err(TransferError::UnsupportedShape),
        },
        _ => return Err(TransferError::UnsupportedShape),
    };

    let members = sanitize(list);
    if members.is_empty() {
        return Err(TransferError::NoMembers);
    }
    Ok(members)
}

/// Pretty-printed sanitized member array.
pub fn render_export(members: &[Member]) -> TransferResult<String> {
    Ok(serde_json::to_string_pretty(&sanitize_members(members))?)
}
