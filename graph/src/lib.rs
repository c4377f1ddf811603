//! Pedigree Graph
//!
//! This crate normalizes and indexes the canonical member graph:
//! - Sanitizer: coerce arbitrary JSON into valid member records
//! - Merge: overlay a stored snapshot on the default members
//! - Canonical index: id -> member lookup used by reconciliation
//! - Seeding preparation: prune references to unknown members
//! - Ancestry: detect parent chains that loop back on themselves

mod ancestry;
mod index;
mod merge;
mod prepare;
mod sanitize;

pub use ancestry::find_parent_cycle;
pub use index::CanonicalIndex;
pub use merge::merge;
pub use prepare::prepare_for_seeding;
pub use sanitize::{coerce_id, dedup_partners, sanitize, sanitize_members};
