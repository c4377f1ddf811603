//! `pedigree-reconcile` - realigns a seeded hierarchy with the canonical graph.
//!
//! Pure engine crate: receives a hierarchy and a canonical index, returns a
//! new hierarchy. Inputs are never modified and malformed subtrees are passed
//! through unchanged.
//!
//! Two passes run in order over every root:
//! - [`fix_spouse_identities`] repairs misattributed spouse descriptors
//! - [`add_missing_marriages`] appends partnerships that produced no children

pub mod completeness;
pub mod engine;
pub mod spouse;
pub mod untyped;

pub use completeness::add_missing_marriages;
pub use engine::{reconcile, reconcile_node};
pub use spouse::fix_spouse_identities;
pub use untyped::reconcile_json;
