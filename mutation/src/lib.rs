//! Pedigree Mutation
//!
//! Write operations over the canonical member list (add/link/remove/edit),
//! automatic offspring inference, and the composite relation flows built on
//! top of them.
//!
//! Every operation takes a member slice and returns a new list; the input is
//! never modified.
//!
//! # Module Structure
//!
//! - `executor` - MutationExecutor that binds a member list to a policy
//! - `ops/` - Individual operation implementations
//! - `validation` - Shared field and lookup checks
//! - `error` - Error types for mutation failures
//! - `result` - Result types for mutation outcomes

mod error;
mod executor;
mod ops;
mod result;
mod validation;

pub use error::{MutationError, MutationResult};
pub use executor::MutationExecutor;
pub use ops::{
    add_child, add_member, add_parent, add_partner, edit_member, infer_automatic_child,
    infer_automatic_child_with, link_partners, next_id, offspring_name, remove_member,
    synchronize_partners, NewMember, OffspringPolicy, DEFAULT_OFFSPRING_GENDER,
};
pub use result::{OffspringOutcome, RelationOutcome};
