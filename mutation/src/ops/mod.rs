//! Mutation operation implementations.
//!
//! Each operation is implemented in its own module for better organization
//! and testability.

mod add;
mod edit;
mod link;
mod offspring;
mod relate;
mod remove;

pub use add::{add_member, next_id, NewMember};
pub use edit::edit_member;
pub use link::{link_partners, synchronize_partners};
pub use offspring::{
    infer_automatic_child, infer_automatic_child_with, offspring_name, OffspringPolicy,
    DEFAULT_OFFSPRING_GENDER,
};
pub use relate::{add_child, add_parent, add_partner};
pub use remove::remove_member;
