//! Pedigree Core Types
//!
//! This crate provides the foundational types used throughout the pedigree system:
//! - Identity types (MemberId)
//! - Canonical member records with a preserved extension bag
//! - Gender normalization
//! - Seeded hierarchy structures (HierarchyNode, Marriage, SpouseDescriptor)
//! - Common error types

mod error;
mod gender;
mod hierarchy;
mod id;
mod member;

pub use error::*;
pub use gender::*;
pub use hierarchy::*;
pub use id::*;
pub use member::*;
