//! Pedigree Tests
//!
//! Scenario framework, fixtures and mock seeders shared by the integration
//! tests in `tests/tests/`.
//!
//! A [`Scenario`] starts a [`TreeSession`](pedigree_session::TreeSession),
//! runs named steps against it and checks each step with an [`Assertion`].

pub mod fixtures;
pub mod seeders;

pub use assertion::Assertion;
pub use error::{ScenarioError, ScenarioResult};
pub use runner::Runner;
pub use scenario::{Scenario, Step};

pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::seeders::{ChildGroupSeeder, MisattributingSeeder, SeedError};
    pub use crate::{Assertion, Scenario, ScenarioError};
    pub use pedigree_core::{Hierarchy, HierarchyNode, Marriage, Member, MemberId, SpouseDescriptor};
    pub use pedigree_graph::CanonicalIndex;
    pub use pedigree_mutation::{NewMember, OffspringPolicy};
    pub use pedigree_session::{TreeConfig, TreeSession};
}
