//! Pedigree Session
//!
//! Composition layer over the canonical member list: restore and reset,
//! mutations, import/export, and the seed-then-reconcile render cycle.
//!
//! The seeding adapter is a [`Seeder`] handle built once by the caller and
//! passed to [`TreeSession::render`]. Every successful mutation advances the
//! session generation; a render started under an older generation is
//! discarded by [`TreeSession::finish_render`].

mod config;
mod defaults;
mod error;
mod generation;
mod result;
mod seeder;
mod session;
mod transfer;

pub use config::{ConfigError, TreeConfig};
pub use defaults::{default_family, DEFAULT_ROOT_ID, DEFAULT_STORAGE_KEY};
pub use error::{SessionError, SessionResult};
pub use generation::Generation;
pub use result::{RelationSummary, RenderRequest};
pub use seeder::Seeder;
pub use session::TreeSession;
pub use transfer::{parse_import, render_export, TransferError, TransferResult};
