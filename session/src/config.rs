//! Tree configuration.
//!
//! Loaded from a `[tree]` table:
//!
//! ```toml
//! [tree]
//! root_id = 2
//! storage_key = "pedigreeTreeData"
//! infer_offspring = true
//! offspring_gender = "man"
//!
//! [[tree.members]]
//! id = 0
//! name = "Founder"
//! gender = "woman"
//! ```
//!
//! Every key is optional. Without `members` the built-in family is used.

use pedigree_core::{Member, MemberId};
use pedigree_graph::sanitize_members;
use pedigree_mutation::OffspringPolicy;
use serde::Deserialize;
use thiserror::Error;

use crate::defaults::{default_family, DEFAULT_ROOT_ID, DEFAULT_STORAGE_KEY};

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("config validation error: {message}")]
    Invalid { message: String },
}

impl ConfigError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }
}

/// Session configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeConfig {
    /// Member the hierarchy is anchored at.
    pub root_id: MemberId,
    /// Key the caller persists the member list under.
    pub storage_key: String,
    /// Offspring inference applied by partner flows.
    pub offspring: OffspringPolicy,
    /// Members used on first start, on reset, and as the merge base on restore.
    pub defaults: Vec<Member>,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            root_id: DEFAULT_ROOT_ID,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            offspring: OffspringPolicy::default(),
            defaults: default_family(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    tree: TreeSection,
}

#[derive(Debug, Default, Deserialize)]
struct TreeSection {
    root_id: Option<u64>,
    storage_key: Option<String>,
    infer_offspring: Option<bool>,
    offspring_gender: Option<String>,
    members: Option<Vec<Member>>,
}

impl TreeConfig {
    pub fn with_root(mut self, root_id: MemberId) -> Self {
        self.root_id = root_id;
        self
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn with_offspring(mut self, offspring: OffspringPolicy) -> Self {
        self.offspring = offspring;
        self
    }

    /// Replace the default members. They are sanitized first.
    pub fn with_defaults(mut self, defaults: Vec<Member>) -> Self {
        self.defaults = sanitize_members(&defaults);
        self
    }

    /// Parse a TOML document with a `[tree]` table.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(text)?;
        let section = file.tree;
        let mut config = Self::default();

        if let Some(root_id) = section.root_id {
            config.root_id = MemberId::new(root_id);
        }
        if let Some(key) = section.storage_key {
            if key.trim().is_empty() {
                return Err(ConfigError::invalid("storage_key must not be blank"));
            }
            config.storage_key = key;
        }
        if let Some(enabled) = section.infer_offspring {
            config.offspring.enabled = enabled;
        }
        if let Some(gender) = section.offspring_gender {
            if gender.trim().is_empty() {
                return Err(ConfigError::invalid("offspring_gender must not be blank"));
            }
            config.offspring.gender = gender;
        }
        if let Some(members) = section.members {
            config = config.with_defaults(members);
        }

        Ok(config)
    }
}
