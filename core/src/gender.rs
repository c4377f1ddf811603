//! Gender normalization.
//!
//! Members store gender as free-form text. Every consumer compares the
//! canonical form instead of the raw string.

use std::fmt;

/// Canonical gender of a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Man,
    Woman,
    Unknown,
}

impl Gender {
    /// Normalize a raw gender string.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    pub fn canonical(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "man" | "male" | "macho" => Gender::Man,
            "woman" | "female" | "hembra" => Gender::Woman,
            _ => Gender::Unknown,
        }
    }

    /// The gender a partner is expected to have.
    pub fn opposite(self) -> Self {
        match self {
            Gender::Man => Gender::Woman,
            Gender::Woman => Gender::Man,
            Gender::Unknown => Gender::Unknown,
        }
    }

    /// Returns true for Man or Woman.
    pub fn is_known(self) -> bool {
        !matches!(self, Gender::Unknown)
    }

    /// Wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Man => "man",
            Gender::Woman => "woman",
            Gender::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
