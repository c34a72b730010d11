//! Honorific prefixes on directory display names.
//!
//! Directory records sometimes carry a title in front of the name
//! (`"Dr. Jane Smith"`). The initial used for matching is the character that
//! follows such a prefix. Prefix detection is a plain, case-sensitive
//! `starts_with` check; extending it means adding entries here, not changing
//! the matcher.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::name::last_token;

/// The prefix recognised when no other configuration is given.
pub const DEFAULT_HONORIFIC: &str = "Dr. ";

/// An ordered set of honorific prefixes.
///
/// The first prefix that matches is stripped; at most one prefix is removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Honorifics(Vec<String>);

impl Honorifics {
    /// Builds a validated prefix set.
    ///
    /// # Errors
    /// Returns `InvalidConfig` if any prefix is empty.
    pub fn new(prefixes: Vec<String>) -> Result<Self, ValidationError> {
        if prefixes.iter().any(String::is_empty) {
            return Err(ValidationError::InvalidConfig {
                reason: "honorific prefixes cannot be empty".to_string(),
            });
        }
        Ok(Self(prefixes))
    }

    /// An empty set: display names are matched as-is.
    #[must_use]
    pub const fn none() -> Self {
        Self(Vec::new())
    }

    /// Returns the prefixes as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Removes the first matching honorific from `display_name`.
    #[must_use]
    pub fn strip<'a>(&self, display_name: &'a str) -> &'a str {
        self.0
            .iter()
            .find_map(|prefix| display_name.strip_prefix(prefix.as_str()))
            .unwrap_or(display_name)
    }

    /// Initial of a directory display name, skipping any honorific.
    ///
    /// `None` when nothing follows the prefix (or the name is empty).
    #[must_use]
    pub fn effective_initial(&self, display_name: &str) -> Option<char> {
        self.strip(display_name).chars().next()
    }

    /// Surname of a directory display name: its last whitespace token.
    #[must_use]
    pub fn effective_surname<'a>(&self, display_name: &'a str) -> Option<&'a str> {
        last_token(display_name)
    }
}

impl Default for Honorifics {
    fn default() -> Self {
        Self(vec![DEFAULT_HONORIFIC.to_string()])
    }
}
