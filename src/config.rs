//! Resolver configuration.
//!
//! Loaded from JSON. Every field is optional; the defaults are the `"Dr. "`
//! honorific, the `?` marker and a random tie-break.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ResolveError, ResolveResult, ValidationError};
use crate::honorific::Honorifics;
use crate::identity::DEFAULT_SYNTHETIC_MARKER;
use crate::resolver::TieBreakPolicy;

fn default_marker() -> String {
    DEFAULT_SYNTHETIC_MARKER.to_string()
}

/// Tunables for [`NameResolver`](crate::NameResolver).
///
/// # Examples
///
/// ```
/// use authorgraph::{ResolverConfig, TieBreakPolicy};
///
/// let config = ResolverConfig::from_json_str(r#"{"tie_break": {"type": "lowest_id"}}"#).unwrap();
/// assert_eq!(config.tie_break, TieBreakPolicy::LowestId);
/// assert_eq!(config.synthetic_marker, "?");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResolverConfig {
    /// Prefixes skipped when taking a directory name's initial.
    #[serde(default)]
    pub honorifics: Honorifics,

    /// Appended to synthetic identifiers.
    #[serde(default = "default_marker")]
    pub synthetic_marker: String,

    /// How one of several matching people is picked.
    #[serde(default)]
    pub tie_break: TieBreakPolicy,

    /// Seed for the random tie-break; entropy when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            honorifics: Honorifics::default(),
            synthetic_marker: default_marker(),
            tie_break: TieBreakPolicy::default(),
            seed: None,
        }
    }
}

impl ResolverConfig {
    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    /// `InvalidConfig` on malformed JSON or invalid values.
    pub fn from_json_str(json: &str) -> Result<Self, ValidationError> {
        let config: Self = serde_json::from_str(json).map_err(|e| ValidationError::InvalidConfig {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a JSON configuration file.
    ///
    /// # Errors
    /// `Io` if the file cannot be read, otherwise as [`Self::from_json_str`].
    pub fn from_path(path: impl AsRef<Path>) -> ResolveResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| ResolveError::io(path.display().to_string(), &e))?;
        Ok(Self::from_json_str(&json)?)
    }

    /// Checks invariants serde cannot express.
    ///
    /// # Errors
    /// `InvalidConfig` for an empty honorific or an empty marker.
    pub fn validate(&self) -> Result<(), ValidationError> {
        Honorifics::new(self.honorifics.as_slice().to_vec())?;
        if self.synthetic_marker.is_empty() {
            return Err(ValidationError::InvalidConfig {
                reason: "synthetic_marker cannot be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Sets a fixed tie-break seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the tie-break policy.
    #[must_use]
    pub fn with_tie_break(mut self, policy: TieBreakPolicy) -> Self {
        self.tie_break = policy;
        self
    }
}
