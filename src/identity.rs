//! Resolved author identities.
//!
//! Every author name resolves to exactly one [`ResolvedIdentity`]: either a
//! directory [`Person`] or a [`SyntheticIdentity`] fabricated from the name
//! itself. Graph construction keys nodes and edges on [`IdentityKey`], which
//! is stable for both kinds.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::name::AuthorName;
use crate::person::{Person, PersonId};

/// Marker appended to synthetic identifiers when no other is configured.
///
/// Directory ids are numeric, so a `?` can never collide with one.
pub const DEFAULT_SYNTHETIC_MARKER: &str = "?";

/// Locally generated identifier for a name with no directory match.
///
/// Derived deterministically: the name with every period, comma, hyphen and
/// whitespace character removed, followed by the marker. `"J. Smith-Jones"`
/// becomes `"JSmithJones?"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SyntheticId(String);

impl SyntheticId {
    /// Derives the identifier for `name` using `marker`.
    #[must_use]
    pub fn derive(name: &str, marker: &str) -> Self {
        let mut id: String = name
            .chars()
            .filter(|c| !is_separator(*c))
            .collect();
        id.push_str(marker);
        Self(id)
    }

    /// Returns the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_separator(c: char) -> bool {
    matches!(c, '.' | ',' | '-') || c.is_whitespace()
}

impl fmt::Display for SyntheticId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fallback identity for an author the directory does not know.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SyntheticIdentity {
    /// Identifier derived from the name; equal names share it.
    pub id: SyntheticId,

    /// The author name exactly as printed in the document.
    pub display_name: String,
}

impl SyntheticIdentity {
    /// Builds the synthetic identity for `name`.
    #[must_use]
    pub fn from_name(name: &AuthorName, marker: &str) -> Self {
        Self {
            id: SyntheticId::derive(name.as_str(), marker),
            display_name: name.as_str().to_string(),
        }
    }
}

/// Stable key of a resolved identity, used to group graph nodes and edges.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IdentityKey {
    /// Directory person.
    Person(PersonId),
    /// Synthetic fallback.
    Synthetic(SyntheticId),
}

impl fmt::Display for IdentityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Person(id) => write!(f, "{id}"),
            Self::Synthetic(id) => write!(f, "{id}"),
        }
    }
}

/// Outcome of resolving one author name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResolvedIdentity {
    /// Matched a directory record.
    Directory(Person),
    /// No directory match; identity synthesised from the name.
    Synthetic(SyntheticIdentity),
}

impl ResolvedIdentity {
    /// Key for grouping this identity.
    #[must_use]
    pub fn key(&self) -> IdentityKey {
        match self {
            Self::Directory(person) => IdentityKey::Person(person.id),
            Self::Synthetic(synthetic) => IdentityKey::Synthetic(synthetic.id.clone()),
        }
    }

    /// Human-readable label.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self {
            Self::Directory(person) => &person.name,
            Self::Synthetic(synthetic) => &synthetic.display_name,
        }
    }

    /// Affiliation, known only for directory matches.
    #[must_use]
    pub fn affiliation(&self) -> Option<&str> {
        match self {
            Self::Directory(person) => person.affiliation.as_deref(),
            Self::Synthetic(_) => None,
        }
    }

    /// Returns the directory person, if matched.
    #[must_use]
    pub const fn person(&self) -> Option<&Person> {
        match self {
            Self::Directory(person) => Some(person),
            Self::Synthetic(_) => None,
        }
    }

    /// Returns true for the fallback identity.
    #[must_use]
    pub const fn is_synthetic(&self) -> bool {
        matches!(self, Self::Synthetic(_))
    }
}
