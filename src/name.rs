//! Author names as printed in source documents.
//!
//! A document author list carries free text such as `"J. Smith"`. Matching
//! against the directory only uses two features of it: the first character
//! (the initial) and the last whitespace-delimited token (the surname).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A validated author name.
///
/// The raw text is kept verbatim; it is what a synthetic identity displays
/// when the directory has no matching person.
///
/// # Examples
///
/// ```
/// use authorgraph::AuthorName;
///
/// let name = AuthorName::parse("J. Smith").unwrap();
/// assert_eq!(name.initial(), 'J');
/// assert_eq!(name.surname(), "Smith");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AuthorName {
    raw: String,
    initial: char,
    surname: String,
}

impl AuthorName {
    /// Parses a name, extracting its initial and surname.
    ///
    /// The initial is the first character of `raw` as given, whitespace
    /// included: `" J Smith"` has initial `' '` and matches nobody.
    ///
    /// # Errors
    /// - `EmptyName` if `raw` is empty.
    /// - `MissingSurname` if `raw` contains only whitespace.
    pub fn parse(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        let (Some(initial), Some(surname)) = (raw.chars().next(), last_token(&raw)) else {
            return Err(ValidationError::MissingSurname { name: raw });
        };
        let surname = surname.to_string();

        Ok(Self {
            raw,
            initial,
            surname,
        })
    }

    /// The name exactly as it appeared in the document.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// First character of the name.
    #[must_use]
    pub const fn initial(&self) -> char {
        self.initial
    }

    /// Last whitespace-delimited token of the name.
    #[must_use]
    pub fn surname(&self) -> &str {
        &self.surname
    }
}

/// Returns the last whitespace-delimited token of `text`, if any.
pub(crate) fn last_token(text: &str) -> Option<&str> {
    text.split_whitespace().next_back()
}

impl fmt::Display for AuthorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl TryFrom<String> for AuthorName {
    type Error = ValidationError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(raw)
    }
}

impl TryFrom<&str> for AuthorName {
    type Error = ValidationError;

    fn try_from(raw: &str) -> Result<Self, Self::Error> {
        Self::parse(raw)
    }
}

impl From<AuthorName> for String {
    fn from(name: AuthorName) -> Self {
        name.raw
    }
}
