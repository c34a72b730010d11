//! Directory person records.
//!
//! A [`Person`] is owned by the directory service. The resolver only reads
//! them; it never creates or edits one.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable directory identifier for a person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(u64);

impl PersonId {
    /// Wraps a raw directory identifier.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for PersonId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// A candidate record returned by a surname lookup.
///
/// # Examples
///
/// ```
/// use authorgraph::Person;
///
/// let p = Person::new(20209, "Dr. Jane Smith").with_affiliation("Example Labs");
/// assert_eq!(p.id.get(), 20209);
/// assert_eq!(p.affiliation.as_deref(), Some("Example Labs"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    /// Directory identifier.
    pub id: PersonId,

    /// Display name, possibly carrying an honorific such as `"Dr. "`.
    pub name: String,

    /// Organisation the person belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affiliation: Option<String>,
}

impl Person {
    /// Creates a person with no affiliation.
    #[must_use]
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id: PersonId::new(id),
            name: name.into(),
            affiliation: None,
        }
    }

    /// Sets the affiliation.
    #[must_use]
    pub fn with_affiliation(mut self, affiliation: impl Into<String>) -> Self {
        self.affiliation = Some(affiliation.into());
        self
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.id, self.name)
    }
}

// Directory records are identified by id alone.
impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Person {}

impl std::hash::Hash for Person {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_equality_by_id() {
        let a = Person::new(7, "Alice Lee");
        let b = Person::new(7, "A. Lee").with_affiliation("Elsewhere");
        assert_eq!(a, b);
        assert_ne!(a, Person::new(8, "Alice Lee"));
    }

    #[test]
    fn test_person_display() {
        assert_eq!(Person::new(42, "Bob Lee").to_string(), "42 Bob Lee");
    }

    #[test]
    fn test_person_serialization_skips_empty_fields() {
        let json = serde_json::to_string(&Person::new(1, "Amy Lee")).unwrap();
        assert_eq!(json, r#"{"id":1,"name":"Amy Lee"}"#);

        let back: Person = serde_json::from_str(
            r#"{"id":1,"name":"Amy Lee","affiliation":"X","resource_uri":"/api/v1/person/1/"}"#,
        )
        .unwrap();
        assert_eq!(back.affiliation.as_deref(), Some("X"));
        assert_eq!(serde_json::to_string(&back).unwrap(), r#"{"id":1,"name":"Amy Lee","affiliation":"X"}"#);
    }
}
