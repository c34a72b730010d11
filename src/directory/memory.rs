//! In-memory directory backend.
//!
//! Thread-safe reference implementation of [`SurnameLookup`], used by the
//! CLI (loaded from a JSON snapshot), by tests, and for embedded use.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::RwLock;

use tracing::debug;

use crate::directory::traits::SurnameLookup;
use crate::error::{LookupFailure, ResolveError, ResolveResult};
use crate::person::{Person, PersonId};

fn lock_err(context: &'static str) -> LookupFailure {
    LookupFailure::Backend(format!("poisoned lock: {context}"))
}

#[derive(Debug, Default)]
struct DirectoryState {
    by_id: BTreeMap<PersonId, Person>,
}

/// Thread-safe in-memory person directory.
///
/// Lookups match any person whose display name *contains* the query,
/// case-sensitively, mirroring a `name_contains` directory query. Results
/// are ordered by id.
#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    state: RwLock<DirectoryState>,
}

impl InMemoryDirectory {
    /// Create a new empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a directory from a list of people.
    ///
    /// # Errors
    /// Returns `Backend` if two people share an id.
    pub fn from_people(people: impl IntoIterator<Item = Person>) -> Result<Self, LookupFailure> {
        let directory = Self::new();
        for person in people {
            directory.insert(person)?;
        }
        Ok(directory)
    }

    /// Parses a JSON array of people.
    ///
    /// # Errors
    /// `Serialization` on malformed JSON, `Backend` on duplicate ids.
    pub fn from_json_str(json: &str) -> Result<Self, LookupFailure> {
        let people: Vec<Person> =
            serde_json::from_str(json).map_err(|e| LookupFailure::Serialization(e.to_string()))?;
        Self::from_people(people)
    }

    /// Loads a JSON snapshot from disk.
    ///
    /// # Errors
    /// `Io` if the file cannot be read, otherwise as [`Self::from_json_str`].
    pub fn from_path(path: impl AsRef<Path>) -> ResolveResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| ResolveError::io(path.display().to_string(), &e))?;
        let directory = Self::from_json_str(&json)?;
        debug!(path = %path.display(), people = directory.len(), "loaded directory snapshot");
        Ok(directory)
    }

    /// Insert a person. Returns error if the id already exists.
    pub fn insert(&self, person: Person) -> Result<(), LookupFailure> {
        let mut state = self.state.write().map_err(|_| lock_err("directory.insert"))?;
        if state.by_id.contains_key(&person.id) {
            return Err(LookupFailure::Backend(format!("duplicate person id: {}", person.id)));
        }
        state.by_id.insert(person.id, person);
        Ok(())
    }

    /// Get a person by id.
    pub fn get(&self, id: PersonId) -> Result<Option<Person>, LookupFailure> {
        let state = self.state.read().map_err(|_| lock_err("directory.get"))?;
        Ok(state.by_id.get(&id).cloned())
    }

    /// Remove a person, returning the removed record.
    pub fn remove(&self, id: PersonId) -> Result<Option<Person>, LookupFailure> {
        let mut state = self.state.write().map_err(|_| lock_err("directory.remove"))?;
        Ok(state.by_id.remove(&id))
    }

    /// Number of people held. A poisoned lock reads as empty.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.read().map(|s| s.by_id.len()).unwrap_or(0)
    }

    /// Returns true if the directory holds nobody.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SurnameLookup for InMemoryDirectory {
    fn people_by_surname(&self, surname: &str) -> Result<Vec<Person>, LookupFailure> {
        let state = self
            .state
            .read()
            .map_err(|_| lock_err("directory.people_by_surname"))?;
        Ok(state
            .by_id
            .values()
            .filter(|p| p.name.contains(surname))
            .cloned()
            .collect())
    }
}
