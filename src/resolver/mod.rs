//! Author name resolution.
//!
//! Matches a free-text author name against directory people sharing its
//! surname. A candidate matches when its initial (after any honorific) and
//! its last name token both equal the author's, exactly. Then:
//!
//! - no match: a [`SyntheticIdentity`] is derived from the name and a
//!   `MissingAuthor` diagnostic is emitted;
//! - one match: that person;
//! - several: an `AmbiguousAuthor` diagnostic lists them all and the
//!   configured [`TieBreakPolicy`] picks one.
//!
//! Exactly one lookup is made per call. Lookup failures are returned to the
//! caller unchanged.

mod policy;

use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::config::ResolverConfig;
use crate::diagnostics::{Diagnostic, DiagnosticSink, TracingSink};
use crate::directory::SurnameLookup;
use crate::error::{ResolveResult, ValidationError};
use crate::honorific::Honorifics;
use crate::identity::{ResolvedIdentity, SyntheticIdentity};
use crate::name::AuthorName;
use crate::person::Person;

pub use policy::{apply_tie_break, TieBreakPolicy};

/// Keep the candidates whose effective initial and surname equal `name`'s.
///
/// Order of `candidates` is preserved.
#[must_use]
pub fn matching_candidates(
    name: &AuthorName,
    candidates: Vec<Person>,
    honorifics: &Honorifics,
) -> Vec<Person> {
    candidates
        .into_iter()
        .filter(|c| {
            honorifics.effective_initial(&c.name) == Some(name.initial())
                && honorifics.effective_surname(&c.name) == Some(name.surname())
        })
        .collect()
}

/// Resolves author names through an injected [`SurnameLookup`].
///
/// # Examples
///
/// ```
/// use authorgraph::{InMemoryDirectory, NameResolver, Person};
///
/// let directory = InMemoryDirectory::from_people(vec![Person::new(1, "Dr. Jane Smith")]).unwrap();
/// let resolver = NameResolver::new(directory);
/// let identity = resolver.resolve_str("J Smith", "RFC0001").unwrap();
/// assert_eq!(identity.display_name(), "Dr. Jane Smith");
/// ```
pub struct NameResolver<L, S = TracingSink> {
    lookup: L,
    sink: S,
    honorifics: Honorifics,
    synthetic_marker: String,
    tie_break: TieBreakPolicy,
    rng: Mutex<StdRng>,
}

impl<L: SurnameLookup> NameResolver<L> {
    /// Resolver with default configuration, logging diagnostics via tracing.
    pub fn new(lookup: L) -> Self {
        Self::build(lookup, TracingSink, ResolverConfig::default())
    }
}

impl<L: SurnameLookup, S: DiagnosticSink> NameResolver<L, S> {
    /// Resolver with an explicit sink and configuration.
    ///
    /// # Errors
    /// `InvalidConfig` if `config` fails validation.
    pub fn with_config(lookup: L, sink: S, config: ResolverConfig) -> Result<Self, ValidationError> {
        config.validate()?;
        Ok(Self::build(lookup, sink, config))
    }

    fn build(lookup: L, sink: S, config: ResolverConfig) -> Self {
        let rng = config
            .seed
            .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        Self {
            lookup,
            sink,
            honorifics: config.honorifics,
            synthetic_marker: config.synthetic_marker,
            tie_break: config.tie_break,
            rng: Mutex::new(rng),
        }
    }

    /// Replaces the diagnostic sink.
    pub fn with_sink<S2: DiagnosticSink>(self, sink: S2) -> NameResolver<L, S2> {
        NameResolver {
            lookup: self.lookup,
            sink,
            honorifics: self.honorifics,
            synthetic_marker: self.synthetic_marker,
            tie_break: self.tie_break,
            rng: self.rng,
        }
    }

    /// The injected lookup.
    pub const fn lookup(&self) -> &L {
        &self.lookup
    }

    /// The diagnostic sink.
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// The active tie-break policy.
    pub const fn tie_break(&self) -> TieBreakPolicy {
        self.tie_break
    }

    /// Resolve one author name. `document` identifies where the name was
    /// found and only appears in diagnostics.
    ///
    /// Always yields exactly one identity when the lookup succeeds.
    ///
    /// # Errors
    /// `Lookup` if the directory query fails.
    pub fn resolve(&self, name: &AuthorName, document: &str) -> ResolveResult<ResolvedIdentity> {
        let candidates = self.lookup.people_by_surname(name.surname())?;
        debug!(
            author = name.as_str(),
            surname = name.surname(),
            candidates = candidates.len(),
            "surname lookup"
        );

        let mut matches = matching_candidates(name, candidates, &self.honorifics);
        match matches.len() {
            0 => {
                self.sink.emit(&Diagnostic::MissingAuthor {
                    name: name.as_str().to_string(),
                    document: document.to_string(),
                });
                Ok(ResolvedIdentity::Synthetic(SyntheticIdentity::from_name(
                    name,
                    &self.synthetic_marker,
                )))
            }
            1 => {
                let person = matches.swap_remove(0);
                debug!(author = name.as_str(), person = %person.id, "unambiguous match");
                Ok(ResolvedIdentity::Directory(person))
            }
            _ => {
                self.sink.emit(&Diagnostic::AmbiguousAuthor {
                    name: name.as_str().to_string(),
                    document: document.to_string(),
                    candidates: matches.clone(),
                });
                let index = self.pick(&matches);
                let person = matches.swap_remove(index);
                debug!(
                    author = name.as_str(),
                    person = %person.id,
                    policy = self.tie_break.name(),
                    "ambiguous match resolved by tie-break"
                );
                Ok(ResolvedIdentity::Directory(person))
            }
        }
    }

    /// Parse `raw` and resolve it.
    ///
    /// # Errors
    /// `Validation` if `raw` is not a usable name, `Lookup` as for
    /// [`Self::resolve`].
    pub fn resolve_str(&self, raw: &str, document: &str) -> ResolveResult<ResolvedIdentity> {
        let name = AuthorName::parse(raw)?;
        self.resolve(&name, document)
    }

    /// Index of the tie-break winner in a set of two or more candidates.
    fn pick(&self, matches: &[Person]) -> usize {
        // The RNG holds no invariant a panic elsewhere could break.
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        apply_tie_break(self.tie_break, matches, &mut *rng)
            .and_then(|winner| matches.iter().position(|p| std::ptr::eq(p, winner)))
            .unwrap_or(0)
    }
}

impl<L, S> std::fmt::Debug for NameResolver<L, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NameResolver")
            .field("honorifics", &self.honorifics)
            .field("synthetic_marker", &self.synthetic_marker)
            .field("tie_break", &self.tie_break)
            .finish_non_exhaustive()
    }
}
