//! Memoizing lookup decorator.
//!
//! The resolver performs one lookup per author and keeps nothing between
//! calls. Batch jobs that see the same surname many times wrap their lookup
//! in [`CachedLookup`] instead.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use tracing::trace;

use crate::directory::traits::SurnameLookup;
use crate::error::LookupFailure;
use crate::person::Person;

fn lock_err(context: &'static str) -> LookupFailure {
    LookupFailure::Backend(format!("poisoned lock: {context}"))
}

/// Caches successful lookups by surname.
///
/// Empty results are cached like any other. Failures pass through untouched
/// and are not remembered, so the next call queries the inner lookup again.
#[derive(Debug)]
pub struct CachedLookup<L> {
    inner: L,
    cache: RwLock<HashMap<String, Vec<Person>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl<L: SurnameLookup> CachedLookup<L> {
    /// Wraps `inner`.
    pub fn new(inner: L) -> Self {
        Self {
            inner,
            cache: RwLock::new(HashMap::new()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Number of lookups answered from the cache.
    #[must_use]
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Number of lookups forwarded to the inner lookup.
    #[must_use]
    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    /// Drops every cached entry.
    pub fn clear(&self) -> Result<(), LookupFailure> {
        self.cache.write().map_err(|_| lock_err("cache.clear"))?.clear();
        Ok(())
    }
}

impl<L: SurnameLookup> SurnameLookup for CachedLookup<L> {
    fn people_by_surname(&self, surname: &str) -> Result<Vec<Person>, LookupFailure> {
        {
            let cache = self.cache.read().map_err(|_| lock_err("cache.read"))?;
            if let Some(people) = cache.get(surname) {
                self.hits.fetch_add(1, Ordering::Relaxed);
                trace!(surname, "surname cache hit");
                return Ok(people.clone());
            }
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let people = self.inner.people_by_surname(surname)?;
        self.cache
            .write()
            .map_err(|_| lock_err("cache.write"))?
            .insert(surname.to_string(), people.clone());
        Ok(people)
    }
}
