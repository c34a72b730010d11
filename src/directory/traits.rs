//! The surname lookup capability.
//!
//! The resolver is handed a [`SurnameLookup`] rather than holding a
//! directory client of its own. Any backend works: the in-memory reference
//! directory, a remote client, a closure in a test, or a caching decorator
//! wrapped around any of these.

use std::sync::Arc;

use crate::error::LookupFailure;
use crate::person::Person;

/// Query a directory for people whose name contains a surname.
///
/// # Contract
/// - Returns every candidate the directory considers a match; filtering on
///   initial and exact surname happens in the resolver.
/// - Must not mutate directory data.
/// - Failures are reported as [`LookupFailure`]; callers do not retry.
pub trait SurnameLookup: Send + Sync {
    /// Returns people whose display name contains `surname`.
    fn people_by_surname(&self, surname: &str) -> Result<Vec<Person>, LookupFailure>;
}

impl<T: SurnameLookup + ?Sized> SurnameLookup for &T {
    fn people_by_surname(&self, surname: &str) -> Result<Vec<Person>, LookupFailure> {
        (**self).people_by_surname(surname)
    }
}

impl<T: SurnameLookup + ?Sized> SurnameLookup for Arc<T> {
    fn people_by_surname(&self, surname: &str) -> Result<Vec<Person>, LookupFailure> {
        (**self).people_by_surname(surname)
    }
}

impl<T: SurnameLookup + ?Sized> SurnameLookup for Box<T> {
    fn people_by_surname(&self, surname: &str) -> Result<Vec<Person>, LookupFailure> {
        (**self).people_by_surname(surname)
    }
}

/// Wraps a closure as a lookup.
///
/// # Examples
///
/// ```
/// use authorgraph::{FnLookup, Person, SurnameLookup};
///
/// let lookup = FnLookup::new(|surname: &str| Ok(vec![Person::new(1, format!("Ann {surname}"))]));
/// assert_eq!(lookup.people_by_surname("Lee").unwrap()[0].name, "Ann Lee");
/// ```
pub struct FnLookup<F>(F);

impl<F> FnLookup<F>
where
    F: Fn(&str) -> Result<Vec<Person>, LookupFailure> + Send + Sync,
{
    /// Wraps `f`.
    pub const fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> SurnameLookup for FnLookup<F>
where
    F: Fn(&str) -> Result<Vec<Person>, LookupFailure> + Send + Sync,
{
    fn people_by_surname(&self, surname: &str) -> Result<Vec<Person>, LookupFailure> {
        (self.0)(surname)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Compile-time test: ensure the trait is object-safe
    fn _assert_surname_lookup_object_safe(_: &dyn SurnameLookup) {}

    #[test]
    fn test_fn_lookup_forwards_errors() {
        let lookup = FnLookup::new(|_: &str| Err(LookupFailure::Connection("down".to_string())));
        let err = lookup.people_by_surname("Lee").unwrap_err();
        assert!(err.is_retryable());
    }

    #[test]
    fn test_arc_and_box_forward() {
        let lookup: Arc<dyn SurnameLookup> =
            Arc::new(FnLookup::new(|s: &str| Ok(vec![Person::new(3, s.to_string())])));
        assert_eq!(lookup.people_by_surname("Xu").unwrap().len(), 1);

        let boxed: Box<dyn SurnameLookup> = Box::new(FnLookup::new(|_: &str| Ok(Vec::new())));
        assert!(boxed.people_by_surname("Xu").unwrap().is_empty());
    }
}
