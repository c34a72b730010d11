//! Directory collaborators.
//!
//! The [`SurnameLookup`] trait is the only thing the resolver needs from a
//! directory service. This module also ships an in-memory backend and a
//! memoizing decorator.

mod cached;
mod memory;
mod traits;

pub use cached::CachedLookup;
pub use memory::InMemoryDirectory;
pub use traits::{FnLookup, SurnameLookup};
