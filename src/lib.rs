//! # authorgraph - Author identity resolution
//!
//! authorgraph matches author names printed in documents (`"J. Smith"`)
//! against person records in a directory service, and builds co-authorship
//! graphs from the result.
//!
//! ## Core Concepts
//!
//! - **AuthorName**: a document's author text, reduced to an initial and a surname
//! - **SurnameLookup**: the injected directory capability, queried once per name
//! - **ResolvedIdentity**: exactly one per name, a directory person or a synthetic fallback
//! - **Diagnostics**: advisory reports for unmatched, ambiguous and unparseable names
//!
//! ## Usage
//!
//! ```rust
//! use authorgraph::{Document, GraphBuilder, InMemoryDirectory, NameResolver, Person};
//!
//! let directory = InMemoryDirectory::from_people(vec![
//!     Person::new(1, "Dr. Jane Smith"),
//!     Person::new(2, "Bob Lee"),
//! ])?;
//! let resolver = NameResolver::new(directory);
//!
//! let mut builder = GraphBuilder::new(&resolver);
//! builder.add_document(&Document::new("RFC9999", ["J. Smith", "B. Lee", "Z. Xu"]))?;
//! let graph = builder.finish();
//! assert_eq!(graph.nodes().len(), 3);
//! # Ok::<(), authorgraph::ResolveError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod diagnostics;
pub mod directory;
pub mod error;
pub mod graph;
pub mod honorific;
pub mod identity;
pub mod name;
pub mod person;
pub mod resolver;

// Re-export primary types at crate root for convenience
pub use config::ResolverConfig;
pub use diagnostics::{Diagnostic, DiagnosticRecord, DiagnosticSink, MemorySink, TracingSink};
pub use directory::{CachedLookup, FnLookup, InMemoryDirectory, SurnameLookup};
pub use error::{LookupFailure, ResolveError, ResolveResult, ValidationError};
pub use graph::{CoauthorGraph, Document, Edge, GraphBuilder, Node};
pub use honorific::Honorifics;
pub use identity::{IdentityKey, ResolvedIdentity, SyntheticId, SyntheticIdentity};
pub use name::AuthorName;
pub use person::{Person, PersonId};
pub use resolver::{matching_candidates, NameResolver, TieBreakPolicy};
