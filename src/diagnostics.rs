//! Advisory diagnostics emitted during resolution.
//!
//! Unmatched and ambiguous names are reported here so a human can audit or
//! correct them later. Diagnostics never change control flow.

use std::fmt;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::person::Person;

/// A resolution outcome worth a human's attention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Diagnostic {
    /// No directory person matched; a synthetic identity was used.
    MissingAuthor {
        name: String,
        document: String,
    },

    /// Several directory people matched; one was picked by tie-break.
    AmbiguousAuthor {
        name: String,
        document: String,
        candidates: Vec<Person>,
    },

    /// The author text could not be parsed as a name and was skipped.
    InvalidAuthor {
        name: String,
        document: String,
        reason: String,
    },
}

impl Diagnostic {
    /// The author name the diagnostic is about.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::MissingAuthor { name, .. }
            | Self::AmbiguousAuthor { name, .. }
            | Self::InvalidAuthor { name, .. } => name,
        }
    }

    /// The source document identifier.
    #[must_use]
    pub fn document(&self) -> &str {
        match self {
            Self::MissingAuthor { document, .. }
            | Self::AmbiguousAuthor { document, .. }
            | Self::InvalidAuthor { document, .. } => document,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingAuthor { name, document } => {
                write!(f, "Missing author {name} for {document}")
            }
            Self::AmbiguousAuthor {
                name,
                document,
                candidates,
            } => {
                write!(f, "Matches for {name} in {document}: [")?;
                for (i, candidate) in candidates.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{candidate}")?;
                }
                f.write_str("]")
            }
            Self::InvalidAuthor {
                name,
                document,
                reason,
            } => write!(f, "Skipped author {name:?} in {document}: {reason}"),
        }
    }
}

/// Append-only destination for diagnostics.
///
/// Takes `&self` so one sink can be shared by resolvers on several threads;
/// implementations must tolerate interleaved calls.
pub trait DiagnosticSink: Send + Sync {
    /// Records one diagnostic.
    fn emit(&self, diagnostic: &Diagnostic);
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for &T {
    fn emit(&self, diagnostic: &Diagnostic) {
        (**self).emit(diagnostic);
    }
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for std::sync::Arc<T> {
    fn emit(&self, diagnostic: &Diagnostic) {
        (**self).emit(diagnostic);
    }
}

/// Forwards diagnostics to `tracing` at WARN level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, diagnostic: &Diagnostic) {
        warn!(
            author = diagnostic.name(),
            document = diagnostic.document(),
            "{diagnostic}"
        );
    }
}

/// A diagnostic with the time it was emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticRecord {
    /// Wall-clock time of the `emit` call.
    pub emitted_at: DateTime<Utc>,
    /// The diagnostic as emitted.
    pub diagnostic: Diagnostic,
}

/// Keeps diagnostics in memory for later audit.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<DiagnosticRecord>>,
}

impl MemorySink {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies out every record emitted so far.
    #[must_use]
    pub fn snapshot(&self) -> Vec<DiagnosticRecord> {
        self.records
            .lock()
            .map(|records| records.clone())
            .unwrap_or_default()
    }

    /// Removes and returns every record emitted so far.
    pub fn drain(&self) -> Vec<DiagnosticRecord> {
        self.records
            .lock()
            .map(|mut records| std::mem::take(&mut *records))
            .unwrap_or_default()
    }

    /// Number of records held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.lock().map(|records| records.len()).unwrap_or(0)
    }

    /// Returns true if nothing has been emitted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DiagnosticSink for MemorySink {
    fn emit(&self, diagnostic: &Diagnostic) {
        // A poisoned sink drops the record; diagnostics must never abort resolution.
        if let Ok(mut records) = self.records.lock() {
            records.push(DiagnosticRecord {
                emitted_at: Utc::now(),
                diagnostic: diagnostic.clone(),
            });
        }
    }
}
