//! Error types for authorgraph.
//!
//! All errors are strongly typed using thiserror. Note that a name with no
//! directory match, or with several, is *not* an error: both outcomes resolve
//! to exactly one identity and are reported through diagnostics instead.

use thiserror::Error;

/// Validation errors that occur during input validation.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Author name cannot be empty")]
    EmptyName,

    #[error("Author name '{name}' has no surname token")]
    MissingSurname {
        name: String,
    },

    #[error("Invalid resolver configuration: {reason}")]
    InvalidConfig {
        reason: String,
    },
}

/// Failure reported by the directory collaborator behind a surname lookup.
///
/// The resolver never retries or hides these; retry policy belongs to
/// whoever owns the directory client.
#[derive(Debug, Error)]
pub enum LookupFailure {
    /// Backend error.
    #[error("Directory backend error: {0}")]
    Backend(String),

    /// Connection failed.
    #[error("Directory connection error: {0}")]
    Connection(String),

    /// Directory payload could not be decoded.
    #[error("Directory serialization error: {0}")]
    Serialization(String),
}

impl LookupFailure {
    /// Returns true if the failure may go away on retry.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Connection(_))
    }
}

/// Top-level error type for authorgraph.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Lookup failure: {0}")]
    Lookup(#[from] LookupFailure),

    #[error("I/O error on {path}: {message}")]
    Io {
        path: String,
        message: String,
    },
}

impl ResolveError {
    /// Creates an I/O error for `path`.
    #[must_use]
    pub fn io(path: impl Into<String>, err: &std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }

    /// Returns true if this is a validation error.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns true if the directory lookup itself failed.
    #[must_use]
    pub const fn is_lookup_failure(&self) -> bool {
        matches!(self, Self::Lookup(_))
    }
}

/// Result type alias for authorgraph operations.
pub type ResolveResult<T> = Result<T, ResolveError>;
