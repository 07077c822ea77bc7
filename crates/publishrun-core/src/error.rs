//! Core domain errors.

use thiserror::Error;

/// Broad classification of a failure, so callers branch on kind rather than
/// on message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Payload rejected locally before any network call.
    Validation,
    /// Network or HTTP-level failure; no backend envelope was read.
    Transport,
    /// Backend envelope decoded with a non-zero code.
    Backend,
}

/// A content payload that must not reach the network layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A field required by the chosen content kind is empty or absent.
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
}

impl ValidationError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Validation
    }
}
