//! Error types for the backend client.

use publishrun_core::ErrorKind;
use thiserror::Error;

/// Errors that can occur when calling the publishing backend.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Request could not be sent or the response body could not be read.
    #[error("request to {endpoint} failed: {source}")]
    Http {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// Non-success HTTP status; no envelope was read.
    #[error("HTTP {status} from {endpoint}")]
    Status { endpoint: String, status: u16 },

    /// Response body was not a valid envelope.
    #[error("invalid response from {endpoint}: {detail}")]
    Decode { endpoint: String, detail: String },

    /// Envelope decoded with a non-zero code.
    #[error("backend error {code}: {message}")]
    Backend { code: i64, message: String },
}

impl ClientError {
    /// Classify this error as a transport or backend failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Http { .. } | Self::Status { .. } | Self::Decode { .. } => ErrorKind::Transport,
            Self::Backend { .. } => ErrorKind::Backend,
        }
    }
}
