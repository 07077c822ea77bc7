//! The backend's `{code, message, data}` response wrapper.

use serde::Deserialize;

use crate::error::ClientError;

/// Response envelope. `code == 0` means success.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub code: i64,

    /// Absent or `null` on some responses.
    #[serde(default)]
    pub message: Option<String>,

    /// Absent or `null` on some success responses.
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Unwrap the payload, turning a non-zero code into a backend error.
    pub fn into_result(self) -> Result<Option<T>, ClientError> {
        if self.code != 0 {
            return Err(ClientError::Backend {
                code: self.code,
                message: self.message.unwrap_or_default(),
            });
        }
        Ok(self.data)
    }
}
