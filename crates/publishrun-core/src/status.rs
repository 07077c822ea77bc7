//! Publish task status as reported by the backend.

use serde::{Deserialize, Serialize};

/// State of one account's publish task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskState {
    Success,
    Failed,
    InProgress,
}

impl TaskState {
    /// Map the backend's numeric status: `1` succeeded, `-1` failed,
    /// anything else is still running.
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => Self::Success,
            -1 => Self::Failed,
            _ => Self::InProgress,
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Success => "succeeded",
            Self::Failed => "failed",
            Self::InProgress => "in progress",
        }
    }
}

/// Read model for one account's task under a correlation id.
///
/// Fetched on demand and never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskStatus {
    pub account_id: String,
    pub state: TaskState,
    pub error_message: Option<String>,
}
