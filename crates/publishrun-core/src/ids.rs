//! Correlation identifiers shared by every publish request of one operation.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// What kind of publish operation a correlation id was allocated for.
///
/// The prefix only helps humans reading logs; the backend treats the whole
/// id as opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationScope {
    /// One payload published to one explicitly named account.
    Single,
    /// One payload fanned out to every account linked to a key.
    Batch,
}

impl OperationScope {
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Single => "mcp_",
            Self::Batch => "mcp_batch_",
        }
    }
}

/// Tracking token ("flowId") grouping all publish attempts of one operation.
///
/// Allocated once per operation, never per account: every account in a
/// batch shares the same id so a single task-status query covers the batch.
/// It is a tracking key, not a deduplication key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CorrelationId(String);

impl CorrelationId {
    /// Create a CorrelationId from an existing string (e.g. one supplied by a caller).
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Allocate a fresh, globally unique id for a new operation.
    pub fn allocate(scope: OperationScope) -> Self {
        Self(format!("{}{}", scope.prefix(), Uuid::new_v4()))
    }

    /// Get the inner string reference.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for CorrelationId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for CorrelationId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_allocate_is_unique() {
        let ids: HashSet<_> = (0..1000)
            .map(|_| CorrelationId::allocate(OperationScope::Batch))
            .collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_scope_prefix() {
        let single = CorrelationId::allocate(OperationScope::Single);
        let batch = CorrelationId::allocate(OperationScope::Batch);

        assert!(single.as_str().starts_with("mcp_"));
        assert!(!single.as_str().starts_with("mcp_batch_"));
        assert!(batch.as_str().starts_with("mcp_batch_"));
    }

    #[test]
    fn test_id_display() {
        let id = CorrelationId::new("mcp_test-123");
        assert_eq!(format!("{}", id), "mcp_test-123");
    }
}
