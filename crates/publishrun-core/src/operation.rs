//! A single publish operation over a fixed set of targets.

use crate::{Account, ContentPayload, CorrelationId, OperationScope};

/// One payload bound to its targets under one correlation id.
///
/// Lives only for the duration of one tool call. The correlation id is
/// allocated at construction and shared by every target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishOperation {
    pub correlation_id: CorrelationId,
    pub payload: ContentPayload,
    /// Publish order; duplicates are kept.
    pub targets: Vec<Account>,
}

impl PublishOperation {
    /// Start an operation, allocating its correlation id.
    pub fn new(scope: OperationScope, payload: ContentPayload, targets: Vec<Account>) -> Self {
        Self {
            correlation_id: CorrelationId::allocate(scope),
            payload,
            targets,
        }
    }
}
