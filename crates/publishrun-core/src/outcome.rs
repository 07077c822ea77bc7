//! Per-account outcomes and aggregated batch results.

use serde::{Deserialize, Serialize};

use crate::{Account, CorrelationId};

/// Result of publishing to one account during a fan-out.
///
/// Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountOutcome {
    pub account: Account,
    pub succeeded: bool,
    /// Error message if the publish call failed.
    pub error_detail: Option<String>,
}

impl AccountOutcome {
    /// Record a successful publish.
    pub fn success(account: Account) -> Self {
        Self {
            account,
            succeeded: true,
            error_detail: None,
        }
    }

    /// Record a failed publish.
    pub fn failure(account: Account, error: impl Into<String>) -> Self {
        Self {
            account,
            succeeded: false,
            error_detail: Some(error.into()),
        }
    }
}

/// Outcomes of a fan-out that reached at least one account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Shared by every publish request in the batch.
    pub correlation_id: CorrelationId,

    /// One outcome per discovered account, in discovery order.
    pub outcomes: Vec<AccountOutcome>,

    pub success_count: usize,
    pub failure_count: usize,
}

impl BatchSummary {
    /// Tally outcomes into a summary.
    pub fn new(correlation_id: CorrelationId, outcomes: Vec<AccountOutcome>) -> Self {
        let success_count = outcomes.iter().filter(|o| o.succeeded).count();
        let failure_count = outcomes.len() - success_count;
        Self {
            correlation_id,
            outcomes,
            success_count,
            failure_count,
        }
    }

    /// Number of accounts discovered for the batch.
    pub fn account_count(&self) -> usize {
        self.outcomes.len()
    }

    /// Returns true if at least one account failed.
    pub fn has_failures(&self) -> bool {
        self.failure_count > 0
    }
}

/// Terminal result of a fan-out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BatchResult {
    /// Discovery succeeded but the key has no linked accounts.
    NoAccounts,
    /// Every discovered account was attempted.
    Completed(BatchSummary),
}

impl BatchResult {
    pub fn success_count(&self) -> usize {
        match self {
            Self::NoAccounts => 0,
            Self::Completed(summary) => summary.success_count,
        }
    }

    pub fn failure_count(&self) -> usize {
        match self {
            Self::NoAccounts => 0,
            Self::Completed(summary) => summary.failure_count,
        }
    }

    pub fn outcomes(&self) -> &[AccountOutcome] {
        match self {
            Self::NoAccounts => &[],
            Self::Completed(summary) => &summary.outcomes,
        }
    }

    pub fn correlation_id(&self) -> Option<&CorrelationId> {
        match self {
            Self::NoAccounts => None,
            Self::Completed(summary) => Some(&summary.correlation_id),
        }
    }
}
