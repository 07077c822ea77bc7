//! Publisher - validates payloads and fans them out to accounts.

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use publishrun_client::{ClientError, PublishBackend, RemoteResult};
use publishrun_core::{
    Account, AccountOutcome, BatchResult, BatchSummary, ContentPayload, CorrelationId, ErrorKind,
    OperationScope, PublishOperation, TaskStatus, ValidationError,
};

/// Failures that abort a publish operation before any per-account work.
#[derive(Debug, Error)]
pub enum PublishError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("unable to retrieve accounts: {0}")]
    Discovery(#[source] ClientError),

    #[error("{0}")]
    Publish(#[source] ClientError),
}

impl PublishError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(e) => e.kind(),
            Self::Discovery(e) | Self::Publish(e) => e.kind(),
        }
    }
}

/// Result of publishing to one explicitly named account.
#[derive(Debug, Clone)]
pub struct SinglePublish {
    pub correlation_id: CorrelationId,
    pub result: RemoteResult,
}

/// Publisher over a remote backend.
#[derive(Clone)]
pub struct Publisher {
    backend: Arc<dyn PublishBackend>,
}

impl Publisher {
    /// Create a new Publisher.
    pub fn new(backend: Arc<dyn PublishBackend>) -> Self {
        Self { backend }
    }

    /// List accounts linked to `key`.
    pub async fn list_accounts(&self, key: &str) -> Result<Vec<Account>, ClientError> {
        self.backend.list_accounts(key).await
    }

    /// Fetch task statuses recorded under `correlation_id`.
    pub async fn list_tasks(
        &self,
        key: &str,
        correlation_id: &CorrelationId,
    ) -> Result<Vec<TaskStatus>, ClientError> {
        self.backend.list_tasks(key, correlation_id).await
    }

    /// Validate and publish to a single account under a fresh correlation id.
    pub async fn publish_one(
        &self,
        key: &str,
        account_id: &str,
        payload: ContentPayload,
    ) -> Result<SinglePublish, PublishError> {
        payload.validate()?;

        let correlation_id = CorrelationId::allocate(OperationScope::Single);
        let result = self
            .backend
            .create_publish(key, &correlation_id, account_id, &payload)
            .await
            .map_err(PublishError::Publish)?;

        info!(correlation_id = %correlation_id, account_id, "Published to account");

        Ok(SinglePublish {
            correlation_id,
            result,
        })
    }

    /// Validate `payload` once, then publish it to every account linked to `key`.
    ///
    /// Accounts are processed one at a time in discovery order, with at most
    /// one publish call in flight. A failed account is recorded and the loop
    /// moves on; only validation and discovery failures abort.
    pub async fn publish_to_all(
        &self,
        key: &str,
        payload: ContentPayload,
    ) -> Result<BatchResult, PublishError> {
        payload.validate()?;

        let accounts = self
            .backend
            .list_accounts(key)
            .await
            .map_err(PublishError::Discovery)?;

        if accounts.is_empty() {
            info!("No accounts linked to key, nothing to publish");
            return Ok(BatchResult::NoAccounts);
        }

        let operation = PublishOperation::new(OperationScope::Batch, payload, accounts);
        info!(
            correlation_id = %operation.correlation_id,
            account_count = operation.targets.len(),
            kind = %operation.payload.kind,
            "Starting batch publication"
        );

        let mut outcomes = Vec::with_capacity(operation.targets.len());
        for account in operation.targets {
            match self
                .backend
                .create_publish(key, &operation.correlation_id, &account.id, &operation.payload)
                .await
            {
                Ok(_) => {
                    info!(
                        correlation_id = %operation.correlation_id,
                        account_id = %account.id,
                        account_type = %account.account_type,
                        "Published to account"
                    );
                    outcomes.push(AccountOutcome::success(account));
                }
                Err(e) => {
                    warn!(
                        correlation_id = %operation.correlation_id,
                        account_id = %account.id,
                        account_type = %account.account_type,
                        error = %e,
                        "Failed to publish to account"
                    );
                    outcomes.push(AccountOutcome::failure(account, e.to_string()));
                }
            }
        }

        let summary = BatchSummary::new(operation.correlation_id, outcomes);
        info!(
            correlation_id = %summary.correlation_id,
            success = summary.success_count,
            failed = summary.failure_count,
            "Batch publication completed"
        );

        Ok(BatchResult::Completed(summary))
    }
}
