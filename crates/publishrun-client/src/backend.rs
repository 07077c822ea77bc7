//! The seam between the publisher and the remote backend.

use async_trait::async_trait;
use publishrun_core::{Account, ContentPayload, CorrelationId, TaskStatus};

use crate::error::ClientError;

/// Raw `data` of a publish-create response.
pub type RemoteResult = serde_json::Value;

/// Remote operations the publisher needs.
///
/// Every call is a single attempt; implementations never retry.
#[async_trait]
pub trait PublishBackend: Send + Sync {
    /// List accounts linked to `key`. An empty list is a successful result.
    async fn list_accounts(&self, key: &str) -> Result<Vec<Account>, ClientError>;

    /// Publish `payload` to one account.
    ///
    /// Not idempotent: two calls with the same correlation id and account
    /// create two publish attempts.
    async fn create_publish(
        &self,
        key: &str,
        correlation_id: &CorrelationId,
        account_id: &str,
        payload: &ContentPayload,
    ) -> Result<RemoteResult, ClientError>;

    /// List task statuses recorded under `correlation_id`. Read-only.
    async fn list_tasks(
        &self,
        key: &str,
        correlation_id: &CorrelationId,
    ) -> Result<Vec<TaskStatus>, ClientError>;
}
