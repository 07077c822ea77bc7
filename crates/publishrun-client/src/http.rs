//! HTTP client for the publishing backend.

use async_trait::async_trait;
use publishrun_core::{Account, ContentPayload, CorrelationId, TaskStatus};
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::backend::{PublishBackend, RemoteResult};
use crate::envelope::Envelope;
use crate::error::ClientError;
use crate::wire::{AccountRecord, PublishRequest, TaskRecord};

/// Production backend.
pub const DEFAULT_BASE_URL: &str = "https://mcp.aitoearn.ai";

/// Header carrying the caller's opaque key.
pub const SK_KEY_HEADER: &str = "sk-key";

const ACCOUNT_LIST_PATH: &str = "/plugin/account/list";
const PUBLISH_CREATE_PATH: &str = "/plugin/publish/create";
const TASK_LIST_PATH: &str = "/plugin/publish/task/list";

/// HTTP client for the publishing backend.
#[derive(Debug, Clone)]
pub struct BackendClient {
    inner: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// Create a new client against `base_url`.
    pub fn new(base_url: &str) -> Self {
        Self {
            inner: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET with the JSON content type the backend expects on every call.
    fn get(&self, url: &str) -> RequestBuilder {
        self.inner
            .get(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
    }

    /// Send a request and unwrap the backend envelope.
    async fn send_envelope<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        key: &str,
        path: &str,
    ) -> Result<Option<T>, ClientError> {
        let response = request
            .header(SK_KEY_HEADER, key)
            .send()
            .await
            .map_err(|source| ClientError::Http {
                endpoint: path.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                endpoint: path.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|source| ClientError::Http {
            endpoint: path.to_string(),
            source,
        })?;

        let envelope: Envelope<T> =
            serde_json::from_slice(&body).map_err(|e| ClientError::Decode {
                endpoint: path.to_string(),
                detail: e.to_string(),
            })?;

        debug!(endpoint = path, code = envelope.code, "Backend responded");
        envelope.into_result()
    }
}

#[async_trait]
impl PublishBackend for BackendClient {
    async fn list_accounts(&self, key: &str) -> Result<Vec<Account>, ClientError> {
        let url = self.url(ACCOUNT_LIST_PATH);
        debug!(url = %url, "GET account list");

        let records: Option<Vec<AccountRecord>> = self
            .send_envelope(self.get(&url), key, ACCOUNT_LIST_PATH)
            .await?;

        Ok(records
            .unwrap_or_default()
            .into_iter()
            .map(Account::from)
            .collect())
    }

    async fn create_publish(
        &self,
        key: &str,
        correlation_id: &CorrelationId,
        account_id: &str,
        payload: &ContentPayload,
    ) -> Result<RemoteResult, ClientError> {
        let url = self.url(PUBLISH_CREATE_PATH);
        debug!(url = %url, correlation_id = %correlation_id, account_id, "POST publish");

        let body = PublishRequest::new(correlation_id, account_id, payload);
        let data: Option<RemoteResult> = self
            .send_envelope(self.inner.post(&url).json(&body), key, PUBLISH_CREATE_PATH)
            .await?;

        Ok(data.unwrap_or(RemoteResult::Null))
    }

    async fn list_tasks(
        &self,
        key: &str,
        correlation_id: &CorrelationId,
    ) -> Result<Vec<TaskStatus>, ClientError> {
        let url = self.url(TASK_LIST_PATH);
        debug!(url = %url, correlation_id = %correlation_id, "GET task list");

        let request = self
            .get(&url)
            .query(&[("flowId", correlation_id.as_str())]);
        let records: Option<Vec<TaskRecord>> =
            self.send_envelope(request, key, TASK_LIST_PATH).await?;

        Ok(records
            .unwrap_or_default()
            .into_iter()
            .map(TaskStatus::from)
            .collect())
    }
}
