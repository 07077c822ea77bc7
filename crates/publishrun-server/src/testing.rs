//! In-memory backend for tests.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use publishrun_client::{ClientError, PublishBackend, RemoteResult};
use publishrun_core::{Account, ContentPayload, CorrelationId, TaskStatus};
use serde_json::json;

/// What the stub answers to account discovery.
pub enum AccountsReply {
    Accounts(Vec<Account>),
    TransportFailure,
    BackendFailure(i64, String),
}

/// One recorded publish call.
#[derive(Debug, Clone)]
pub struct PublishCall {
    pub correlation_id: CorrelationId,
    pub account_id: String,
    pub payload: ContentPayload,
}

/// Backend stub that records every call.
pub struct StubBackend {
    accounts: AccountsReply,
    failing: HashSet<String>,
    tasks: Vec<TaskStatus>,
    publish_calls: Mutex<Vec<PublishCall>>,
    list_account_calls: Mutex<usize>,
    list_task_calls: Mutex<usize>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl StubBackend {
    pub fn new(accounts: AccountsReply) -> Self {
        Self {
            accounts,
            failing: HashSet::new(),
            tasks: Vec::new(),
            publish_calls: Mutex::new(Vec::new()),
            list_account_calls: Mutex::new(0),
            list_task_calls: Mutex::new(0),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }

    pub fn with_accounts(accounts: Vec<Account>) -> Self {
        Self::new(AccountsReply::Accounts(accounts))
    }

    /// Make publishing to `account_id` fail with a backend error.
    pub fn failing_on(mut self, account_id: &str) -> Self {
        self.failing.insert(account_id.to_string());
        self
    }

    pub fn with_tasks(mut self, tasks: Vec<TaskStatus>) -> Self {
        self.tasks = tasks;
        self
    }

    pub fn publish_calls(&self) -> Vec<PublishCall> {
        self.publish_calls.lock().unwrap().clone()
    }

    pub fn list_account_calls(&self) -> usize {
        *self.list_account_calls.lock().unwrap()
    }

    /// Highest number of publish calls observed running at once.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    /// Total remote calls of any kind.
    pub fn remote_call_count(&self) -> usize {
        self.publish_calls.lock().unwrap().len()
            + *self.list_account_calls.lock().unwrap()
            + *self.list_task_calls.lock().unwrap()
    }
}

#[async_trait]
impl PublishBackend for StubBackend {
    async fn list_accounts(&self, _key: &str) -> Result<Vec<Account>, ClientError> {
        *self.list_account_calls.lock().unwrap() += 1;
        match &self.accounts {
            AccountsReply::Accounts(accounts) => Ok(accounts.clone()),
            AccountsReply::TransportFailure => Err(ClientError::Status {
                endpoint: "/plugin/account/list".to_string(),
                status: 502,
            }),
            AccountsReply::BackendFailure(code, message) => Err(ClientError::Backend {
                code: *code,
                message: message.clone(),
            }),
        }
    }

    async fn create_publish(
        &self,
        _key: &str,
        correlation_id: &CorrelationId,
        account_id: &str,
        payload: &ContentPayload,
    ) -> Result<RemoteResult, ClientError> {
        self.publish_calls.lock().unwrap().push(PublishCall {
            correlation_id: correlation_id.clone(),
            account_id: account_id.to_string(),
            payload: payload.clone(),
        });

        let running = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(running, Ordering::SeqCst);
        // Give any concurrently polled call a chance to start.
        for _ in 0..3 {
            tokio::task::yield_now().await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.failing.contains(account_id) {
            return Err(ClientError::Backend {
                code: 500,
                message: format!("account {} rejected", account_id),
            });
        }
        Ok(json!({ "accountId": account_id }))
    }

    async fn list_tasks(
        &self,
        _key: &str,
        _correlation_id: &CorrelationId,
    ) -> Result<Vec<TaskStatus>, ClientError> {
        *self.list_task_calls.lock().unwrap() += 1;
        Ok(self.tasks.clone())
    }
}
