//! Text rendering of results for agents and humans.
//!
//! Every function here is pure formatting over already-computed values.

use crate::{Account, BatchSummary, CorrelationId, TaskStatus};

/// Message returned when a key has no linked accounts.
pub const NO_ACCOUNTS_MESSAGE: &str =
    "No accounts found for the provided API key. Please ensure you have accounts linked to this key.";

/// Render a batch summary: header, one line per account, trailing tallies.
pub fn render_batch(summary: &BatchSummary) -> Vec<String> {
    let mut lines = Vec::with_capacity(summary.outcomes.len() + 2);
    lines.push(format!(
        "Starting batch publication to {} account(s)...",
        summary.account_count()
    ));

    for outcome in &summary.outcomes {
        let account = &outcome.account;
        if outcome.succeeded {
            lines.push(format!(
                "SUCCESS: {} - {} - Published successfully (Correlation ID: {})",
                account.account_type, account.id, summary.correlation_id
            ));
        } else {
            lines.push(format!(
                "FAILED: {} - {} - {} (Correlation ID: {})",
                account.account_type,
                account.id,
                outcome.error_detail.as_deref().unwrap_or("Unknown error"),
                summary.correlation_id
            ));
        }
    }

    lines.push(format!(
        "Batch publication completed. Success: {}, Failed: {}",
        summary.success_count, summary.failure_count
    ));
    lines
}

/// Render a discovered account list.
pub fn render_accounts(accounts: &[Account]) -> Vec<String> {
    if accounts.is_empty() {
        return vec![NO_ACCOUNTS_MESSAGE.to_string()];
    }

    let mut lines = Vec::with_capacity(accounts.len() + 1);
    lines.push(format!("Found {} account(s):", accounts.len()));
    lines.extend(
        accounts
            .iter()
            .map(|a| format!("Account ID: {} | Type: {}", a.id, a.account_type)),
    );
    lines
}

/// Render task statuses for one correlation id.
pub fn render_tasks(correlation_id: &CorrelationId, tasks: &[TaskStatus]) -> Vec<String> {
    if tasks.is_empty() {
        return vec![format!(
            "No publish tasks found for correlation ID {}",
            correlation_id
        )];
    }

    tasks
        .iter()
        .map(|t| {
            format!(
                "Account ID: {} - Status: {} - Error: {}",
                t.account_id,
                t.state.label(),
                t.error_message.as_deref().filter(|m| !m.is_empty()).unwrap_or("-")
            )
        })
        .collect()
}
