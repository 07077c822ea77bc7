//! Linked destination accounts.

use serde::{Deserialize, Serialize};

/// One linked social-media account reachable through the backend.
///
/// Accounts are discovered, never created or mutated here; the backend owns
/// their lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Identifier the publish API accepts for this account.
    pub id: String,

    /// Platform type (e.g. "douyin", "xhs", "bilibili").
    #[serde(rename = "type")]
    pub account_type: String,

    /// Key this account is linked to.
    pub owner_key: String,
}

impl Account {
    /// Create a new Account.
    pub fn new(
        id: impl Into<String>,
        account_type: impl Into<String>,
        owner_key: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            account_type: account_type.into(),
            owner_key: owner_key.into(),
        }
    }
}
