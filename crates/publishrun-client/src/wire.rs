//! JSON shapes exchanged with the backend.

use publishrun_core::{
    Account, ContentKind, ContentPayload, CorrelationId, TaskState, TaskStatus,
};
use serde::{Deserialize, Serialize};

/// Account as returned by the account-list endpoint.
///
/// Any field may be absent or `null`; both read as an empty string.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccountRecord {
    /// Link record id; not used for publishing.
    pub id: Option<String>,
    pub account_id: Option<String>,
    pub account_type: Option<String>,
    pub key: Option<String>,
}

impl From<AccountRecord> for Account {
    fn from(record: AccountRecord) -> Self {
        Account::new(
            record.account_id.unwrap_or_default(),
            record.account_type.unwrap_or_default(),
            record.key.unwrap_or_default(),
        )
    }
}

/// Task status as returned by the task-list endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    #[serde(default)]
    pub account_id: Option<String>,
    #[serde(default)]
    pub status: Option<i64>,
    #[serde(default)]
    pub error_msg: Option<String>,
}

impl From<TaskRecord> for TaskStatus {
    fn from(record: TaskRecord) -> Self {
        TaskStatus {
            account_id: record.account_id.unwrap_or_default(),
            state: TaskState::from_code(record.status.unwrap_or_default()),
            error_message: record.error_msg.filter(|m| !m.is_empty()),
        }
    }
}

/// Body of a publish-create request.
///
/// Only the companion field that matches `type` is sent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishRequest<'a> {
    pub flow_id: &'a str,
    pub account_id: &'a str,
    #[serde(rename = "type")]
    pub kind: ContentKind,
    pub title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<&'a str>,
    pub cover_url: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub img_url_list: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publish_time: Option<&'a str>,
    pub topics: &'a str,
}

impl<'a> PublishRequest<'a> {
    pub fn new(
        correlation_id: &'a CorrelationId,
        account_id: &'a str,
        payload: &'a ContentPayload,
    ) -> Self {
        let (video_url, img_url_list) = match payload.kind {
            ContentKind::Video => (payload.media_url.as_deref(), None),
            ContentKind::Article => (None, Some(payload.image_urls.as_slice())),
        };

        Self {
            flow_id: correlation_id.as_str(),
            account_id,
            kind: payload.kind,
            title: &payload.title,
            desc: payload.description.as_deref(),
            video_url,
            cover_url: &payload.cover_url,
            img_url_list,
            publish_time: payload.scheduled_at.as_deref(),
            topics: &payload.topics,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_article_request_body() {
        let payload = ContentPayload::new(ContentKind::Article, "T", "c", "x,y")
            .with_image_urls(Some("a,b,c"))
            .with_media_url(Some("ignored.mp4".to_string()));
        let id = CorrelationId::new("mcp_batch_1");

        let body = serde_json::to_value(PublishRequest::new(&id, "acc-1", &payload)).unwrap();
        assert_eq!(
            body,
            json!({
                "flowId": "mcp_batch_1",
                "accountId": "acc-1",
                "type": "article",
                "title": "T",
                "coverUrl": "c",
                "imgUrlList": ["a", "b", "c"],
                "topics": "x,y"
            })
        );
    }

    #[test]
    fn test_video_request_body() {
        let payload = ContentPayload::new(ContentKind::Video, "T", "c", "x")
            .with_media_url(Some("v.mp4".to_string()))
            .with_description(Some("d".to_string()))
            .with_scheduled_at(Some("2025-01-02 03:04:05".to_string()));
        let id = CorrelationId::new("mcp_1");

        let body = serde_json::to_value(PublishRequest::new(&id, "acc-1", &payload)).unwrap();
        assert_eq!(body["type"], "video");
        assert_eq!(body["videoUrl"], "v.mp4");
        assert_eq!(body["desc"], "d");
        assert_eq!(body["publishTime"], "2025-01-02 03:04:05");
        assert!(body.get("imgUrlList").is_none());
    }

    #[test]
    fn test_account_record_maps_publish_id() {
        let record: AccountRecord = serde_json::from_value(json!({
            "id": "link-9",
            "accountId": "acc-1",
            "accountType": "douyin",
            "key": "sk-1"
        }))
        .unwrap();

        let account = Account::from(record);
        assert_eq!(account, Account::new("acc-1", "douyin", "sk-1"));
    }

    #[test]
    fn test_account_record_null_fields() {
        let record: AccountRecord = serde_json::from_value(json!({
            "id": null,
            "accountId": "acc-2",
            "accountType": null,
            "key": "sk-1"
        }))
        .unwrap();

        assert_eq!(Account::from(record), Account::new("acc-2", "", "sk-1"));
    }

    #[test]
    fn test_task_record_state() {
        let record: TaskRecord = serde_json::from_value(json!({
            "accountId": "acc-1",
            "status": -1,
            "errorMsg": "cover too small"
        }))
        .unwrap();

        let status = TaskStatus::from(record);
        assert_eq!(status.state, TaskState::Failed);
        assert_eq!(status.error_message.as_deref(), Some("cover too small"));
    }
}
