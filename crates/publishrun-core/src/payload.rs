//! Content payloads and their two variants.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Content variant; selects which companion field is mandatory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    /// Video content, requires a media URL.
    Video,
    /// Multi-image article, requires at least one image URL.
    Article,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Article => "article",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The unit of work to publish.
///
/// Optional text fields normalise empty strings to `None`, so "unset" has a
/// single representation. `image_urls` is empty when unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentPayload {
    pub kind: ContentKind,
    pub title: String,
    pub description: Option<String>,
    pub cover_url: String,
    pub media_url: Option<String>,
    pub image_urls: Vec<String>,
    /// `YYYY-MM-DD HH:mm:ss`; `None` publishes immediately.
    pub scheduled_at: Option<String>,
    /// Comma-delimited tags, passed through verbatim.
    pub topics: String,
}

impl ContentPayload {
    /// Create a payload with the always-required fields.
    pub fn new(
        kind: ContentKind,
        title: impl Into<String>,
        cover_url: impl Into<String>,
        topics: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            description: None,
            cover_url: cover_url.into(),
            media_url: None,
            image_urls: Vec::new(),
            scheduled_at: None,
            topics: topics.into(),
        }
    }

    /// Builder method to set the description.
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = non_empty(description);
        self
    }

    /// Builder method to set the media (video) URL.
    pub fn with_media_url(mut self, media_url: Option<String>) -> Self {
        self.media_url = non_empty(media_url);
        self
    }

    /// Builder method to set image URLs from a comma-delimited string.
    pub fn with_image_urls(mut self, image_urls: Option<&str>) -> Self {
        self.image_urls = image_urls.map(split_image_urls).unwrap_or_default();
        self
    }

    /// Builder method to set the scheduled publish time.
    pub fn with_scheduled_at(mut self, scheduled_at: Option<String>) -> Self {
        self.scheduled_at = non_empty(scheduled_at);
        self
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Split a comma-delimited URL list, dropping blank segments.
pub fn split_image_urls(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_optionals_normalise_to_none() {
        let payload = ContentPayload::new(ContentKind::Video, "T", "c", "x")
            .with_description(Some(String::new()))
            .with_media_url(Some("  ".to_string()))
            .with_scheduled_at(None);

        assert_eq!(payload.description, None);
        assert_eq!(payload.media_url, None);
        assert_eq!(payload.scheduled_at, None);
    }

    #[test]
    fn test_split_image_urls() {
        assert_eq!(split_image_urls("a,b,c"), vec!["a", "b", "c"]);
        assert_eq!(split_image_urls(" a , ,b,"), vec!["a", "b"]);
        assert!(split_image_urls(",,").is_empty());
    }
}
