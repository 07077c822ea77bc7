//! Local payload validation.
//!
//! Only the companion-field rule is enforced here. URL shape, title length
//! and topic format are left to the backend, which decides acceptance.

use crate::error::ValidationError;
use crate::payload::{ContentKind, ContentPayload};

/// Check that the field required by the payload's kind is populated.
///
/// Rules apply in order and the first failure wins. Pure predicate.
pub fn validate(payload: &ContentPayload) -> Result<(), ValidationError> {
    match payload.kind {
        ContentKind::Video if payload.media_url.as_deref().map_or(true, is_blank) => {
            Err(ValidationError::MissingField("mediaUrl"))
        }
        ContentKind::Article if payload.image_urls.iter().all(|url| is_blank(url)) => {
            Err(ValidationError::MissingField("imageUrls"))
        }
        _ => Ok(()),
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

impl ContentPayload {
    /// See [`validate`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video() -> ContentPayload {
        ContentPayload::new(ContentKind::Video, "T", "c", "x")
    }

    fn article() -> ContentPayload {
        ContentPayload::new(ContentKind::Article, "T", "c", "x")
    }

    #[test]
    fn test_video_requires_media_url() {
        assert_eq!(
            video().validate(),
            Err(ValidationError::MissingField("mediaUrl"))
        );
        assert_eq!(
            video().with_media_url(Some(String::new())).validate(),
            Err(ValidationError::MissingField("mediaUrl"))
        );
        assert!(video()
            .with_media_url(Some("https://cdn/v.mp4".to_string()))
            .validate()
            .is_ok());
    }

    #[test]
    fn test_article_requires_image_urls() {
        assert_eq!(
            article().validate(),
            Err(ValidationError::MissingField("imageUrls"))
        );
        assert_eq!(
            article().with_image_urls(Some(" , ")).validate(),
            Err(ValidationError::MissingField("imageUrls"))
        );
        assert!(article().with_image_urls(Some("a,b,c")).validate().is_ok());
    }

    #[test]
    fn test_blank_fields_set_directly_are_rejected() {
        let mut v = video();
        v.media_url = Some("   ".to_string());
        assert_eq!(v.validate(), Err(ValidationError::MissingField("mediaUrl")));

        let mut a = article();
        a.image_urls = vec![" ".to_string(), String::new()];
        assert_eq!(a.validate(), Err(ValidationError::MissingField("imageUrls")));
    }

    #[test]
    fn test_other_companion_field_is_not_required() {
        // A video never needs images, an article never needs a video.
        let v = video().with_media_url(Some("v".to_string()));
        assert!(v.image_urls.is_empty());
        assert!(v.validate().is_ok());

        let a = article().with_image_urls(Some("a"));
        assert!(a.media_url.is_none());
        assert!(a.validate().is_ok());
    }

    #[test]
    fn test_title_and_topics_not_deep_validated() {
        let payload = ContentPayload::new(ContentKind::Article, "", "", "")
            .with_image_urls(Some("a"));
        assert!(payload.validate().is_ok());
    }
}
