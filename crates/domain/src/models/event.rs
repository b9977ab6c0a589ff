//! Event models: community events with draft/published workflow and
//! slug-based public detail pages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::slug::slugify;
use shared::validation::{validate_not_blank, validate_slug};
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Publication status shared by events and announcements. Only `published`
/// records are visible to unauthenticated callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublicationStatus {
    Draft,
    Published,
}

impl Default for PublicationStatus {
    fn default() -> Self {
        PublicationStatus::Draft
    }
}

impl std::fmt::Display for PublicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PublicationStatus::Draft => write!(f, "draft"),
            PublicationStatus::Published => write!(f, "published"),
        }
    }
}

/// A community event.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub start_time: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image_url: Option<String>,
    pub status: PublicationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request to create an event. The slug derives from the title when not
/// supplied explicitly.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_event_slug_resolvable"))]
pub struct CreateEventRequest {
    #[validate(custom(function = "validate_not_blank"), length(max = 200))]
    pub title: String,

    #[validate(custom(function = "validate_slug"))]
    pub slug: Option<String>,

    #[validate(custom(function = "validate_not_blank"))]
    pub description: String,

    pub start_time: DateTime<Utc>,

    pub end_time: Option<DateTime<Utc>>,

    #[validate(custom(function = "validate_not_blank"), length(max = 200))]
    pub location: String,

    #[validate(url(message = "Invalid cover image URL"))]
    pub cover_image_url: Option<String>,

    #[serde(default)]
    pub status: PublicationStatus,
}

impl CreateEventRequest {
    /// The slug to store: the explicit one if given, otherwise derived from
    /// the title.
    pub fn resolved_slug(&self) -> String {
        match &self.slug {
            Some(slug) => slug.clone(),
            None => slugify(&self.title),
        }
    }
}

/// A punctuation-only title slugifies to an empty string, which would make
/// the event unreachable by URL. Caught here so it never reaches the insert.
fn validate_event_slug_resolvable(request: &CreateEventRequest) -> Result<(), ValidationError> {
    if request.resolved_slug().is_empty() {
        let mut err = ValidationError::new("slug");
        err.message = Some("Title must contain at least one letter or digit".into());
        return Err(err);
    }
    Ok(())
}

/// Partial event update; absent fields keep their stored values.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventRequest {
    #[validate(custom(function = "validate_not_blank"), length(max = 200))]
    pub title: Option<String>,

    #[validate(custom(function = "validate_slug"))]
    pub slug: Option<String>,

    #[validate(custom(function = "validate_not_blank"))]
    pub description: Option<String>,

    pub start_time: Option<DateTime<Utc>>,

    pub end_time: Option<DateTime<Utc>>,

    #[validate(custom(function = "validate_not_blank"), length(max = 200))]
    pub location: Option<String>,

    #[validate(url(message = "Invalid cover image URL"))]
    pub cover_image_url: Option<String>,

    pub status: Option<PublicationStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn valid_request() -> CreateEventRequest {
        CreateEventRequest {
            title: "Community Potluck".into(),
            slug: None,
            description: "Bring a dish to share.".into(),
            start_time: Utc.with_ymd_and_hms(2024, 3, 16, 18, 30, 0).unwrap(),
            end_time: None,
            location: "Social Hall".into(),
            cover_image_url: None,
            status: PublicationStatus::Draft,
        }
    }

    #[test]
    fn test_slug_derives_from_title() {
        assert_eq!(valid_request().resolved_slug(), "community-potluck");
    }

    #[test]
    fn test_explicit_slug_wins() {
        let mut req = valid_request();
        req.slug = Some("potluck-2024".into());
        assert!(req.validate().is_ok());
        assert_eq!(req.resolved_slug(), "potluck-2024");
    }

    #[test]
    fn test_blank_title_rejected() {
        let mut req = valid_request();
        req.title = "   ".into();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_punctuation_only_title_rejected() {
        let mut req = valid_request();
        req.title = "!!! ***".into();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_punctuation_title_with_explicit_slug_accepted() {
        let mut req = valid_request();
        req.title = "!!! ***".into();
        req.slug = Some("special-night".into());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_malformed_explicit_slug_rejected() {
        let mut req = valid_request();
        req.slug = Some("Not A Slug".into());
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_status_defaults_to_draft() {
        let json = r#"{"title":"Eid Prayer","description":"...","startTime":"2024-04-10T08:00:00Z","location":"Main Hall"}"#;
        let req: CreateEventRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.status, PublicationStatus::Draft);
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&PublicationStatus::Published).unwrap(),
            "\"published\""
        );
        assert_eq!(PublicationStatus::Draft.to_string(), "draft");
    }

    #[test]
    fn test_event_serialization_skips_absent_optionals() {
        let event = Event {
            id: Uuid::new_v4(),
            title: "Community Potluck".into(),
            slug: "community-potluck".into(),
            description: "Bring a dish.".into(),
            start_time: Utc.with_ymd_and_hms(2024, 3, 16, 18, 30, 0).unwrap(),
            end_time: None,
            location: "Social Hall".into(),
            cover_image_url: None,
            status: PublicationStatus::Published,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"startTime\""));
        assert!(!json.contains("endTime"));
        assert!(!json.contains("coverImageUrl"));
    }
}
