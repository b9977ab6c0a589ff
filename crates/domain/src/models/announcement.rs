//! Announcement models: short notices with a pinned flag and category tag.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::validation::validate_not_blank;
use uuid::Uuid;
use validator::Validate;

use super::event::PublicationStatus;

/// A community announcement. Pinned announcements sort ahead of everything
/// else; within each group newest first.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub category: String,
    pub is_pinned: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub status: PublicationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request to create an announcement.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAnnouncementRequest {
    #[validate(custom(function = "validate_not_blank"), length(max = 200))]
    pub title: String,

    #[validate(custom(function = "validate_not_blank"))]
    pub body: String,

    #[validate(custom(function = "validate_not_blank"), length(max = 50))]
    pub category: String,

    #[serde(default)]
    pub is_pinned: bool,

    #[validate(url(message = "Invalid image URL"))]
    pub image_url: Option<String>,

    #[serde(default)]
    pub status: PublicationStatus,
}

/// Partial announcement update.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAnnouncementRequest {
    #[validate(custom(function = "validate_not_blank"), length(max = 200))]
    pub title: Option<String>,

    #[validate(custom(function = "validate_not_blank"))]
    pub body: Option<String>,

    #[validate(custom(function = "validate_not_blank"), length(max = 50))]
    pub category: Option<String>,

    pub is_pinned: Option<bool>,

    #[validate(url(message = "Invalid image URL"))]
    pub image_url: Option<String>,

    pub status: Option<PublicationStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateAnnouncementRequest {
        CreateAnnouncementRequest {
            title: "Moon Sighting Confirmed".into(),
            body: "Ramadan begins tomorrow, Insha'Allah.".into(),
            category: "ramadan".into(),
            is_pinned: true,
            image_url: None,
            status: PublicationStatus::Published,
        }
    }

    #[test]
    fn test_valid_announcement_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_blank_body_rejected() {
        let mut req = valid_request();
        req.body = "\n".into();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_pinned_defaults_false() {
        let json = r#"{"title":"Parking notice","body":"Use the rear lot.","category":"general"}"#;
        let req: CreateAnnouncementRequest = serde_json::from_str(json).unwrap();
        assert!(!req.is_pinned);
        assert_eq!(req.status, PublicationStatus::Draft);
    }

    #[test]
    fn test_update_request_all_fields_optional() {
        let req: UpdateAnnouncementRequest = serde_json::from_str("{}").unwrap();
        assert!(req.validate().is_ok());
        assert!(req.title.is_none());
    }
}
