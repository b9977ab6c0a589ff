//! Service (program/offering) models with a fixed icon set.

use serde::{Deserialize, Serialize};
use shared::validation::validate_not_blank;
use uuid::Uuid;
use validator::Validate;

/// Icon selector for a service card. The set is fixed; the client maps each
/// variant to its glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceIcon {
    Star,
    Graduation,
    Heart,
    Home,
    Users,
    Clock,
}

impl std::fmt::Display for ServiceIcon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceIcon::Star => write!(f, "star"),
            ServiceIcon::Graduation => write!(f, "graduation"),
            ServiceIcon::Heart => write!(f, "heart"),
            ServiceIcon::Home => write!(f, "home"),
            ServiceIcon::Users => write!(f, "users"),
            ServiceIcon::Clock => write!(f, "clock"),
        }
    }
}

/// A program or offering shown on the public services page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub icon: ServiceIcon,
    pub sort_order: i32,
}

/// Request to create a service.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateServiceRequest {
    #[validate(custom(function = "validate_not_blank"), length(max = 100))]
    pub title: String,

    #[validate(custom(function = "validate_not_blank"))]
    pub description: String,

    pub icon: ServiceIcon,

    #[serde(default)]
    pub sort_order: i32,
}

/// Partial service update.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateServiceRequest {
    #[validate(custom(function = "validate_not_blank"), length(max = 100))]
    pub title: Option<String>,

    #[validate(custom(function = "validate_not_blank"))]
    pub description: Option<String>,

    pub icon: Option<ServiceIcon>,

    pub sort_order: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_serialization() {
        assert_eq!(serde_json::to_string(&ServiceIcon::Star).unwrap(), "\"star\"");
        assert_eq!(
            serde_json::to_string(&ServiceIcon::Graduation).unwrap(),
            "\"graduation\""
        );
    }

    #[test]
    fn test_unknown_icon_rejected() {
        let result: Result<ServiceIcon, _> = serde_json::from_str("\"rocket\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_icon_display() {
        assert_eq!(ServiceIcon::Users.to_string(), "users");
        assert_eq!(ServiceIcon::Clock.to_string(), "clock");
    }

    #[test]
    fn test_create_request_deserialize() {
        let json = r#"{"title":"Weekend School","description":"Quran and Arabic classes.","icon":"graduation"}"#;
        let req: CreateServiceRequest = serde_json::from_str(json).unwrap();
        assert!(req.validate().is_ok());
        assert_eq!(req.icon, ServiceIcon::Graduation);
        assert_eq!(req.sort_order, 0);
    }

    #[test]
    fn test_blank_description_rejected() {
        let req = CreateServiceRequest {
            title: "Janazah Services".into(),
            description: "".into(),
            icon: ServiceIcon::Heart,
            sort_order: 2,
        };
        assert!(req.validate().is_err());
    }
}
