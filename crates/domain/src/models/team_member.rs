//! Leadership team member models.

use serde::{Deserialize, Serialize};
use shared::validation::validate_not_blank;
use uuid::Uuid;
use validator::Validate;

/// A leadership/staff entry shown on the public leadership page, ordered by
/// `sort_order` ascending (0 first).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: Uuid,
    pub name: String,
    pub role_title: String,
    pub bio: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub sort_order: i32,
}

/// Request to create a team member.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeamMemberRequest {
    #[validate(custom(function = "validate_not_blank"), length(max = 100))]
    pub name: String,

    #[validate(custom(function = "validate_not_blank"), length(max = 100))]
    pub role_title: String,

    #[validate(custom(function = "validate_not_blank"))]
    pub bio: String,

    #[validate(url(message = "Invalid image URL"))]
    pub image_url: Option<String>,

    #[serde(default)]
    pub sort_order: i32,
}

/// Partial team member update.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTeamMemberRequest {
    #[validate(custom(function = "validate_not_blank"), length(max = 100))]
    pub name: Option<String>,

    #[validate(custom(function = "validate_not_blank"), length(max = 100))]
    pub role_title: Option<String>,

    #[validate(custom(function = "validate_not_blank"))]
    pub bio: Option<String>,

    #[validate(url(message = "Invalid image URL"))]
    pub image_url: Option<String>,

    pub sort_order: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::name::en::Name;
    use fake::Fake;

    #[test]
    fn test_valid_member_passes() {
        let req = CreateTeamMemberRequest {
            name: Name().fake(),
            role_title: "Imam".into(),
            bio: "Leads daily prayers and Friday khutbah.".into(),
            image_url: None,
            sort_order: 0,
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_blank_role_title_rejected() {
        let req = CreateTeamMemberRequest {
            name: "Sister Aisha".into(),
            role_title: " ".into(),
            bio: "Coordinates the weekend school.".into(),
            image_url: None,
            sort_order: 1,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_sort_order_defaults_to_zero() {
        let json = r#"{"name":"Br. Yusuf","roleTitle":"Treasurer","bio":"Handles finances."}"#;
        let req: CreateTeamMemberRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.sort_order, 0);
    }
}
