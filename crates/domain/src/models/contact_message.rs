//! Contact message models: public submissions read and triaged by admins.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::validation::{validate_not_blank, validate_phone};
use uuid::Uuid;
use validator::Validate;

/// A message submitted through the public contact form. Admins may mark it
/// read or delete it; the body is never edited.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: Uuid,
    pub sender_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub body: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

/// Public contact form submission.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitContactMessageRequest {
    #[validate(custom(function = "validate_not_blank"), length(max = 100))]
    pub sender_name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(custom(function = "validate_phone"))]
    pub phone: Option<String>,

    #[validate(
        custom(function = "validate_not_blank"),
        length(max = 5000, message = "Message must be at most 5000 characters")
    )]
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::internet::en::SafeEmail;
    use fake::Fake;

    fn valid_request() -> SubmitContactMessageRequest {
        SubmitContactMessageRequest {
            sender_name: "Fatima Rahman".into(),
            email: SafeEmail().fake(),
            phone: Some("732-322-5221".into()),
            body: "Salaam, what time does the weekend school start?".into(),
        }
    }

    #[test]
    fn test_valid_submission_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_empty_message_body_rejected() {
        let mut req = valid_request();
        req.body = "".into();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_phone_is_optional_but_validated() {
        let mut req = valid_request();
        req.phone = None;
        assert!(req.validate().is_ok());

        req.phone = Some("abc".into());
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_overlong_body_rejected() {
        let mut req = valid_request();
        req.body = "x".repeat(5001);
        assert!(req.validate().is_err());
    }
}
