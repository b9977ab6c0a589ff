//! Weekly prayer schedule (singleton) models.

use serde::{Deserialize, Serialize};
use shared::validation::validate_time_label;
use uuid::Uuid;
use validator::Validate;

/// The weekly prayer schedule: five daily start times plus the Friday
/// congregational time and free-text notes.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrayerTimes {
    pub id: Uuid,
    pub fajr: String,
    pub dhuhr: String,
    pub asr: String,
    pub maghrib: String,
    pub isha: String,
    pub jumua: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Wholesale replacement of the weekly schedule.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpsertPrayerTimesRequest {
    #[validate(custom(function = "validate_time_label"))]
    pub fajr: String,

    #[validate(custom(function = "validate_time_label"))]
    pub dhuhr: String,

    #[validate(custom(function = "validate_time_label"))]
    pub asr: String,

    #[validate(custom(function = "validate_time_label"))]
    pub maghrib: String,

    #[validate(custom(function = "validate_time_label"))]
    pub isha: String,

    #[validate(custom(function = "validate_time_label"))]
    pub jumua: String,

    #[validate(length(max = 500, message = "Notes must be at most 500 characters"))]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> UpsertPrayerTimesRequest {
        UpsertPrayerTimesRequest {
            fajr: "5:15 AM".into(),
            dhuhr: "12:30 PM".into(),
            asr: "3:45 PM".into(),
            maghrib: "5:45 PM".into(),
            isha: "7:30 PM".into(),
            jumua: "1:15 PM".into(),
            notes: Some("Iqamah times are subject to change.".into()),
        }
    }

    #[test]
    fn test_valid_schedule_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_malformed_time_fails() {
        let mut req = valid_request();
        req.maghrib = "sunset".into();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_overlong_notes_fail() {
        let mut req = valid_request();
        req.notes = Some("x".repeat(501));
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_serialization_shape() {
        let times = PrayerTimes {
            id: Uuid::new_v4(),
            fajr: "5:15 AM".into(),
            dhuhr: "12:30 PM".into(),
            asr: "3:45 PM".into(),
            maghrib: "5:45 PM".into(),
            isha: "7:30 PM".into(),
            jumua: "1:15 PM".into(),
            notes: None,
        };
        let json = serde_json::to_string(&times).unwrap();
        assert!(json.contains("\"jumua\":\"1:15 PM\""));
        assert!(!json.contains("notes"));
    }
}
