//! Masjid profile (singleton) models, including role-gated donation settings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::validation::{validate_not_blank, validate_phone, validate_time_label};
use uuid::Uuid;
use validator::Validate;

/// The organization profile as stored. Financial fields are stripped before
/// the record reaches anonymous callers or the secretary general.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MasjidProfile {
    pub id: Uuid,
    pub official_name: String,
    pub common_name: String,
    pub address: String,
    pub imam_name: String,
    pub phone: String,
    pub email: String,
    pub jumua_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facilities_image_url: Option<String>,

    // Donation settings: super_admin and financial_secretary only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_account_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_account_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zelle_contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paypal_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launchgood_link: Option<String>,

    pub updated_at: DateTime<Utc>,
}

impl MasjidProfile {
    /// Returns the profile with all donation settings removed, for callers
    /// who are not allowed to see financial configuration.
    pub fn redacted(mut self) -> Self {
        self.bank_name = None;
        self.bank_account_name = None;
        self.bank_account_number = None;
        self.zelle_contact = None;
        self.paypal_link = None;
        self.launchgood_link = None;
        self
    }
}

/// Wholesale profile upsert request. Core identity fields are required;
/// community links and donation settings are optional.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpsertProfileRequest {
    #[validate(custom(function = "validate_not_blank"))]
    pub official_name: String,

    #[validate(custom(function = "validate_not_blank"))]
    pub common_name: String,

    #[validate(custom(function = "validate_not_blank"))]
    pub address: String,

    #[validate(custom(function = "validate_not_blank"))]
    pub imam_name: String,

    #[validate(custom(function = "validate_phone"))]
    pub phone: String,

    #[validate(email(message = "Invalid contact email"))]
    pub email: String,

    #[validate(custom(function = "validate_time_label"))]
    pub jumua_time: String,

    #[validate(url(message = "Invalid WhatsApp link"))]
    pub whatsapp_link: Option<String>,

    #[validate(url(message = "Invalid facilities image URL"))]
    pub facilities_image_url: Option<String>,

    pub bank_name: Option<String>,
    pub bank_account_name: Option<String>,
    pub bank_account_number: Option<String>,
    pub zelle_contact: Option<String>,

    #[validate(url(message = "Invalid PayPal link"))]
    pub paypal_link: Option<String>,

    #[validate(url(message = "Invalid LaunchGood link"))]
    pub launchgood_link: Option<String>,
}

impl UpsertProfileRequest {
    /// True when the request attempts to change any donation setting, which
    /// only financially-privileged roles may do.
    pub fn touches_financials(&self) -> bool {
        self.bank_name.is_some()
            || self.bank_account_name.is_some()
            || self.bank_account_number.is_some()
            || self.zelle_contact.is_some()
            || self.paypal_link.is_some()
            || self.launchgood_link.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_profile() -> MasjidProfile {
        MasjidProfile {
            id: Uuid::new_v4(),
            official_name: "Islamic Society of Franklin Township, Inc.".into(),
            common_name: "Jamiatul Haq".into(),
            address: "385 Lewis Street, Somerset, NJ 08873".into(),
            imam_name: "Alhaji Abdullah Karim Savage".into(),
            phone: "732-322-5221".into(),
            email: "office@example.org".into(),
            jumua_time: "1:15 PM".into(),
            whatsapp_link: None,
            facilities_image_url: None,
            bank_name: Some("Community Bank".into()),
            bank_account_name: Some("Jamiatul Haq".into()),
            bank_account_number: Some("000123456".into()),
            zelle_contact: Some("donate@example.org".into()),
            paypal_link: Some("https://paypal.me/example".into()),
            launchgood_link: None,
            updated_at: Utc::now(),
        }
    }

    fn valid_request() -> UpsertProfileRequest {
        UpsertProfileRequest {
            official_name: "Islamic Society of Franklin Township, Inc.".into(),
            common_name: "Jamiatul Haq".into(),
            address: "385 Lewis Street, Somerset, NJ 08873".into(),
            imam_name: "Alhaji Abdullah Karim Savage".into(),
            phone: "732-322-5221".into(),
            email: "office@example.org".into(),
            jumua_time: "1:15 PM".into(),
            whatsapp_link: None,
            facilities_image_url: None,
            bank_name: None,
            bank_account_name: None,
            bank_account_number: None,
            zelle_contact: None,
            paypal_link: None,
            launchgood_link: None,
        }
    }

    #[test]
    fn test_redacted_strips_all_donation_settings() {
        let profile = full_profile().redacted();
        assert!(profile.bank_name.is_none());
        assert!(profile.bank_account_name.is_none());
        assert!(profile.bank_account_number.is_none());
        assert!(profile.zelle_contact.is_none());
        assert!(profile.paypal_link.is_none());
        assert!(profile.launchgood_link.is_none());
        // Non-financial content survives
        assert_eq!(profile.common_name, "Jamiatul Haq");
    }

    #[test]
    fn test_redacted_profile_serializes_without_financial_keys() {
        let json = serde_json::to_string(&full_profile().redacted()).unwrap();
        assert!(!json.contains("bankAccountNumber"));
        assert!(!json.contains("zelleContact"));
        assert!(json.contains("commonName"));
    }

    #[test]
    fn test_upsert_request_requires_core_fields() {
        let mut req = valid_request();
        assert!(req.validate().is_ok());

        req.common_name = "  ".into();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_upsert_request_validates_jumua_time() {
        let mut req = valid_request();
        req.jumua_time = "around one".into();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_touches_financials() {
        let mut req = valid_request();
        assert!(!req.touches_financials());

        req.zelle_contact = Some("donate@example.org".into());
        assert!(req.touches_financials());
    }
}
