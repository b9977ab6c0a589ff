//! Admin account models and role definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Staff role controlling which admin screens and fields are reachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminRole {
    SuperAdmin,
    FinancialSecretary,
    SecretaryGeneral,
}

impl AdminRole {
    /// Only the super admin may manage other admin accounts.
    pub fn can_manage_admins(self) -> bool {
        matches!(self, AdminRole::SuperAdmin)
    }

    /// Financial profile fields (bank details, payment links) are visible to
    /// the super admin and the financial secretary, never to the secretary
    /// general.
    pub fn can_view_financials(self) -> bool {
        matches!(self, AdminRole::SuperAdmin | AdminRole::FinancialSecretary)
    }
}

impl std::fmt::Display for AdminRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdminRole::SuperAdmin => write!(f, "super_admin"),
            AdminRole::FinancialSecretary => write!(f, "financial_secretary"),
            AdminRole::SecretaryGeneral => write!(f, "secretary_general"),
        }
    }
}

/// An admin account as returned to the roles management screen.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    pub id: Uuid,
    pub email: String,
    pub role: AdminRole,
    pub created_at: DateTime<Utc>,
}

/// Request to create an admin account (super admin only).
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAdminUserRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 10, max = 128, message = "Password must be 10-128 characters"))]
    pub password: String,

    pub role: AdminRole,
}

/// Request to sign in.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serialization_matches_store_values() {
        assert_eq!(
            serde_json::to_string(&AdminRole::SuperAdmin).unwrap(),
            "\"super_admin\""
        );
        assert_eq!(
            serde_json::to_string(&AdminRole::FinancialSecretary).unwrap(),
            "\"financial_secretary\""
        );
        assert_eq!(
            serde_json::to_string(&AdminRole::SecretaryGeneral).unwrap(),
            "\"secretary_general\""
        );
    }

    #[test]
    fn test_role_display() {
        assert_eq!(AdminRole::SecretaryGeneral.to_string(), "secretary_general");
    }

    #[test]
    fn test_only_super_admin_manages_admins() {
        assert!(AdminRole::SuperAdmin.can_manage_admins());
        assert!(!AdminRole::FinancialSecretary.can_manage_admins());
        assert!(!AdminRole::SecretaryGeneral.can_manage_admins());
    }

    #[test]
    fn test_secretary_general_cannot_view_financials() {
        assert!(AdminRole::SuperAdmin.can_view_financials());
        assert!(AdminRole::FinancialSecretary.can_view_financials());
        assert!(!AdminRole::SecretaryGeneral.can_view_financials());
    }

    #[test]
    fn test_create_request_rejects_bad_email() {
        let req = CreateAdminUserRequest {
            email: "not-an-email".into(),
            password: "long enough password".into(),
            role: AdminRole::SecretaryGeneral,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_create_request_rejects_short_password() {
        let req = CreateAdminUserRequest {
            email: "staff@example.org".into(),
            password: "short".into(),
            role: AdminRole::SecretaryGeneral,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_login_request_deserialize() {
        let json = r#"{"email":"admin@example.org","password":"secret-password"}"#;
        let req: LoginRequest = serde_json::from_str(json).unwrap();
        assert!(req.validate().is_ok());
        assert_eq!(req.email, "admin@example.org");
    }
}
