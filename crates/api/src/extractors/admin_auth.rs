//! Admin principal extractor.
//!
//! Handlers on admin routes take this as an argument; the value is inserted
//! into request extensions by the `require_admin` middleware, so a missing
//! value means the route was wired up without the auth layer.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::auth::AdminAuth;

#[async_trait]
impl FromRequestParts<AppState> for AdminAuth {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AdminAuth>()
            .cloned()
            .ok_or_else(|| ApiError::Unauthorized("Authentication required".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::models::admin_user::AdminRole;
    use uuid::Uuid;

    #[test]
    fn test_admin_auth_carries_role() {
        let auth = AdminAuth {
            user_id: Uuid::new_v4(),
            email: "sg@example.org".to_string(),
            role: AdminRole::SecretaryGeneral,
        };
        assert!(!auth.role.can_manage_admins());
        assert!(!auth.role.can_view_financials());
    }

    #[test]
    fn test_admin_auth_clone() {
        let auth = AdminAuth {
            user_id: Uuid::new_v4(),
            email: "root@example.org".to_string(),
            role: AdminRole::SuperAdmin,
        };
        let cloned = auth.clone();
        assert_eq!(auth.user_id, cloned.user_id);
        assert_eq!(cloned.role, AdminRole::SuperAdmin);
    }
}
