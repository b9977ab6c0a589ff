//! Admin sign-in and session routes.

use axum::{extract::State, Json};
use domain::models::admin_user::{AdminUser, LoginRequest};
use persistence::repositories::AdminUserRepository;
use serde::Serialize;
use shared::password::verify_password;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::AdminAuth;

/// Response body for a successful login.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: AdminUser,
}

/// Current session information.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub user: AdminUser,
}

#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub status: String,
}

/// Sign in with email and password.
///
/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    request.validate()?;

    let repo = AdminUserRepository::new(state.pool.clone());

    // Same rejection for unknown email and wrong password.
    let entity = repo
        .find_by_email(&request.email)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("Invalid email or password".into()))?;

    let valid = verify_password(&request.password, &entity.password_hash)
        .map_err(|e| ApiError::Internal(format!("Password verification failed: {}", e)))?;
    if !valid {
        return Err(ApiError::Unauthorized("Invalid email or password".into()));
    }

    let (token, _jti) = state
        .session_keys
        .issue(entity.id)
        .map_err(|e| ApiError::Internal(format!("Failed to issue session: {}", e)))?;

    tracing::info!(user_id = %entity.id, "Admin signed in");

    Ok(Json(LoginResponse {
        token,
        token_type: "Bearer".to_string(),
        expires_in: state.session_keys.session_expiry_secs,
        user: AdminUser::from(entity),
    }))
}

/// The authenticated principal and its role, for the admin UI shell.
///
/// GET /api/v1/auth/session
pub async fn session(
    State(state): State<AppState>,
    auth: AdminAuth,
) -> Result<Json<SessionResponse>, ApiError> {
    let user = AdminUserRepository::new(state.pool.clone())
        .find_by_id(auth.user_id)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("Account not recognized".into()))?;

    Ok(Json(SessionResponse { user }))
}

/// Sign out. Sessions are stateless tokens, so this only confirms; the
/// client discards its copy.
///
/// POST /api/v1/auth/logout
pub async fn logout(auth: AdminAuth) -> Json<LogoutResponse> {
    tracing::info!(user_id = %auth.user_id, "Admin signed out");
    Json(LogoutResponse {
        status: "signed_out".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use domain::models::admin_user::AdminRole;
    use uuid::Uuid;

    #[test]
    fn test_login_response_shape() {
        let response = LoginResponse {
            token: "abc.def.ghi".to_string(),
            token_type: "Bearer".to_string(),
            expires_in: 28800,
            user: AdminUser {
                id: Uuid::new_v4(),
                email: "admin@example.org".to_string(),
                role: AdminRole::SuperAdmin,
                created_at: Utc::now(),
            },
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"tokenType\":\"Bearer\""));
        assert!(json.contains("\"expiresIn\":28800"));
        assert!(json.contains("\"role\":\"super_admin\""));
    }

    #[test]
    fn test_logout_response() {
        let response = LogoutResponse {
            status: "signed_out".to_string(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("signed_out"));
    }
}
