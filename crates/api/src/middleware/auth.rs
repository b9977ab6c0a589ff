//! Admin session authentication middleware.
//!
//! Validates the Bearer token, then resolves the caller's role from the
//! `admin_users` table on every request. A valid token whose account no
//! longer exists is rejected: there is no fallback role.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use domain::models::admin_user::AdminRole;
use persistence::repositories::AdminUserRepository;
use shared::session::extract_user_id;
use uuid::Uuid;

use crate::app::AppState;
use crate::error::ApiError;

/// Authenticated admin principal, stored in request extensions.
#[derive(Debug, Clone)]
pub struct AdminAuth {
    pub user_id: Uuid,
    pub email: String,
    pub role: AdminRole,
}

/// Middleware that requires a valid admin session.
pub async fn require_admin(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok());

    let token = match auth_header {
        Some(header) if header.starts_with("Bearer ") => &header[7..],
        _ => {
            return ApiError::Unauthorized("Missing or invalid Authorization header".into())
                .into_response();
        }
    };

    let claims = match state.session_keys.validate(token) {
        Ok(claims) => claims,
        Err(e) => {
            tracing::debug!("Session validation failed: {}", e);
            return ApiError::Unauthorized("Invalid or expired session".into()).into_response();
        }
    };

    let user_id = match extract_user_id(&claims) {
        Ok(id) => id,
        Err(_) => {
            return ApiError::Unauthorized("Invalid session subject".into()).into_response();
        }
    };

    // Fail closed: no admin_users row means no access, whatever the token says.
    let user = match AdminUserRepository::new(state.pool.clone())
        .find_by_id(user_id)
        .await
    {
        Ok(Some(user)) => user,
        Ok(None) => {
            let request_id = super::trace_id::get_request_id(req.extensions());
            tracing::warn!(user_id = %user_id, request_id = %request_id, "Session for unknown admin account rejected");
            return ApiError::Unauthorized("Account not recognized".into()).into_response();
        }
        Err(e) => {
            return ApiError::from(e).into_response();
        }
    };

    req.extensions_mut().insert(AdminAuth {
        user_id: user.id,
        email: user.email,
        role: user.role,
    });

    next.run(req).await
}
