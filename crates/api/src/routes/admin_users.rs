//! Admin account management routes (super admin only).

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use domain::models::admin_user::{AdminUser, CreateAdminUserRequest};
use persistence::repositories::AdminUserRepository;
use shared::password::hash_password;
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::AdminAuth;

fn require_super_admin(auth: &AdminAuth) -> Result<(), ApiError> {
    if auth.role.can_manage_admins() {
        Ok(())
    } else {
        Err(ApiError::Forbidden(
            "Only the super admin can manage accounts".into(),
        ))
    }
}

/// GET /api/v1/admin/users
pub async fn list(
    State(state): State<AppState>,
    auth: AdminAuth,
) -> Result<Json<Vec<AdminUser>>, ApiError> {
    require_super_admin(&auth)?;

    let users = AdminUserRepository::new(state.pool.clone()).list().await?;
    Ok(Json(users))
}

/// POST /api/v1/admin/users
pub async fn create(
    State(state): State<AppState>,
    auth: AdminAuth,
    Json(request): Json<CreateAdminUserRequest>,
) -> Result<(StatusCode, Json<AdminUser>), ApiError> {
    require_super_admin(&auth)?;
    request.validate()?;

    let password_hash = hash_password(&request.password)
        .map_err(|e| ApiError::Internal(format!("Failed to hash password: {}", e)))?;

    let user = AdminUserRepository::new(state.pool.clone())
        .create(&request.email, &password_hash, request.role)
        .await?;

    tracing::info!(user_id = %auth.user_id, created_id = %user.id, role = ?user.role, "Admin account created");

    Ok((StatusCode::CREATED, Json(user)))
}

/// Delete an account. Deleting your own account is refused so the site
/// cannot lock itself out.
///
/// DELETE /api/v1/admin/users/:id
pub async fn remove(
    State(state): State<AppState>,
    auth: AdminAuth,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    require_super_admin(&auth)?;

    if id == auth.user_id {
        return Err(ApiError::Forbidden(
            "You cannot delete your own account".into(),
        ));
    }

    let deleted = AdminUserRepository::new(state.pool.clone()).delete(id).await?;
    if !deleted {
        return Err(ApiError::NotFound("Account not found".into()));
    }

    tracing::info!(user_id = %auth.user_id, deleted_id = %id, "Admin account deleted");

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::models::admin_user::AdminRole;

    fn auth_with_role(role: AdminRole) -> AdminAuth {
        AdminAuth {
            user_id: Uuid::new_v4(),
            email: "staff@example.org".to_string(),
            role,
        }
    }

    #[test]
    fn test_super_admin_passes_gate() {
        assert!(require_super_admin(&auth_with_role(AdminRole::SuperAdmin)).is_ok());
    }

    #[test]
    fn test_other_roles_are_rejected() {
        assert!(matches!(
            require_super_admin(&auth_with_role(AdminRole::FinancialSecretary)),
            Err(ApiError::Forbidden(_))
        ));
        assert!(matches!(
            require_super_admin(&auth_with_role(AdminRole::SecretaryGeneral)),
            Err(ApiError::Forbidden(_))
        ));
    }
}
