//! Masjid profile routes.
//!
//! Donation settings are role-gated: anonymous callers and the secretary
//! general receive the redacted profile, and a secretary general attempting
//! to write any financial field is rejected outright.

use axum::{extract::State, Json};
use domain::models::profile::{MasjidProfile, UpsertProfileRequest};
use persistence::repositories::ProfileRepository;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::AdminAuth;

/// Public profile, donation settings stripped.
///
/// GET /api/v1/profile
pub async fn get_public_profile(
    State(state): State<AppState>,
) -> Result<Json<MasjidProfile>, ApiError> {
    let profile = ProfileRepository::new(state.pool.clone())
        .get()
        .await?
        .ok_or_else(|| ApiError::NotFound("Profile has not been set up yet".into()))?;

    Ok(Json(profile.redacted()))
}

/// Profile for the admin screens, redacted per role.
///
/// GET /api/v1/admin/profile
pub async fn get_admin_profile(
    State(state): State<AppState>,
    auth: AdminAuth,
) -> Result<Json<MasjidProfile>, ApiError> {
    let profile = ProfileRepository::new(state.pool.clone())
        .get()
        .await?
        .ok_or_else(|| ApiError::NotFound("Profile has not been set up yet".into()))?;

    if auth.role.can_view_financials() {
        Ok(Json(profile))
    } else {
        Ok(Json(profile.redacted()))
    }
}

/// Create or replace the profile.
///
/// PUT /api/v1/admin/profile
pub async fn upsert_profile(
    State(state): State<AppState>,
    auth: AdminAuth,
    Json(request): Json<UpsertProfileRequest>,
) -> Result<Json<MasjidProfile>, ApiError> {
    request.validate()?;

    let include_financials = auth.role.can_view_financials();
    if !include_financials && request.touches_financials() {
        return Err(ApiError::Forbidden(
            "Your role cannot change donation settings".into(),
        ));
    }

    let profile = ProfileRepository::new(state.pool.clone())
        .upsert(&request, include_financials)
        .await?;

    tracing::info!(user_id = %auth.user_id, "Profile updated");

    if include_financials {
        Ok(Json(profile))
    } else {
        Ok(Json(profile.redacted()))
    }
}
