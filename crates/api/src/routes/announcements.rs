//! Announcement routes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use domain::models::announcement::{
    Announcement, CreateAnnouncementRequest, UpdateAnnouncementRequest,
};
use persistence::repositories::AnnouncementRepository;
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::AdminAuth;

/// Published announcements, pinned first, then newest.
///
/// GET /api/v1/announcements
pub async fn list_published(
    State(state): State<AppState>,
) -> Result<Json<Vec<Announcement>>, ApiError> {
    let announcements = AnnouncementRepository::new(state.pool.clone())
        .list_published()
        .await?;
    Ok(Json(announcements))
}

/// Every announcement regardless of status.
///
/// GET /api/v1/admin/announcements
pub async fn list_all(
    State(state): State<AppState>,
    _auth: AdminAuth,
) -> Result<Json<Vec<Announcement>>, ApiError> {
    let announcements = AnnouncementRepository::new(state.pool.clone())
        .list_all()
        .await?;
    Ok(Json(announcements))
}

/// POST /api/v1/admin/announcements
pub async fn create(
    State(state): State<AppState>,
    auth: AdminAuth,
    Json(request): Json<CreateAnnouncementRequest>,
) -> Result<(StatusCode, Json<Announcement>), ApiError> {
    request.validate()?;

    let announcement = AnnouncementRepository::new(state.pool.clone())
        .create(&request)
        .await?;

    tracing::info!(user_id = %auth.user_id, announcement_id = %announcement.id, "Announcement created");

    Ok((StatusCode::CREATED, Json(announcement)))
}

/// PUT /api/v1/admin/announcements/:id
pub async fn update(
    State(state): State<AppState>,
    auth: AdminAuth,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateAnnouncementRequest>,
) -> Result<Json<Announcement>, ApiError> {
    request.validate()?;

    let announcement = AnnouncementRepository::new(state.pool.clone())
        .update(id, &request)
        .await?
        .ok_or_else(|| ApiError::NotFound("Announcement not found".into()))?;

    tracing::info!(user_id = %auth.user_id, announcement_id = %announcement.id, "Announcement updated");

    Ok(Json(announcement))
}

/// DELETE /api/v1/admin/announcements/:id
pub async fn remove(
    State(state): State<AppState>,
    auth: AdminAuth,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let deleted = AnnouncementRepository::new(state.pool.clone())
        .delete(id)
        .await?;
    if !deleted {
        return Err(ApiError::NotFound("Announcement not found".into()));
    }

    tracing::info!(user_id = %auth.user_id, announcement_id = %id, "Announcement deleted");

    Ok(StatusCode::NO_CONTENT)
}
