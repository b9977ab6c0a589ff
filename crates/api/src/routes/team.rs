//! Leadership team routes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use domain::models::team_member::{
    CreateTeamMemberRequest, TeamMember, UpdateTeamMemberRequest,
};
use persistence::repositories::TeamRepository;
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::AdminAuth;

/// All members in display order.
///
/// GET /api/v1/team
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<TeamMember>>, ApiError> {
    let members = TeamRepository::new(state.pool.clone()).list().await?;
    Ok(Json(members))
}

/// POST /api/v1/admin/team
pub async fn create(
    State(state): State<AppState>,
    auth: AdminAuth,
    Json(request): Json<CreateTeamMemberRequest>,
) -> Result<(StatusCode, Json<TeamMember>), ApiError> {
    request.validate()?;

    let member = TeamRepository::new(state.pool.clone())
        .create(&request)
        .await?;

    tracing::info!(user_id = %auth.user_id, member_id = %member.id, "Team member created");

    Ok((StatusCode::CREATED, Json(member)))
}

/// PUT /api/v1/admin/team/:id
pub async fn update(
    State(state): State<AppState>,
    auth: AdminAuth,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateTeamMemberRequest>,
) -> Result<Json<TeamMember>, ApiError> {
    request.validate()?;

    let member = TeamRepository::new(state.pool.clone())
        .update(id, &request)
        .await?
        .ok_or_else(|| ApiError::NotFound("Team member not found".into()))?;

    tracing::info!(user_id = %auth.user_id, member_id = %member.id, "Team member updated");

    Ok(Json(member))
}

/// DELETE /api/v1/admin/team/:id
pub async fn remove(
    State(state): State<AppState>,
    auth: AdminAuth,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let deleted = TeamRepository::new(state.pool.clone()).delete(id).await?;
    if !deleted {
        return Err(ApiError::NotFound("Team member not found".into()));
    }

    tracing::info!(user_id = %auth.user_id, member_id = %id, "Team member deleted");

    Ok(StatusCode::NO_CONTENT)
}
