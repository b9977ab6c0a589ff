//! Community services routes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use domain::models::service::{CreateServiceRequest, Service, UpdateServiceRequest};
use persistence::repositories::ServiceRepository;
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::AdminAuth;

/// All services in display order.
///
/// GET /api/v1/services
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Service>>, ApiError> {
    let services = ServiceRepository::new(state.pool.clone()).list().await?;
    Ok(Json(services))
}

/// POST /api/v1/admin/services
pub async fn create(
    State(state): State<AppState>,
    auth: AdminAuth,
    Json(request): Json<CreateServiceRequest>,
) -> Result<(StatusCode, Json<Service>), ApiError> {
    request.validate()?;

    let service = ServiceRepository::new(state.pool.clone())
        .create(&request)
        .await?;

    tracing::info!(user_id = %auth.user_id, service_id = %service.id, "Service created");

    Ok((StatusCode::CREATED, Json(service)))
}

/// PUT /api/v1/admin/services/:id
pub async fn update(
    State(state): State<AppState>,
    auth: AdminAuth,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateServiceRequest>,
) -> Result<Json<Service>, ApiError> {
    request.validate()?;

    let service = ServiceRepository::new(state.pool.clone())
        .update(id, &request)
        .await?
        .ok_or_else(|| ApiError::NotFound("Service not found".into()))?;

    tracing::info!(user_id = %auth.user_id, service_id = %service.id, "Service updated");

    Ok(Json(service))
}

/// DELETE /api/v1/admin/services/:id
pub async fn remove(
    State(state): State<AppState>,
    auth: AdminAuth,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let deleted = ServiceRepository::new(state.pool.clone()).delete(id).await?;
    if !deleted {
        return Err(ApiError::NotFound("Service not found".into()));
    }

    tracing::info!(user_id = %auth.user_id, service_id = %id, "Service deleted");

    Ok(StatusCode::NO_CONTENT)
}
