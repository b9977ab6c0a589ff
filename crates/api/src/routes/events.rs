//! Event routes, including the iCalendar download.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use domain::models::event::{CreateEventRequest, Event, UpdateEventRequest};
use domain::services::calendar::{event_to_ics, ics_filename};
use persistence::repositories::EventRepository;
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::AdminAuth;

/// Published events, soonest first.
///
/// GET /api/v1/events
pub async fn list_published(State(state): State<AppState>) -> Result<Json<Vec<Event>>, ApiError> {
    let events = EventRepository::new(state.pool.clone())
        .list_published()
        .await?;
    Ok(Json(events))
}

/// Published event detail page.
///
/// GET /api/v1/events/:slug
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Event>, ApiError> {
    EventRepository::new(state.pool.clone())
        .find_published_by_slug(&slug)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Event not found".into()))
}

/// Single-event iCalendar download.
///
/// GET /api/v1/events/:slug/calendar.ics
pub async fn calendar(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let event = EventRepository::new(state.pool.clone())
        .find_published_by_slug(&slug)
        .await?
        .ok_or_else(|| ApiError::NotFound("Event not found".into()))?;

    let ics = event_to_ics(&event);
    let disposition = format!("attachment; filename=\"{}\"", ics_filename(&event.slug));

    Ok((
        [
            (header::CONTENT_TYPE, "text/calendar; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        ics,
    ))
}

/// Every event regardless of status.
///
/// GET /api/v1/admin/events
pub async fn list_all(
    State(state): State<AppState>,
    _auth: AdminAuth,
) -> Result<Json<Vec<Event>>, ApiError> {
    let events = EventRepository::new(state.pool.clone()).list_all().await?;
    Ok(Json(events))
}

/// POST /api/v1/admin/events
pub async fn create(
    State(state): State<AppState>,
    auth: AdminAuth,
    Json(request): Json<CreateEventRequest>,
) -> Result<(StatusCode, Json<Event>), ApiError> {
    request.validate()?;

    let slug = request.resolved_slug();
    let event = EventRepository::new(state.pool.clone())
        .create(&request, &slug)
        .await?;

    tracing::info!(user_id = %auth.user_id, event_id = %event.id, slug = %event.slug, "Event created");

    Ok((StatusCode::CREATED, Json(event)))
}

/// PUT /api/v1/admin/events/:id
pub async fn update(
    State(state): State<AppState>,
    auth: AdminAuth,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateEventRequest>,
) -> Result<Json<Event>, ApiError> {
    request.validate()?;

    let event = EventRepository::new(state.pool.clone())
        .update(id, &request)
        .await?
        .ok_or_else(|| ApiError::NotFound("Event not found".into()))?;

    tracing::info!(user_id = %auth.user_id, event_id = %event.id, "Event updated");

    Ok(Json(event))
}

/// DELETE /api/v1/admin/events/:id
pub async fn remove(
    State(state): State<AppState>,
    auth: AdminAuth,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let deleted = EventRepository::new(state.pool.clone()).delete(id).await?;
    if !deleted {
        return Err(ApiError::NotFound("Event not found".into()));
    }

    tracing::info!(user_id = %auth.user_id, event_id = %id, "Event deleted");

    Ok(StatusCode::NO_CONTENT)
}
