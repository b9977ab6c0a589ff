//! Contact form and admin inbox routes.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use domain::models::contact_message::{ContactMessage, SubmitContactMessageRequest};
use persistence::repositories::ContactMessageRepository;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::AdminAuth;

#[derive(Debug, Deserialize)]
pub struct InboxFilter {
    /// Restrict to read (true) or unread (false) messages.
    pub read: Option<bool>,
}

/// Visitor contact form submission.
///
/// POST /api/v1/contact
pub async fn submit(
    State(state): State<AppState>,
    Json(request): Json<SubmitContactMessageRequest>,
) -> Result<(StatusCode, Json<ContactMessage>), ApiError> {
    request.validate()?;

    let message = ContactMessageRepository::new(state.pool.clone())
        .insert(&request)
        .await?;

    tracing::info!(message_id = %message.id, "Contact message received");

    Ok((StatusCode::CREATED, Json(message)))
}

/// The inbox, unread first.
///
/// GET /api/v1/admin/contact-messages
pub async fn list(
    State(state): State<AppState>,
    _auth: AdminAuth,
    Query(filter): Query<InboxFilter>,
) -> Result<Json<Vec<ContactMessage>>, ApiError> {
    let messages = ContactMessageRepository::new(state.pool.clone())
        .list(filter.read)
        .await?;
    Ok(Json(messages))
}

/// POST /api/v1/admin/contact-messages/:id/read
pub async fn mark_read(
    State(state): State<AppState>,
    auth: AdminAuth,
    Path(id): Path<Uuid>,
) -> Result<Json<ContactMessage>, ApiError> {
    let message = ContactMessageRepository::new(state.pool.clone())
        .mark_read(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Message not found".into()))?;

    tracing::info!(user_id = %auth.user_id, message_id = %id, "Message marked read");

    Ok(Json(message))
}

/// DELETE /api/v1/admin/contact-messages/:id
pub async fn remove(
    State(state): State<AppState>,
    auth: AdminAuth,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let deleted = ContactMessageRepository::new(state.pool.clone())
        .delete(id)
        .await?;
    if !deleted {
        return Err(ApiError::NotFound("Message not found".into()));
    }

    tracing::info!(user_id = %auth.user_id, message_id = %id, "Message deleted");

    Ok(StatusCode::NO_CONTENT)
}
