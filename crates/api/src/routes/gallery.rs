//! Gallery routes.
//!
//! Deleting an album or a photo removes the stored files best-effort after
//! the rows are gone; a leftover file is an accepted orphan.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use domain::models::gallery::{
    AddPhotosRequest, AlbumWithPhotos, CreateAlbumRequest, GalleryAlbum, Photo, UpdateAlbumRequest,
};
use persistence::repositories::GalleryRepository;
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::AdminAuth;

/// Albums with photo counts, newest first.
///
/// GET /api/v1/gallery
pub async fn list_albums(
    State(state): State<AppState>,
) -> Result<Json<Vec<GalleryAlbum>>, ApiError> {
    let albums = GalleryRepository::new(state.pool.clone())
        .list_albums()
        .await?;
    Ok(Json(albums))
}

/// One album with its photos in display order.
///
/// GET /api/v1/gallery/:slug
pub async fn get_album(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<AlbumWithPhotos>, ApiError> {
    GalleryRepository::new(state.pool.clone())
        .find_album_by_slug(&slug)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Album not found".into()))
}

/// POST /api/v1/admin/gallery
pub async fn create_album(
    State(state): State<AppState>,
    auth: AdminAuth,
    Json(request): Json<CreateAlbumRequest>,
) -> Result<(StatusCode, Json<GalleryAlbum>), ApiError> {
    request.validate()?;

    let slug = request.resolved_slug();
    let album = GalleryRepository::new(state.pool.clone())
        .create_album(&request, &slug)
        .await?;

    tracing::info!(user_id = %auth.user_id, album_id = %album.id, slug = %album.slug, "Album created");

    Ok((StatusCode::CREATED, Json(album)))
}

/// PUT /api/v1/admin/gallery/:id
pub async fn update_album(
    State(state): State<AppState>,
    auth: AdminAuth,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateAlbumRequest>,
) -> Result<Json<GalleryAlbum>, ApiError> {
    request.validate()?;

    let album = GalleryRepository::new(state.pool.clone())
        .update_album(id, &request)
        .await?
        .ok_or_else(|| ApiError::NotFound("Album not found".into()))?;

    tracing::info!(user_id = %auth.user_id, album_id = %album.id, "Album updated");

    Ok(Json(album))
}

/// Delete an album; its photo rows cascade.
///
/// DELETE /api/v1/admin/gallery/:id
pub async fn delete_album(
    State(state): State<AppState>,
    auth: AdminAuth,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let image_urls = GalleryRepository::new(state.pool.clone())
        .delete_album(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Album not found".into()))?;

    for url in &image_urls {
        state.media.delete(url).await;
    }

    tracing::info!(user_id = %auth.user_id, album_id = %id, photos = image_urls.len(), "Album deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Attach already-uploaded photos to an album.
///
/// POST /api/v1/admin/gallery/:id/photos
pub async fn add_photos(
    State(state): State<AppState>,
    auth: AdminAuth,
    Path(id): Path<Uuid>,
    Json(request): Json<AddPhotosRequest>,
) -> Result<(StatusCode, Json<Vec<Photo>>), ApiError> {
    request.validate()?;

    let photos = GalleryRepository::new(state.pool.clone())
        .add_photos(id, &request.photos)
        .await?;

    tracing::info!(user_id = %auth.user_id, album_id = %id, count = photos.len(), "Photos added");

    Ok((StatusCode::CREATED, Json(photos)))
}

/// DELETE /api/v1/admin/gallery/:id/photos/:photo_id
pub async fn delete_photo(
    State(state): State<AppState>,
    auth: AdminAuth,
    Path((album_id, photo_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, ApiError> {
    let image_url = GalleryRepository::new(state.pool.clone())
        .delete_photo(album_id, photo_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Photo not found".into()))?;

    state.media.delete(&image_url).await;

    tracing::info!(user_id = %auth.user_id, album_id = %album_id, photo_id = %photo_id, "Photo deleted");

    Ok(StatusCode::NO_CONTENT)
}
