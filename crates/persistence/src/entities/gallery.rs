//! Gallery entity definitions for database queries.

use chrono::{DateTime, Utc};
use domain::models::gallery::{GalleryAlbum, Photo};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for an album with its aggregated photo count.
#[derive(Debug, Clone, FromRow)]
pub struct GalleryAlbumEntity {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub cover_image_url: Option<String>,
    pub photo_count: i64,
    pub created_at: DateTime<Utc>,
}

impl From<GalleryAlbumEntity> for GalleryAlbum {
    fn from(e: GalleryAlbumEntity) -> Self {
        GalleryAlbum {
            id: e.id,
            title: e.title,
            slug: e.slug,
            description: e.description,
            cover_image_url: e.cover_image_url,
            photo_count: e.photo_count,
            created_at: e.created_at,
        }
    }
}

/// Database row mapping for a photo record.
#[derive(Debug, Clone, FromRow)]
pub struct GalleryPhotoEntity {
    pub id: Uuid,
    pub album_id: Uuid,
    pub image_url: String,
    pub caption: Option<String>,
    pub position: i32,
    pub created_at: DateTime<Utc>,
}

impl From<GalleryPhotoEntity> for Photo {
    fn from(e: GalleryPhotoEntity) -> Self {
        Photo {
            id: e.id,
            album_id: e.album_id,
            image_url: e.image_url,
            caption: e.caption,
            position: e.position,
            created_at: e.created_at,
        }
    }
}
