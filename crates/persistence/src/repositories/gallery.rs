//! Gallery repository: albums and their photos.
//!
//! Photo rows cascade when an album is deleted; the stored image URLs are
//! returned so the caller can clean up the files afterwards.

use domain::models::gallery::{
    AlbumWithPhotos, CreateAlbumRequest, GalleryAlbum, NewPhoto, Photo, UpdateAlbumRequest,
};
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::{GalleryAlbumEntity, GalleryPhotoEntity};

const ALBUM_COLUMNS: &str = r#"
    a.id, a.title, a.slug, a.description, a.cover_image_url,
    COALESCE((SELECT COUNT(*) FROM gallery_photos p WHERE p.album_id = a.id), 0) AS photo_count,
    a.created_at
"#;

const PHOTO_COLUMNS: &str = "id, album_id, image_url, caption, position, created_at";

/// Repository for gallery albums and photos.
#[derive(Clone)]
pub struct GalleryRepository {
    pool: PgPool,
}

impl GalleryRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Albums with photo counts, newest first.
    pub async fn list_albums(&self) -> Result<Vec<GalleryAlbum>, sqlx::Error> {
        let entities = sqlx::query_as::<_, GalleryAlbumEntity>(&format!(
            "SELECT {} FROM gallery_albums a ORDER BY a.created_at DESC",
            ALBUM_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(entities.into_iter().map(GalleryAlbum::from).collect())
    }

    /// One album with its photos in display order.
    pub async fn find_album_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<AlbumWithPhotos>, sqlx::Error> {
        let album = sqlx::query_as::<_, GalleryAlbumEntity>(&format!(
            "SELECT {} FROM gallery_albums a WHERE a.slug = $1",
            ALBUM_COLUMNS
        ))
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;

        let Some(album) = album else {
            return Ok(None);
        };

        let photos = sqlx::query_as::<_, GalleryPhotoEntity>(&format!(
            "SELECT {} FROM gallery_photos WHERE album_id = $1 ORDER BY position ASC, created_at ASC",
            PHOTO_COLUMNS
        ))
        .bind(album.id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(AlbumWithPhotos {
            album: album.into(),
            photos: photos.into_iter().map(Photo::from).collect(),
        }))
    }

    /// Insert an album. The slug must already be resolved by the caller.
    pub async fn create_album(
        &self,
        request: &CreateAlbumRequest,
        slug: &str,
    ) -> Result<GalleryAlbum, sqlx::Error> {
        let entity = sqlx::query_as::<_, GalleryAlbumEntity>(
            r#"
            INSERT INTO gallery_albums (title, slug, description, cover_image_url)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, slug, description, cover_image_url,
                      0::BIGINT AS photo_count, created_at
            "#,
        )
        .bind(&request.title)
        .bind(slug)
        .bind(&request.description)
        .bind(&request.cover_image_url)
        .fetch_one(&self.pool)
        .await?;

        Ok(entity.into())
    }

    /// Partial album update; absent fields keep their stored values.
    pub async fn update_album(
        &self,
        id: Uuid,
        request: &UpdateAlbumRequest,
    ) -> Result<Option<GalleryAlbum>, sqlx::Error> {
        let entity = sqlx::query_as::<_, GalleryAlbumEntity>(&format!(
            r#"
            UPDATE gallery_albums a SET
                title = COALESCE($2, title),
                slug = COALESCE($3, slug),
                description = COALESCE($4, description),
                cover_image_url = COALESCE($5, cover_image_url)
            WHERE a.id = $1
            RETURNING {}
            "#,
            ALBUM_COLUMNS
        ))
        .bind(id)
        .bind(&request.title)
        .bind(&request.slug)
        .bind(&request.description)
        .bind(&request.cover_image_url)
        .fetch_optional(&self.pool)
        .await?;

        Ok(entity.map(GalleryAlbum::from))
    }

    /// Delete an album and (via cascade) its photos. Returns the image URLs
    /// of the removed photos, or None when no album matched.
    pub async fn delete_album(&self, id: Uuid) -> Result<Option<Vec<String>>, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let image_urls: Vec<String> =
            sqlx::query_scalar("SELECT image_url FROM gallery_photos WHERE album_id = $1")
                .bind(id)
                .fetch_all(&mut *tx)
                .await?;

        let result = sqlx::query("DELETE FROM gallery_albums WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        if result.rows_affected() == 0 {
            Ok(None)
        } else {
            Ok(Some(image_urls))
        }
    }

    /// Append photos to an album, positioned after the existing ones. All
    /// rows land in one transaction.
    pub async fn add_photos(
        &self,
        album_id: Uuid,
        photos: &[NewPhoto],
    ) -> Result<Vec<Photo>, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let next_position: i32 = sqlx::query_scalar(
            "SELECT COALESCE(MAX(position) + 1, 0) FROM gallery_photos WHERE album_id = $1",
        )
        .bind(album_id)
        .fetch_one(&mut *tx)
        .await?;

        let mut inserted = Vec::with_capacity(photos.len());
        for (offset, photo) in photos.iter().enumerate() {
            let entity = sqlx::query_as::<_, GalleryPhotoEntity>(&format!(
                r#"
                INSERT INTO gallery_photos (album_id, image_url, caption, position)
                VALUES ($1, $2, $3, $4)
                RETURNING {}
                "#,
                PHOTO_COLUMNS
            ))
            .bind(album_id)
            .bind(&photo.image_url)
            .bind(&photo.caption)
            .bind(next_position + offset as i32)
            .fetch_one(&mut *tx)
            .await?;

            inserted.push(Photo::from(entity));
        }

        tx.commit().await?;
        Ok(inserted)
    }

    /// Delete one photo from an album. Returns its image URL for file
    /// cleanup, or None when no photo matched.
    pub async fn delete_photo(
        &self,
        album_id: Uuid,
        photo_id: Uuid,
    ) -> Result<Option<String>, sqlx::Error> {
        sqlx::query_scalar(
            "DELETE FROM gallery_photos WHERE id = $1 AND album_id = $2 RETURNING image_url",
        )
        .bind(photo_id)
        .bind(album_id)
        .fetch_optional(&self.pool)
        .await
    }
}
