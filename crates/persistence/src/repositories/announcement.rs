//! Announcement repository.

use domain::models::announcement::{
    Announcement, CreateAnnouncementRequest, UpdateAnnouncementRequest,
};
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::{AnnouncementEntity, PublicationStatusDb};

const ANNOUNCEMENT_COLUMNS: &str = r#"
    id, title, body, category, is_pinned, image_url, status, created_at, updated_at
"#;

/// Repository for announcements.
#[derive(Clone)]
pub struct AnnouncementRepository {
    pool: PgPool,
}

impl AnnouncementRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Published announcements, pinned first, then newest. Public listing.
    pub async fn list_published(&self) -> Result<Vec<Announcement>, sqlx::Error> {
        let entities = sqlx::query_as::<_, AnnouncementEntity>(&format!(
            r#"
            SELECT {}
            FROM announcements
            WHERE status = 'published'
            ORDER BY is_pinned DESC, created_at DESC
            "#,
            ANNOUNCEMENT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(entities.into_iter().map(Announcement::from).collect())
    }

    /// Every announcement regardless of status, newest first. Admin listing.
    pub async fn list_all(&self) -> Result<Vec<Announcement>, sqlx::Error> {
        let entities = sqlx::query_as::<_, AnnouncementEntity>(&format!(
            "SELECT {} FROM announcements ORDER BY created_at DESC",
            ANNOUNCEMENT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(entities.into_iter().map(Announcement::from).collect())
    }

    pub async fn create(
        &self,
        request: &CreateAnnouncementRequest,
    ) -> Result<Announcement, sqlx::Error> {
        let entity = sqlx::query_as::<_, AnnouncementEntity>(&format!(
            r#"
            INSERT INTO announcements (title, body, category, is_pinned, image_url, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {}
            "#,
            ANNOUNCEMENT_COLUMNS
        ))
        .bind(&request.title)
        .bind(&request.body)
        .bind(&request.category)
        .bind(request.is_pinned)
        .bind(&request.image_url)
        .bind(PublicationStatusDb::from(request.status))
        .fetch_one(&self.pool)
        .await?;

        Ok(entity.into())
    }

    /// Partial update; absent fields keep their stored values.
    pub async fn update(
        &self,
        id: Uuid,
        request: &UpdateAnnouncementRequest,
    ) -> Result<Option<Announcement>, sqlx::Error> {
        let entity = sqlx::query_as::<_, AnnouncementEntity>(&format!(
            r#"
            UPDATE announcements SET
                title = COALESCE($2, title),
                body = COALESCE($3, body),
                category = COALESCE($4, category),
                is_pinned = COALESCE($5, is_pinned),
                image_url = COALESCE($6, image_url),
                status = COALESCE($7, status),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            ANNOUNCEMENT_COLUMNS
        ))
        .bind(id)
        .bind(&request.title)
        .bind(&request.body)
        .bind(&request.category)
        .bind(request.is_pinned)
        .bind(&request.image_url)
        .bind(request.status.map(PublicationStatusDb::from))
        .fetch_optional(&self.pool)
        .await?;

        Ok(entity.map(Announcement::from))
    }

    /// Delete an announcement. Returns true when a row was removed.
    pub async fn delete(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM announcements WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
