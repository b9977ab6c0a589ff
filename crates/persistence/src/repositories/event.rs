//! Event repository.

use domain::models::event::{CreateEventRequest, Event, UpdateEventRequest};
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::{EventEntity, PublicationStatusDb};

const EVENT_COLUMNS: &str = r#"
    id, title, slug, description, start_time, end_time, location,
    cover_image_url, status, created_at, updated_at
"#;

/// Repository for community events.
#[derive(Clone)]
pub struct EventRepository {
    pool: PgPool,
}

impl EventRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Published events only, soonest first. This is the public listing.
    pub async fn list_published(&self) -> Result<Vec<Event>, sqlx::Error> {
        let entities = sqlx::query_as::<_, EventEntity>(&format!(
            r#"
            SELECT {}
            FROM events
            WHERE status = 'published'
            ORDER BY start_time ASC
            "#,
            EVENT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(entities.into_iter().map(Event::from).collect())
    }

    /// Published event by slug, for the public detail page and ICS export.
    pub async fn find_published_by_slug(&self, slug: &str) -> Result<Option<Event>, sqlx::Error> {
        let entity = sqlx::query_as::<_, EventEntity>(&format!(
            "SELECT {} FROM events WHERE slug = $1 AND status = 'published'",
            EVENT_COLUMNS
        ))
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;

        Ok(entity.map(Event::from))
    }

    /// Every event regardless of status, newest start first. Admin listing.
    pub async fn list_all(&self) -> Result<Vec<Event>, sqlx::Error> {
        let entities = sqlx::query_as::<_, EventEntity>(&format!(
            "SELECT {} FROM events ORDER BY start_time DESC",
            EVENT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(entities.into_iter().map(Event::from).collect())
    }

    /// Insert an event. The slug must already be resolved by the caller.
    pub async fn create(
        &self,
        request: &CreateEventRequest,
        slug: &str,
    ) -> Result<Event, sqlx::Error> {
        let entity = sqlx::query_as::<_, EventEntity>(&format!(
            r#"
            INSERT INTO events (title, slug, description, start_time, end_time,
                                location, cover_image_url, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {}
            "#,
            EVENT_COLUMNS
        ))
        .bind(&request.title)
        .bind(slug)
        .bind(&request.description)
        .bind(request.start_time)
        .bind(request.end_time)
        .bind(&request.location)
        .bind(&request.cover_image_url)
        .bind(PublicationStatusDb::from(request.status))
        .fetch_one(&self.pool)
        .await?;

        Ok(entity.into())
    }

    /// Partial update; absent fields keep their stored values.
    pub async fn update(
        &self,
        id: Uuid,
        request: &UpdateEventRequest,
    ) -> Result<Option<Event>, sqlx::Error> {
        let entity = sqlx::query_as::<_, EventEntity>(&format!(
            r#"
            UPDATE events SET
                title = COALESCE($2, title),
                slug = COALESCE($3, slug),
                description = COALESCE($4, description),
                start_time = COALESCE($5, start_time),
                end_time = COALESCE($6, end_time),
                location = COALESCE($7, location),
                cover_image_url = COALESCE($8, cover_image_url),
                status = COALESCE($9, status),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            EVENT_COLUMNS
        ))
        .bind(id)
        .bind(&request.title)
        .bind(&request.slug)
        .bind(&request.description)
        .bind(request.start_time)
        .bind(request.end_time)
        .bind(&request.location)
        .bind(&request.cover_image_url)
        .bind(request.status.map(PublicationStatusDb::from))
        .fetch_optional(&self.pool)
        .await?;

        Ok(entity.map(Event::from))
    }

    /// Delete an event. Returns true when a row was removed.
    pub async fn delete(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
