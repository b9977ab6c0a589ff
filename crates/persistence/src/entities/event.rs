//! Event entity definitions for database queries.

use chrono::{DateTime, Utc};
use domain::models::event::{Event, PublicationStatus};
use sqlx::FromRow;
use uuid::Uuid;

/// Column-level mapping for the `publication_status` enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "publication_status", rename_all = "lowercase")]
pub enum PublicationStatusDb {
    Draft,
    Published,
}

impl From<PublicationStatus> for PublicationStatusDb {
    fn from(status: PublicationStatus) -> Self {
        match status {
            PublicationStatus::Draft => PublicationStatusDb::Draft,
            PublicationStatus::Published => PublicationStatusDb::Published,
        }
    }
}

impl From<PublicationStatusDb> for PublicationStatus {
    fn from(status: PublicationStatusDb) -> Self {
        match status {
            PublicationStatusDb::Draft => PublicationStatus::Draft,
            PublicationStatusDb::Published => PublicationStatus::Published,
        }
    }
}

/// Database row mapping for an event record.
#[derive(Debug, Clone, FromRow)]
pub struct EventEntity {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub location: String,
    pub cover_image_url: Option<String>,
    pub status: PublicationStatusDb,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<EventEntity> for Event {
    fn from(e: EventEntity) -> Self {
        Event {
            id: e.id,
            title: e.title,
            slug: e.slug,
            description: e.description,
            start_time: e.start_time,
            end_time: e.end_time,
            location: e.location,
            cover_image_url: e.cover_image_url,
            status: e.status.into(),
            created_at: e.created_at,
            updated_at: e.updated_at,
        }
    }
}
