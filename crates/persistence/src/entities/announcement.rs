//! Announcement entity definitions for database queries.

use chrono::{DateTime, Utc};
use domain::models::announcement::Announcement;
use sqlx::FromRow;
use uuid::Uuid;

use crate::entities::event::PublicationStatusDb;

/// Database row mapping for an announcement record.
#[derive(Debug, Clone, FromRow)]
pub struct AnnouncementEntity {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub category: String,
    pub is_pinned: bool,
    pub image_url: Option<String>,
    pub status: PublicationStatusDb,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<AnnouncementEntity> for Announcement {
    fn from(e: AnnouncementEntity) -> Self {
        Announcement {
            id: e.id,
            title: e.title,
            body: e.body,
            category: e.category,
            is_pinned: e.is_pinned,
            image_url: e.image_url,
            status: e.status.into(),
            created_at: e.created_at,
            updated_at: e.updated_at,
        }
    }
}
