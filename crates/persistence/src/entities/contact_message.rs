//! Contact message entity definitions for database queries.

use chrono::{DateTime, Utc};
use domain::models::contact_message::ContactMessage;
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for a contact inbox record.
#[derive(Debug, Clone, FromRow)]
pub struct ContactMessageEntity {
    pub id: Uuid,
    pub sender_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub body: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl From<ContactMessageEntity> for ContactMessage {
    fn from(e: ContactMessageEntity) -> Self {
        ContactMessage {
            id: e.id,
            sender_name: e.sender_name,
            email: e.email,
            phone: e.phone,
            body: e.body,
            is_read: e.is_read,
            created_at: e.created_at,
        }
    }
}
