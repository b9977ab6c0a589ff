//! Contact inbox repository.

use domain::models::contact_message::{ContactMessage, SubmitContactMessageRequest};
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::ContactMessageEntity;

const MESSAGE_COLUMNS: &str = "id, sender_name, email, phone, body, is_read, created_at";

/// Repository for visitor contact messages.
#[derive(Clone)]
pub struct ContactMessageRepository {
    pool: PgPool,
}

impl ContactMessageRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Store a visitor submission.
    pub async fn insert(
        &self,
        request: &SubmitContactMessageRequest,
    ) -> Result<ContactMessage, sqlx::Error> {
        let entity = sqlx::query_as::<_, ContactMessageEntity>(&format!(
            r#"
            INSERT INTO contact_messages (sender_name, email, phone, body)
            VALUES ($1, $2, $3, $4)
            RETURNING {}
            "#,
            MESSAGE_COLUMNS
        ))
        .bind(&request.sender_name)
        .bind(&request.email)
        .bind(&request.phone)
        .bind(&request.body)
        .fetch_one(&self.pool)
        .await?;

        Ok(entity.into())
    }

    /// The inbox: unread first, newest within each group. Optionally
    /// filtered to read or unread messages only.
    pub async fn list(&self, read_filter: Option<bool>) -> Result<Vec<ContactMessage>, sqlx::Error> {
        let mut query = format!(
            "SELECT {} FROM contact_messages",
            MESSAGE_COLUMNS
        );
        if read_filter.is_some() {
            query.push_str(" WHERE is_read = $1");
        }
        query.push_str(" ORDER BY is_read ASC, created_at DESC");

        let mut q = sqlx::query_as::<_, ContactMessageEntity>(&query);
        if let Some(read) = read_filter {
            q = q.bind(read);
        }

        let entities = q.fetch_all(&self.pool).await?;
        Ok(entities.into_iter().map(ContactMessage::from).collect())
    }

    /// Mark one message as read.
    pub async fn mark_read(&self, id: Uuid) -> Result<Option<ContactMessage>, sqlx::Error> {
        let entity = sqlx::query_as::<_, ContactMessageEntity>(&format!(
            "UPDATE contact_messages SET is_read = TRUE WHERE id = $1 RETURNING {}",
            MESSAGE_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(entity.map(ContactMessage::from))
    }

    /// Delete a message. Returns true when a row was removed.
    pub async fn delete(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM contact_messages WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
