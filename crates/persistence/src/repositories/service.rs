//! Service listing repository.

use domain::models::service::{CreateServiceRequest, Service, UpdateServiceRequest};
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::{ServiceEntity, ServiceIconDb};

const SERVICE_COLUMNS: &str = "id, title, description, icon, sort_order";

/// Repository for community services.
#[derive(Clone)]
pub struct ServiceRepository {
    pool: PgPool,
}

impl ServiceRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All services in display order.
    pub async fn list(&self) -> Result<Vec<Service>, sqlx::Error> {
        let entities = sqlx::query_as::<_, ServiceEntity>(&format!(
            "SELECT {} FROM services ORDER BY sort_order ASC, title ASC",
            SERVICE_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(entities.into_iter().map(Service::from).collect())
    }

    pub async fn create(&self, request: &CreateServiceRequest) -> Result<Service, sqlx::Error> {
        let entity = sqlx::query_as::<_, ServiceEntity>(&format!(
            r#"
            INSERT INTO services (title, description, icon, sort_order)
            VALUES ($1, $2, $3, $4)
            RETURNING {}
            "#,
            SERVICE_COLUMNS
        ))
        .bind(&request.title)
        .bind(&request.description)
        .bind(ServiceIconDb::from(request.icon))
        .bind(request.sort_order)
        .fetch_one(&self.pool)
        .await?;

        Ok(entity.into())
    }

    /// Partial update; absent fields keep their stored values.
    pub async fn update(
        &self,
        id: Uuid,
        request: &UpdateServiceRequest,
    ) -> Result<Option<Service>, sqlx::Error> {
        let entity = sqlx::query_as::<_, ServiceEntity>(&format!(
            r#"
            UPDATE services SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                icon = COALESCE($4, icon),
                sort_order = COALESCE($5, sort_order)
            WHERE id = $1
            RETURNING {}
            "#,
            SERVICE_COLUMNS
        ))
        .bind(id)
        .bind(&request.title)
        .bind(&request.description)
        .bind(request.icon.map(ServiceIconDb::from))
        .bind(request.sort_order)
        .fetch_optional(&self.pool)
        .await?;

        Ok(entity.map(Service::from))
    }

    /// Delete a service. Returns true when a row was removed.
    pub async fn delete(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM services WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
