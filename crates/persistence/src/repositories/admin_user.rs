//! Admin account repository.
//!
//! Role checks re-read the stored role on every authenticated request, so a
//! role change or account deletion takes effect immediately. Unknown emails
//! are simply absent rows: there is no fallback role.

use domain::models::admin_user::{AdminRole, AdminUser};
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::{AdminRoleDb, AdminUserEntity};

const USER_COLUMNS: &str = "id, email, password_hash, role, created_at";

/// Repository for admin accounts.
#[derive(Clone)]
pub struct AdminUserRepository {
    pool: PgPool,
}

impl AdminUserRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Case-insensitive email lookup. Returns the full entity because the
    /// login flow needs the stored hash.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<AdminUserEntity>, sqlx::Error> {
        sqlx::query_as::<_, AdminUserEntity>(&format!(
            "SELECT {} FROM admin_users WHERE LOWER(email) = LOWER($1)",
            USER_COLUMNS
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<AdminUser>, sqlx::Error> {
        let entity = sqlx::query_as::<_, AdminUserEntity>(&format!(
            "SELECT {} FROM admin_users WHERE id = $1",
            USER_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(entity.map(AdminUser::from))
    }

    /// All accounts, oldest first.
    pub async fn list(&self) -> Result<Vec<AdminUser>, sqlx::Error> {
        let entities = sqlx::query_as::<_, AdminUserEntity>(&format!(
            "SELECT {} FROM admin_users ORDER BY created_at ASC",
            USER_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(entities.into_iter().map(AdminUser::from).collect())
    }

    /// Insert an account with an already-hashed password.
    pub async fn create(
        &self,
        email: &str,
        password_hash: &str,
        role: AdminRole,
    ) -> Result<AdminUser, sqlx::Error> {
        let entity = sqlx::query_as::<_, AdminUserEntity>(&format!(
            r#"
            INSERT INTO admin_users (email, password_hash, role)
            VALUES ($1, $2, $3)
            RETURNING {}
            "#,
            USER_COLUMNS
        ))
        .bind(email)
        .bind(password_hash)
        .bind(AdminRoleDb::from(role))
        .fetch_one(&self.pool)
        .await?;

        Ok(entity.into())
    }

    /// Delete an account. Returns true when a row was removed.
    pub async fn delete(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM admin_users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
