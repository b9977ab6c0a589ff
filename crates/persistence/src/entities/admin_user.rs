//! Admin account entity definitions for database queries.
//!
//! The password hash lives only on the entity; the domain model never
//! carries it.

use chrono::{DateTime, Utc};
use domain::models::admin_user::{AdminRole, AdminUser};
use sqlx::FromRow;
use uuid::Uuid;

/// Column-level mapping for the `admin_role` enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "admin_role", rename_all = "snake_case")]
pub enum AdminRoleDb {
    SuperAdmin,
    FinancialSecretary,
    SecretaryGeneral,
}

impl From<AdminRole> for AdminRoleDb {
    fn from(role: AdminRole) -> Self {
        match role {
            AdminRole::SuperAdmin => AdminRoleDb::SuperAdmin,
            AdminRole::FinancialSecretary => AdminRoleDb::FinancialSecretary,
            AdminRole::SecretaryGeneral => AdminRoleDb::SecretaryGeneral,
        }
    }
}

impl From<AdminRoleDb> for AdminRole {
    fn from(role: AdminRoleDb) -> Self {
        match role {
            AdminRoleDb::SuperAdmin => AdminRole::SuperAdmin,
            AdminRoleDb::FinancialSecretary => AdminRole::FinancialSecretary,
            AdminRoleDb::SecretaryGeneral => AdminRole::SecretaryGeneral,
        }
    }
}

/// Database row mapping for an admin account, hash included.
#[derive(Debug, Clone, FromRow)]
pub struct AdminUserEntity {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub role: AdminRoleDb,
    pub created_at: DateTime<Utc>,
}

impl From<AdminUserEntity> for AdminUser {
    fn from(e: AdminUserEntity) -> Self {
        AdminUser {
            id: e.id,
            email: e.email,
            role: e.role.into(),
            created_at: e.created_at,
        }
    }
}
