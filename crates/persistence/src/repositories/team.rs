//! Team member repository.

use domain::models::team_member::{CreateTeamMemberRequest, TeamMember, UpdateTeamMemberRequest};
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::TeamMemberEntity;

const MEMBER_COLUMNS: &str = "id, name, role_title, bio, image_url, sort_order";

/// Repository for leadership team members.
#[derive(Clone)]
pub struct TeamRepository {
    pool: PgPool,
}

impl TeamRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All members in display order.
    pub async fn list(&self) -> Result<Vec<TeamMember>, sqlx::Error> {
        let entities = sqlx::query_as::<_, TeamMemberEntity>(&format!(
            "SELECT {} FROM team_members ORDER BY sort_order ASC, name ASC",
            MEMBER_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(entities.into_iter().map(TeamMember::from).collect())
    }

    pub async fn create(
        &self,
        request: &CreateTeamMemberRequest,
    ) -> Result<TeamMember, sqlx::Error> {
        let entity = sqlx::query_as::<_, TeamMemberEntity>(&format!(
            r#"
            INSERT INTO team_members (name, role_title, bio, image_url, sort_order)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {}
            "#,
            MEMBER_COLUMNS
        ))
        .bind(&request.name)
        .bind(&request.role_title)
        .bind(&request.bio)
        .bind(&request.image_url)
        .bind(request.sort_order)
        .fetch_one(&self.pool)
        .await?;

        Ok(entity.into())
    }

    /// Partial update; absent fields keep their stored values.
    pub async fn update(
        &self,
        id: Uuid,
        request: &UpdateTeamMemberRequest,
    ) -> Result<Option<TeamMember>, sqlx::Error> {
        let entity = sqlx::query_as::<_, TeamMemberEntity>(&format!(
            r#"
            UPDATE team_members SET
                name = COALESCE($2, name),
                role_title = COALESCE($3, role_title),
                bio = COALESCE($4, bio),
                image_url = COALESCE($5, image_url),
                sort_order = COALESCE($6, sort_order)
            WHERE id = $1
            RETURNING {}
            "#,
            MEMBER_COLUMNS
        ))
        .bind(id)
        .bind(&request.name)
        .bind(&request.role_title)
        .bind(&request.bio)
        .bind(&request.image_url)
        .bind(request.sort_order)
        .fetch_optional(&self.pool)
        .await?;

        Ok(entity.map(TeamMember::from))
    }

    /// Delete a member. Returns true when a row was removed.
    pub async fn delete(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM team_members WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
