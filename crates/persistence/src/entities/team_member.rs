//! Team member entity definitions for database queries.

use domain::models::team_member::TeamMember;
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for a team member record.
#[derive(Debug, Clone, FromRow)]
pub struct TeamMemberEntity {
    pub id: Uuid,
    pub name: String,
    pub role_title: String,
    pub bio: String,
    pub image_url: Option<String>,
    pub sort_order: i32,
}

impl From<TeamMemberEntity> for TeamMember {
    fn from(e: TeamMemberEntity) -> Self {
        TeamMember {
            id: e.id,
            name: e.name,
            role_title: e.role_title,
            bio: e.bio,
            image_url: e.image_url,
            sort_order: e.sort_order,
        }
    }
}
