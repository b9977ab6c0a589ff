//! Service entity definitions for database queries.

use domain::models::service::{Service, ServiceIcon};
use sqlx::FromRow;
use uuid::Uuid;

/// Column-level mapping for the `service_icon` enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "service_icon", rename_all = "lowercase")]
pub enum ServiceIconDb {
    Star,
    Graduation,
    Heart,
    Home,
    Users,
    Clock,
}

impl From<ServiceIcon> for ServiceIconDb {
    fn from(icon: ServiceIcon) -> Self {
        match icon {
            ServiceIcon::Star => ServiceIconDb::Star,
            ServiceIcon::Graduation => ServiceIconDb::Graduation,
            ServiceIcon::Heart => ServiceIconDb::Heart,
            ServiceIcon::Home => ServiceIconDb::Home,
            ServiceIcon::Users => ServiceIconDb::Users,
            ServiceIcon::Clock => ServiceIconDb::Clock,
        }
    }
}

impl From<ServiceIconDb> for ServiceIcon {
    fn from(icon: ServiceIconDb) -> Self {
        match icon {
            ServiceIconDb::Star => ServiceIcon::Star,
            ServiceIconDb::Graduation => ServiceIcon::Graduation,
            ServiceIconDb::Heart => ServiceIcon::Heart,
            ServiceIconDb::Home => ServiceIcon::Home,
            ServiceIconDb::Users => ServiceIcon::Users,
            ServiceIconDb::Clock => ServiceIcon::Clock,
        }
    }
}

/// Database row mapping for a service record.
#[derive(Debug, Clone, FromRow)]
pub struct ServiceEntity {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub icon: ServiceIconDb,
    pub sort_order: i32,
}

impl From<ServiceEntity> for Service {
    fn from(e: ServiceEntity) -> Self {
        Service {
            id: e.id,
            title: e.title,
            description: e.description,
            icon: e.icon.into(),
            sort_order: e.sort_order,
        }
    }
}
