//! Masjid profile entity definitions for database queries.

use chrono::{DateTime, Utc};
use domain::models::profile::MasjidProfile;
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the singleton profile record.
#[derive(Debug, Clone, FromRow)]
pub struct MasjidProfileEntity {
    pub id: Uuid,
    pub official_name: String,
    pub common_name: String,
    pub address: String,
    pub imam_name: String,
    pub phone: String,
    pub email: String,
    pub jumua_time: String,
    pub whatsapp_link: Option<String>,
    pub facilities_image_url: Option<String>,
    pub bank_name: Option<String>,
    pub bank_account_name: Option<String>,
    pub bank_account_number: Option<String>,
    pub zelle_contact: Option<String>,
    pub paypal_link: Option<String>,
    pub launchgood_link: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl From<MasjidProfileEntity> for MasjidProfile {
    fn from(e: MasjidProfileEntity) -> Self {
        MasjidProfile {
            id: e.id,
            official_name: e.official_name,
            common_name: e.common_name,
            address: e.address,
            imam_name: e.imam_name,
            phone: e.phone,
            email: e.email,
            jumua_time: e.jumua_time,
            whatsapp_link: e.whatsapp_link,
            facilities_image_url: e.facilities_image_url,
            bank_name: e.bank_name,
            bank_account_name: e.bank_account_name,
            bank_account_number: e.bank_account_number,
            zelle_contact: e.zelle_contact,
            paypal_link: e.paypal_link,
            launchgood_link: e.launchgood_link,
            updated_at: e.updated_at,
        }
    }
}
