//! Masjid profile repository.
//!
//! The profile is a singleton: a guard column constrains the table to one
//! row and upserts conflict on it. Donation settings are written only when
//! the caller's role allows it; otherwise the stored values are kept.

use domain::models::profile::{MasjidProfile, UpsertProfileRequest};
use sqlx::PgPool;

use crate::entities::MasjidProfileEntity;

const PROFILE_COLUMNS: &str = r#"
    id, official_name, common_name, address, imam_name, phone, email,
    jumua_time, whatsapp_link, facilities_image_url, bank_name,
    bank_account_name, bank_account_number, zelle_contact, paypal_link,
    launchgood_link, updated_at
"#;

/// Repository for the singleton organization profile.
#[derive(Clone)]
pub struct ProfileRepository {
    pool: PgPool,
}

impl ProfileRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetch the profile, if one has been created.
    pub async fn get(&self) -> Result<Option<MasjidProfile>, sqlx::Error> {
        let entity = sqlx::query_as::<_, MasjidProfileEntity>(&format!(
            "SELECT {} FROM masjid_profile",
            PROFILE_COLUMNS
        ))
        .fetch_optional(&self.pool)
        .await?;

        Ok(entity.map(MasjidProfile::from))
    }

    /// Create or replace the profile. When `include_financials` is false the
    /// donation settings columns are left untouched on update and inserted
    /// as NULL on first creation.
    pub async fn upsert(
        &self,
        request: &UpsertProfileRequest,
        include_financials: bool,
    ) -> Result<MasjidProfile, sqlx::Error> {
        let entity = if include_financials {
            sqlx::query_as::<_, MasjidProfileEntity>(&format!(
                r#"
                INSERT INTO masjid_profile (
                    official_name, common_name, address, imam_name, phone,
                    email, jumua_time, whatsapp_link, facilities_image_url,
                    bank_name, bank_account_name, bank_account_number,
                    zelle_contact, paypal_link, launchgood_link
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
                ON CONFLICT (singleton_guard) DO UPDATE SET
                    official_name = EXCLUDED.official_name,
                    common_name = EXCLUDED.common_name,
                    address = EXCLUDED.address,
                    imam_name = EXCLUDED.imam_name,
                    phone = EXCLUDED.phone,
                    email = EXCLUDED.email,
                    jumua_time = EXCLUDED.jumua_time,
                    whatsapp_link = EXCLUDED.whatsapp_link,
                    facilities_image_url = EXCLUDED.facilities_image_url,
                    bank_name = EXCLUDED.bank_name,
                    bank_account_name = EXCLUDED.bank_account_name,
                    bank_account_number = EXCLUDED.bank_account_number,
                    zelle_contact = EXCLUDED.zelle_contact,
                    paypal_link = EXCLUDED.paypal_link,
                    launchgood_link = EXCLUDED.launchgood_link,
                    updated_at = NOW()
                RETURNING {}
                "#,
                PROFILE_COLUMNS
            ))
            .bind(&request.official_name)
            .bind(&request.common_name)
            .bind(&request.address)
            .bind(&request.imam_name)
            .bind(&request.phone)
            .bind(&request.email)
            .bind(&request.jumua_time)
            .bind(&request.whatsapp_link)
            .bind(&request.facilities_image_url)
            .bind(&request.bank_name)
            .bind(&request.bank_account_name)
            .bind(&request.bank_account_number)
            .bind(&request.zelle_contact)
            .bind(&request.paypal_link)
            .bind(&request.launchgood_link)
            .fetch_one(&self.pool)
            .await?
        } else {
            sqlx::query_as::<_, MasjidProfileEntity>(&format!(
                r#"
                INSERT INTO masjid_profile (
                    official_name, common_name, address, imam_name, phone,
                    email, jumua_time, whatsapp_link, facilities_image_url
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
                ON CONFLICT (singleton_guard) DO UPDATE SET
                    official_name = EXCLUDED.official_name,
                    common_name = EXCLUDED.common_name,
                    address = EXCLUDED.address,
                    imam_name = EXCLUDED.imam_name,
                    phone = EXCLUDED.phone,
                    email = EXCLUDED.email,
                    jumua_time = EXCLUDED.jumua_time,
                    whatsapp_link = EXCLUDED.whatsapp_link,
                    facilities_image_url = EXCLUDED.facilities_image_url,
                    updated_at = NOW()
                RETURNING {}
                "#,
                PROFILE_COLUMNS
            ))
            .bind(&request.official_name)
            .bind(&request.common_name)
            .bind(&request.address)
            .bind(&request.imam_name)
            .bind(&request.phone)
            .bind(&request.email)
            .bind(&request.jumua_time)
            .bind(&request.whatsapp_link)
            .bind(&request.facilities_image_url)
            .fetch_one(&self.pool)
            .await?
        };

        Ok(entity.into())
    }
}
