//! Weekly prayer times repository (singleton, like the profile).

use domain::models::prayer_times::{PrayerTimes, UpsertPrayerTimesRequest};
use sqlx::PgPool;

use crate::entities::PrayerTimesEntity;

/// Repository for the singleton weekly schedule.
#[derive(Clone)]
pub struct PrayerTimesRepository {
    pool: PgPool,
}

impl PrayerTimesRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetch the schedule, if one has been saved.
    pub async fn get(&self) -> Result<Option<PrayerTimes>, sqlx::Error> {
        let entity = sqlx::query_as::<_, PrayerTimesEntity>(
            "SELECT id, fajr, dhuhr, asr, maghrib, isha, jumua, notes FROM prayer_times_weekly",
        )
        .fetch_optional(&self.pool)
        .await?;

        Ok(entity.map(PrayerTimes::from))
    }

    /// Create or replace the weekly schedule.
    pub async fn upsert(
        &self,
        request: &UpsertPrayerTimesRequest,
    ) -> Result<PrayerTimes, sqlx::Error> {
        let entity = sqlx::query_as::<_, PrayerTimesEntity>(
            r#"
            INSERT INTO prayer_times_weekly (fajr, dhuhr, asr, maghrib, isha, jumua, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (singleton_guard) DO UPDATE SET
                fajr = EXCLUDED.fajr,
                dhuhr = EXCLUDED.dhuhr,
                asr = EXCLUDED.asr,
                maghrib = EXCLUDED.maghrib,
                isha = EXCLUDED.isha,
                jumua = EXCLUDED.jumua,
                notes = EXCLUDED.notes
            RETURNING id, fajr, dhuhr, asr, maghrib, isha, jumua, notes
            "#,
        )
        .bind(&request.fajr)
        .bind(&request.dhuhr)
        .bind(&request.asr)
        .bind(&request.maghrib)
        .bind(&request.isha)
        .bind(&request.jumua)
        .bind(&request.notes)
        .fetch_one(&self.pool)
        .await?;

        Ok(entity.into())
    }
}
