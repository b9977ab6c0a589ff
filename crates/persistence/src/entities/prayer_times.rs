//! Prayer times entity definitions for database queries.

use domain::models::prayer_times::PrayerTimes;
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the singleton weekly schedule record.
#[derive(Debug, Clone, FromRow)]
pub struct PrayerTimesEntity {
    pub id: Uuid,
    pub fajr: String,
    pub dhuhr: String,
    pub asr: String,
    pub maghrib: String,
    pub isha: String,
    pub jumua: String,
    pub notes: Option<String>,
}

impl From<PrayerTimesEntity> for PrayerTimes {
    fn from(e: PrayerTimesEntity) -> Self {
        PrayerTimes {
            id: e.id,
            fajr: e.fajr,
            dhuhr: e.dhuhr,
            asr: e.asr,
            maghrib: e.maghrib,
            isha: e.isha,
            jumua: e.jumua,
            notes: e.notes,
        }
    }
}
