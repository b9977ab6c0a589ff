//! Ramadan schedule entity definitions for database queries.

use chrono::NaiveDate;
use domain::models::ramadan::RamadanDay;
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for one day of the Ramadan schedule.
#[derive(Debug, Clone, FromRow)]
pub struct RamadanDayEntity {
    pub id: Uuid,
    pub day_number: i32,
    pub gregorian_date: NaiveDate,
    pub suhoor_time: String,
    pub iftar_time: String,
    pub taraweeh_imam: String,
    pub is_sponsored: bool,
    pub iftar_sponsor: String,
}

impl From<RamadanDayEntity> for RamadanDay {
    fn from(e: RamadanDayEntity) -> Self {
        RamadanDay {
            id: e.id,
            day_number: e.day_number,
            gregorian_date: e.gregorian_date,
            suhoor_time: e.suhoor_time,
            iftar_time: e.iftar_time,
            taraweeh_imam: e.taraweeh_imam,
            is_sponsored: e.is_sponsored,
            iftar_sponsor: e.iftar_sponsor,
        }
    }
}
