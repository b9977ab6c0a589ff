//! Ramadan schedule generation.
//!
//! Produces the 30 placeholder rows that replace the existing schedule when an
//! admin regenerates it from a start date. Times and the imam name are
//! placeholders the admin edits afterwards, day by day.

use chrono::{Duration, NaiveDate};

use crate::models::ramadan::NewRamadanDay;

/// Ramadan spans 30 rows regardless of the actual moon sighting; day 30 is
/// simply unused in a 29-day year.
pub const RAMADAN_DAYS: i32 = 30;

const PLACEHOLDER_SUHOOR: &str = "05:30 AM";
const PLACEHOLDER_IFTAR: &str = "07:15 PM";
const PLACEHOLDER_IMAM: &str = "Guest Qari";

/// Builds the full 30-day schedule starting at `start_date`.
///
/// Row `n` (1-based) carries `start_date + (n - 1)` days. Every row starts
/// unsponsored with a blank sponsor name.
pub fn build_schedule(start_date: NaiveDate) -> Vec<NewRamadanDay> {
    (0..RAMADAN_DAYS)
        .map(|offset| NewRamadanDay {
            day_number: offset + 1,
            gregorian_date: start_date + Duration::days(offset as i64),
            suhoor_time: PLACEHOLDER_SUHOOR.to_string(),
            iftar_time: PLACEHOLDER_IFTAR.to_string(),
            taraweeh_imam: PLACEHOLDER_IMAM.to_string(),
            is_sponsored: false,
            iftar_sponsor: String::new(),
        })
        .collect()
}
