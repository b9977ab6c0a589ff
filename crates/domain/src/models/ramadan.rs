//! Ramadan schedule models: a 30-day iftar/suhoor table regenerated
//! wholesale from a start date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::validation::{validate_not_blank, validate_time_label};
use uuid::Uuid;
use validator::Validate;

/// One day of the Ramadan schedule.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RamadanDay {
    pub id: Uuid,
    /// 1 through 30.
    pub day_number: i32,
    pub gregorian_date: NaiveDate,
    pub suhoor_time: String,
    pub iftar_time: String,
    pub taraweeh_imam: String,
    pub is_sponsored: bool,
    /// Blank when unsponsored.
    pub iftar_sponsor: String,
}

/// A schedule row before insertion, produced by the generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRamadanDay {
    pub day_number: i32,
    pub gregorian_date: NaiveDate,
    pub suhoor_time: String,
    pub iftar_time: String,
    pub taraweeh_imam: String,
    pub is_sponsored: bool,
    pub iftar_sponsor: String,
}

/// Request to destructively regenerate the 30-day schedule. The start date is
/// required; there is no silent default.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegenerateScheduleRequest {
    pub start_date: NaiveDate,
}

/// Per-day edit: times, imam, and sponsorship.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRamadanDayRequest {
    #[validate(custom(function = "validate_time_label"))]
    pub suhoor_time: Option<String>,

    #[validate(custom(function = "validate_time_label"))]
    pub iftar_time: Option<String>,

    #[validate(custom(function = "validate_not_blank"), length(max = 100))]
    pub taraweeh_imam: Option<String>,

    pub is_sponsored: Option<bool>,

    #[validate(length(max = 200, message = "Sponsor name must be at most 200 characters"))]
    pub iftar_sponsor: Option<String>,
}

impl UpdateRamadanDayRequest {
    /// An update that un-sponsors a day also clears the stored sponsor name,
    /// so the day reads as open again with no stale sponsor attached.
    pub fn normalized(mut self) -> Self {
        if self.is_sponsored == Some(false) {
            self.iftar_sponsor = Some(String::new());
        }
        self
    }
}
