//! Ramadan schedule routes.
//!
//! The public listing decorates each unsponsored day with a pre-filled
//! WhatsApp sponsorship link built from the profile phone number.

use axum::{
    extract::{Path, State},
    Json,
};
use domain::models::ramadan::{RamadanDay, RegenerateScheduleRequest, UpdateRamadanDayRequest};
use domain::services::schedule::build_schedule;
use domain::services::sharing::sponsorship_link;
use persistence::repositories::{ProfileRepository, RamadanRepository};
use serde::Serialize;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::AdminAuth;

/// One schedule day as shown on the public Ramadan page.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicRamadanDay {
    #[serde(flatten)]
    pub day: RamadanDay,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sponsorship_link: Option<String>,
}

/// The schedule with sponsorship links for open days.
///
/// GET /api/v1/ramadan
pub async fn list_public(
    State(state): State<AppState>,
) -> Result<Json<Vec<PublicRamadanDay>>, ApiError> {
    let days = RamadanRepository::new(state.pool.clone()).list().await?;

    let phone = ProfileRepository::new(state.pool.clone())
        .get()
        .await?
        .map(|profile| profile.phone)
        .unwrap_or_default();

    let days = days
        .into_iter()
        .map(|day| {
            let link = if day.is_sponsored {
                None
            } else {
                sponsorship_link(&phone, day.day_number, day.gregorian_date)
            };
            PublicRamadanDay {
                day,
                sponsorship_link: link,
            }
        })
        .collect();

    Ok(Json(days))
}

/// The raw schedule for the admin screens.
///
/// GET /api/v1/admin/ramadan
pub async fn list_admin(
    State(state): State<AppState>,
    _auth: AdminAuth,
) -> Result<Json<Vec<RamadanDay>>, ApiError> {
    let days = RamadanRepository::new(state.pool.clone()).list().await?;
    Ok(Json(days))
}

/// Destructively replace the schedule with 30 placeholder days starting at
/// the given date. Existing per-day edits are lost.
///
/// POST /api/v1/admin/ramadan/regenerate
pub async fn regenerate(
    State(state): State<AppState>,
    auth: AdminAuth,
    Json(request): Json<RegenerateScheduleRequest>,
) -> Result<Json<Vec<RamadanDay>>, ApiError> {
    request.validate()?;

    let days = build_schedule(request.start_date);
    let stored = RamadanRepository::new(state.pool.clone())
        .replace_schedule(&days)
        .await?;

    tracing::info!(user_id = %auth.user_id, start_date = %request.start_date, "Ramadan schedule regenerated");

    Ok(Json(stored))
}

/// Update one day's times, imam, or sponsorship.
///
/// PUT /api/v1/admin/ramadan/days/:day
pub async fn update_day(
    State(state): State<AppState>,
    auth: AdminAuth,
    Path(day_number): Path<i32>,
    Json(request): Json<UpdateRamadanDayRequest>,
) -> Result<Json<RamadanDay>, ApiError> {
    request.validate()?;
    let request = request.normalized();

    let day = RamadanRepository::new(state.pool.clone())
        .update_day(day_number, &request)
        .await?
        .ok_or_else(|| ApiError::NotFound("Schedule day not found".into()))?;

    tracing::info!(user_id = %auth.user_id, day = day_number, "Ramadan day updated");

    Ok(Json(day))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn day(is_sponsored: bool) -> RamadanDay {
        RamadanDay {
            id: Uuid::new_v4(),
            day_number: 3,
            gregorian_date: NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
            suhoor_time: "05:30 AM".into(),
            iftar_time: "07:15 PM".into(),
            taraweeh_imam: "Guest Qari".into(),
            is_sponsored,
            iftar_sponsor: String::new(),
        }
    }

    #[test]
    fn test_sponsored_day_serializes_without_link() {
        let public = PublicRamadanDay {
            day: day(true),
            sponsorship_link: None,
        };
        let json = serde_json::to_string(&public).unwrap();
        assert!(!json.contains("sponsorshipLink"));
        assert!(json.contains("\"dayNumber\":3"));
    }

    #[test]
    fn test_open_day_serializes_with_link() {
        let public = PublicRamadanDay {
            day: day(false),
            sponsorship_link: sponsorship_link(
                "732-322-5221",
                3,
                NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
            ),
        };
        let json = serde_json::to_string(&public).unwrap();
        assert!(json.contains("\"sponsorshipLink\":\"https://wa.me/7323225221?"));
    }
}
