//! Weekly prayer times routes.

use axum::{extract::State, Json};
use domain::models::prayer_times::{PrayerTimes, UpsertPrayerTimesRequest};
use persistence::repositories::PrayerTimesRepository;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::AdminAuth;

/// The weekly schedule, as shown on the public site.
///
/// GET /api/v1/prayer-times
pub async fn get_prayer_times(
    State(state): State<AppState>,
) -> Result<Json<PrayerTimes>, ApiError> {
    PrayerTimesRepository::new(state.pool.clone())
        .get()
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Prayer times have not been set up yet".into()))
}

/// Create or replace the weekly schedule.
///
/// PUT /api/v1/admin/prayer-times
pub async fn upsert_prayer_times(
    State(state): State<AppState>,
    auth: AdminAuth,
    Json(request): Json<UpsertPrayerTimesRequest>,
) -> Result<Json<PrayerTimes>, ApiError> {
    request.validate()?;

    let times = PrayerTimesRepository::new(state.pool.clone())
        .upsert(&request)
        .await?;

    tracing::info!(user_id = %auth.user_id, "Prayer times updated");

    Ok(Json(times))
}
