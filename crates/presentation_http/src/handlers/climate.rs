//! Climate endpoint handler
//!
//! Fetches the forecast window for the fixed location and reduces it to the
//! seasonal climate summary.

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::{NaiveDate, Utc};
use chrono_tz::America::Bogota;
use domain::ClimateSummary;
use serde::Serialize;
use tracing::{info, instrument};

use crate::{error::ApiError, state::AppState};

/// Response for the climate endpoint
#[derive(Debug, Clone, Serialize)]
pub struct SeasonClimateResponse {
    /// Season identifier, echoed verbatim from the path
    pub season_id: i64,
    /// Display name of the fixed location
    pub location: String,
    /// Query window start, `YYYY-MM-DD`
    pub date: String,
    /// Aggregated climate summary
    pub climate: ClimateSummary,
}

/// Today's date at the fixed location.
///
/// Computed in America/Bogota so the window start matches the timezone the
/// provider aligns its series to, independent of where the server runs.
fn local_today() -> NaiveDate {
    Utc::now().with_timezone(&Bogota).date_naive()
}

/// Real-time climate data for a season
///
/// GET /api/v1/climate/{season_id}
///
/// `season_id` is not validated and takes no part in the computation; it is
/// echoed back so clients can correlate the response with their calendar
/// entry.
#[instrument(skip(state))]
pub async fn season_climate(
    State(state): State<AppState>,
    Path(season_id): Path<i64>,
) -> Result<Json<SeasonClimateResponse>, ApiError> {
    let today = local_today();
    let forecast = state.forecast.fetch_forecast(today).await?;
    let summary = ClimateSummary::from_forecast(&forecast);

    info!(
        season_id,
        cycle = %summary.cycle,
        days = forecast.day_count(),
        "Climate summary computed"
    );

    Ok(Json(SeasonClimateResponse {
        season_id,
        location: state.location_name.to_string(),
        date: today.format("%Y-%m-%d").to_string(),
        climate: summary,
    }))
}
