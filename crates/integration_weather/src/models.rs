//! Wire models for the Open-Meteo response
//!
//! Types mirroring the provider's JSON shape, plus the validated conversion
//! into `domain::ForecastData`.

use chrono::NaiveDate;
use domain::ForecastData;
use serde::Deserialize;

use crate::client::WeatherError;

/// Top-level Open-Meteo forecast response
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    /// Daily series block
    pub daily: Option<DailyData>,
    /// Hourly series block
    pub hourly: Option<HourlyData>,
}

/// Daily series, aligned to `time`
#[derive(Debug, Clone, Deserialize)]
pub struct DailyData {
    /// Forecast dates as `YYYY-MM-DD`, ascending
    pub time: Vec<String>,
    /// Precipitation sum in mm
    pub precipitation_sum: Vec<f64>,
    /// Maximum temperature in °C
    pub temperature_2m_max: Vec<f64>,
    /// Minimum temperature in °C
    pub temperature_2m_min: Vec<f64>,
    /// Maximum wind speed in km/h (requested but not aggregated)
    #[serde(default)]
    pub windspeed_10m_max: Option<Vec<f64>>,
}

/// Hourly series, aligned to `time`
#[derive(Debug, Clone, Deserialize)]
pub struct HourlyData {
    /// Hour stamps, ascending
    pub time: Vec<String>,
    /// Relative humidity percentage
    pub relative_humidity_2m: Vec<f64>,
}

impl ApiResponse {
    /// Convert the wire response into the domain forecast series.
    ///
    /// The provider aligns all series to its `time` arrays; that alignment is
    /// checked here so a truncated or shifted response fails loudly instead
    /// of silently pairing values with the wrong day.
    pub fn try_into_forecast(self) -> Result<ForecastData, WeatherError> {
        let daily = self
            .daily
            .ok_or_else(|| WeatherError::Parse("no daily block in response".to_string()))?;
        let hourly = self
            .hourly
            .ok_or_else(|| WeatherError::Parse("no hourly block in response".to_string()))?;

        let expected = daily.time.len();
        check_aligned("precipitation_sum", expected, daily.precipitation_sum.len())?;
        check_aligned(
            "temperature_2m_max",
            expected,
            daily.temperature_2m_max.len(),
        )?;
        check_aligned(
            "temperature_2m_min",
            expected,
            daily.temperature_2m_min.len(),
        )?;
        check_aligned(
            "relative_humidity_2m",
            hourly.time.len(),
            hourly.relative_humidity_2m.len(),
        )?;

        let days = daily
            .time
            .iter()
            .map(|s| {
                NaiveDate::parse_from_str(s, "%Y-%m-%d")
                    .map_err(|e| WeatherError::Parse(format!("invalid date {s:?}: {e}")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ForecastData {
            days,
            precipitation_sum: daily.precipitation_sum,
            temperature_max: daily.temperature_2m_max,
            temperature_min: daily.temperature_2m_min,
            relative_humidity: hourly.relative_humidity_2m,
        })
    }
}

fn check_aligned(series: &'static str, expected: usize, actual: usize) -> Result<(), WeatherError> {
    if expected == actual {
        Ok(())
    } else {
        Err(WeatherError::MisalignedSeries {
            series,
            expected,
            actual,
        })
    }
}
