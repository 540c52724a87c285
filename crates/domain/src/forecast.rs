//! Fetched forecast data
//!
//! The aligned numeric series handed from the weather integration to the
//! aggregator.

use chrono::NaiveDate;

/// Forecast series for the query window.
///
/// Invariant: `precipitation_sum`, `temperature_max` and `temperature_min`
/// are index-aligned to `days`, which is in ascending date order.
/// `relative_humidity` is hourly, in ascending time order, starting at the
/// first hour of the window. The weather integration validates alignment
/// before constructing this type; consumers may rely on it without
/// re-checking lengths.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastData {
    /// Forecast dates, ascending
    pub days: Vec<NaiveDate>,
    /// Daily precipitation sum in mm, aligned to `days`
    pub precipitation_sum: Vec<f64>,
    /// Daily maximum temperature in °C, aligned to `days`
    pub temperature_max: Vec<f64>,
    /// Daily minimum temperature in °C, aligned to `days`
    pub temperature_min: Vec<f64>,
    /// Hourly relative humidity percentage, ascending from the window start
    pub relative_humidity: Vec<f64>,
}

impl ForecastData {
    /// Number of forecast days in the window
    #[must_use]
    pub fn day_count(&self) -> usize {
        self.days.len()
    }
}
