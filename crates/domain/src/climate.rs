//! Climate aggregation and cycle classification
//!
//! Reduces the forecast series to scalar statistics and derives the
//! ecological cycle of the Amazon seasonal calendar from average
//! precipitation.

use serde::{Serialize, Serializer};

use crate::forecast::ForecastData;

/// Ecological cycle derived from average precipitation over the window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EcologicalCycle {
    /// Average precipitation above 8 mm/day
    IntenseRains,
    /// Average precipitation above 5 mm/day
    RainySeason,
    /// Average precipitation below 1 mm/day
    IntenseDrought,
    /// Average precipitation below 3 mm/day
    Drought,
    /// Everything in between
    Transition,
}

impl EcologicalCycle {
    /// Classify average precipitation (mm/day) into a cycle.
    ///
    /// The branches are evaluated in this exact order and the first match
    /// wins. The 5/3 thresholds overlap across the `>`/`<` branches, so the
    /// ordering is load-bearing; it reproduces the observed behavior of the
    /// calendar and must not be "normalized" into disjoint ranges.
    #[must_use]
    pub fn from_avg_precipitation(avg: f64) -> Self {
        if avg > 8.0 {
            Self::IntenseRains
        } else if avg > 5.0 {
            Self::RainySeason
        } else if avg < 1.0 {
            Self::IntenseDrought
        } else if avg < 3.0 {
            Self::Drought
        } else {
            Self::Transition
        }
    }

    /// Spanish label with icon suffix, as shown to clients
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::IntenseRains => "Lluvias intensas 🌧️🌧️🌧️",
            Self::RainySeason => "Temporada de lluvias 🌧️🌧️",
            Self::IntenseDrought => "Sequía intensa ☀️☀️☀️",
            Self::Drought => "Sequía ☀️☀️",
            Self::Transition => "Transición ⛅",
        }
    }
}

impl std::fmt::Display for EcologicalCycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Serialize for EcologicalCycle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Scalar climate summary for one query window.
///
/// Derived and transient; numeric fields are stored already rounded, so
/// serialization emits exactly the rounded values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClimateSummary {
    /// Ecological cycle label
    pub cycle: EcologicalCycle,
    /// First day's precipitation sum in mm, 1 decimal
    pub precipitation_today: f64,
    /// Mean daily precipitation in mm, 2 decimals
    pub precipitation_avg: f64,
    /// Mean min/max temperature formatted as `"<min>-<max>°C"`, 1 decimal each
    pub temperature_range: String,
    /// First hour's relative humidity formatted as `"<pct>%"`, 1 decimal
    pub humidity: String,
}

impl ClimateSummary {
    /// Aggregate a forecast into the scalar summary.
    ///
    /// Empty series reduce to zero rather than erroring; classification uses
    /// the unrounded precipitation mean.
    #[must_use]
    pub fn from_forecast(data: &ForecastData) -> Self {
        let precipitation_avg = mean(&data.precipitation_sum);
        let temp_avg_max = mean(&data.temperature_max);
        let temp_avg_min = mean(&data.temperature_min);
        let humidity_now = data.relative_humidity.first().copied().unwrap_or(0.0);
        let precipitation_today = data.precipitation_sum.first().copied().unwrap_or(0.0);

        Self {
            cycle: EcologicalCycle::from_avg_precipitation(precipitation_avg),
            precipitation_today: round_to(precipitation_today, 1),
            precipitation_avg: round_to(precipitation_avg, 2),
            temperature_range: format!(
                "{:.1}-{:.1}°C",
                round_to(temp_avg_min, 1),
                round_to(temp_avg_max, 1)
            ),
            humidity: format!("{:.1}%", round_to(humidity_now, 1)),
        }
    }
}

/// Arithmetic mean, zero for an empty slice
fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        #[allow(clippy::cast_precision_loss)]
        let len = values.len() as f64;
        values.iter().sum::<f64>() / len
    }
}

/// Round to `decimals` decimal places, half away from zero
fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
