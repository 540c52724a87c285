//! Domain layer for the Amazon climate calendar
//!
//! Contains the pure aggregation and classification logic: reducing a fetched
//! forecast to scalar climate statistics and mapping average precipitation to
//! an ecological cycle label. No I/O happens here.

pub mod climate;
pub mod forecast;

pub use climate::{ClimateSummary, EcologicalCycle};
pub use forecast::ForecastData;
