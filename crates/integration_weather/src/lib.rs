//! Open-Meteo forecast integration
//!
//! Fetches the fixed-location forecast window from the Open-Meteo API
//! (<https://open-meteo.com>) and converts it into the domain's aligned
//! forecast series. No API key required.

pub mod client;
mod models;

pub use client::{ForecastProvider, ForecastQuery, OpenMeteoClient, OpenMeteoConfig, WeatherError};
