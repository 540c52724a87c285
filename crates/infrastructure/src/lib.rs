//! Infrastructure layer
//!
//! Configuration loading for the climate calendar API.

pub mod config;

pub use config::{AppConfig, GeoLocationConfig, ServerConfig, WeatherConfig};
