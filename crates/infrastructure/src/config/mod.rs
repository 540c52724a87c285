//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `weather`: Open-Meteo client settings
//! - `location`: the fixed forecast location
//!
//! Values come from defaults, an optional `config.toml`, and `CALENDARIO_*`
//! environment variables, in that precedence order.

mod location;
mod server;
mod weather;

use serde::{Deserialize, Serialize};

pub use location::GeoLocationConfig;
pub use server::ServerConfig;
pub use weather::WeatherConfig;

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Open-Meteo client settings
    #[serde(default)]
    pub weather: WeatherConfig,

    /// Location the forecast is fetched for
    #[serde(default)]
    pub location: GeoLocationConfig,
}

impl AppConfig {
    /// Load configuration from file and environment.
    ///
    /// Reads `config.toml` from the working directory if present, then
    /// applies environment overrides such as `CALENDARIO_SERVER_PORT`.
    ///
    /// # Errors
    ///
    /// Returns a `config::ConfigError` if a source cannot be parsed or a
    /// value fails to deserialize.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("CALENDARIO")
                    .separator("_")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
