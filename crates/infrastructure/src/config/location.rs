//! Forecast location configuration.

use serde::{Deserialize, Serialize};

/// Geographic location the forecast is fetched for.
///
/// Explicit configuration rather than module constants, so a different
/// deployment can point the service elsewhere without code changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoLocationConfig {
    /// Display name echoed in responses
    #[serde(default = "default_name")]
    pub name: String,

    /// Latitude (-90.0 to 90.0)
    #[serde(default = "default_latitude")]
    pub latitude: f64,

    /// Longitude (-180.0 to 180.0)
    #[serde(default = "default_longitude")]
    pub longitude: f64,
}

fn default_name() -> String {
    "Leticia, Amazonas - Colombia".to_string()
}

const fn default_latitude() -> f64 {
    -4.2153
}

const fn default_longitude() -> f64 {
    -69.9406
}

impl Default for GeoLocationConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            latitude: default_latitude(),
            longitude: default_longitude(),
        }
    }
}
