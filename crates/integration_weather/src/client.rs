//! Open-Meteo forecast client
//!
//! Builds the fixed-location query window and issues the single outbound GET
//! per request. One attempt, bounded by a hard timeout; failures surface
//! immediately to the caller.

use async_trait::async_trait;
use chrono::NaiveDate;
use domain::ForecastData;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::ApiResponse;

/// Daily variables requested from the provider
const DAILY_VARIABLES: &str =
    "precipitation_sum,temperature_2m_max,temperature_2m_min,windspeed_10m_max";

/// Hourly variables requested from the provider
const HOURLY_VARIABLES: &str = "relative_humidity_2m";

/// Forecast fetcher errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The HTTP client could not be initialized
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The outbound call could not complete (transport failure, timeout,
    /// or a non-2xx status)
    #[error("request failed: {0}")]
    RequestFailed(String),

    /// The provider answered with a server error
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),

    /// The response body could not be decoded into the expected shape
    #[error("unexpected response shape: {0}")]
    Parse(String),

    /// A series does not line up with the provider's time axis
    #[error("series {series} has {actual} entries, expected {expected}")]
    MisalignedSeries {
        /// Name of the offending series
        series: &'static str,
        /// Length of the time axis
        expected: usize,
        /// Length actually received
        actual: usize,
    },

    /// Configured coordinates are out of range
    #[error("invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,
}

impl WeatherError {
    /// Whether the failure happened at the transport/HTTP level, i.e. the
    /// provider never delivered a usable response body.
    #[must_use]
    pub const fn is_upstream(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_) | Self::RequestFailed(_) | Self::ServiceUnavailable(_)
        )
    }
}

/// Fetcher configuration: the fixed location plus client settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenMeteoConfig {
    /// Open-Meteo API base URL (default: <https://api.open-meteo.com/v1>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Hard ceiling for the outbound call in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Length of the forecast window in days (default: 10)
    #[serde(default = "default_forecast_days")]
    pub forecast_days: u8,

    /// Latitude of the fixed location
    pub latitude: f64,

    /// Longitude of the fixed location
    pub longitude: f64,

    /// IANA timezone the provider aligns the series to
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

fn default_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

const fn default_timeout() -> u64 {
    10
}

const fn default_forecast_days() -> u8 {
    10
}

fn default_timezone() -> String {
    "America/Bogota".to_string()
}

/// Query window for one forecast request.
///
/// Constructed per request from the current date; immutable once built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastQuery {
    /// Latitude of the fixed location
    pub latitude: f64,
    /// Longitude of the fixed location
    pub longitude: f64,
    /// First day of the window (today)
    pub start_date: NaiveDate,
    /// Last day of the window (today + forecast days)
    pub end_date: NaiveDate,
}

impl ForecastQuery {
    /// Build the window [today, today + `forecast_days`] for the configured
    /// location.
    #[must_use]
    pub fn for_window(config: &OpenMeteoConfig, today: NaiveDate) -> Self {
        Self {
            latitude: config.latitude,
            longitude: config.longitude,
            start_date: today,
            end_date: today + chrono::Days::new(u64::from(config.forecast_days)),
        }
    }
}

/// Forecast provider abstraction, mockable in HTTP-layer tests
#[async_trait]
pub trait ForecastProvider: Send + Sync {
    /// Fetch the forecast window starting at `today`
    async fn fetch_forecast(&self, today: NaiveDate) -> Result<ForecastData, WeatherError>;
}

/// Open-Meteo HTTP client implementation
#[derive(Debug)]
pub struct OpenMeteoClient {
    client: Client,
    config: OpenMeteoConfig,
}

impl OpenMeteoClient {
    /// Create a new Open-Meteo client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCoordinates` for an out-of-range location and
    /// `ConnectionFailed` if the HTTP client cannot be initialized.
    pub fn new(config: OpenMeteoConfig) -> Result<Self, WeatherError> {
        Self::validate_coordinates(config.latitude, config.longitude)?;

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Validate coordinates
    fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), WeatherError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(WeatherError::InvalidCoordinates);
        }
        Ok(())
    }

    /// Build the API URL for the given query window
    fn build_forecast_url(&self, query: &ForecastQuery) -> String {
        format!(
            "{}/forecast?latitude={}&longitude={}&daily={}&hourly={}&timezone={}&start_date={}&end_date={}",
            self.config.base_url,
            query.latitude,
            query.longitude,
            DAILY_VARIABLES,
            HOURLY_VARIABLES,
            self.config.timezone,
            query.start_date.format("%Y-%m-%d"),
            query.end_date.format("%Y-%m-%d"),
        )
    }
}

#[async_trait]
impl ForecastProvider for OpenMeteoClient {
    #[instrument(skip(self), fields(today = %today))]
    async fn fetch_forecast(&self, today: NaiveDate) -> Result<ForecastData, WeatherError> {
        let query = ForecastQuery::for_window(&self.config, today);
        let url = self.build_forecast_url(&query);
        debug!(url = %url, "Fetching forecast window");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status.is_server_error() {
            return Err(WeatherError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(WeatherError::RequestFailed(format!("HTTP {status}")));
        }

        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::Parse(e.to_string()))?;

        api_response.try_into_forecast()
    }
}
