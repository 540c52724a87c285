//! Application state shared across handlers

use std::sync::Arc;

use integration_weather::ForecastProvider;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Forecast fetcher for the fixed location
    pub forecast: Arc<dyn ForecastProvider>,
    /// Display name of the location, echoed in responses
    pub location_name: Arc<str>,
}

impl AppState {
    /// Create state from a provider and a location display name
    pub fn new(forecast: Arc<dyn ForecastProvider>, location_name: &str) -> Self {
        Self {
            forecast,
            location_name: Arc::from(location_name),
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("forecast", &"<ForecastProvider>")
            .field("location_name", &self.location_name)
            .finish()
    }
}
