//! API error handling
//!
//! Two failure classes only: the upstream call never completed (503) or its
//! response could not be reduced to a summary (500). Both carry the
//! underlying cause in a `{"detail": ...}` body; nothing is retried or
//! queued for later.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use integration_weather::WeatherError;
use serde::Serialize;
use thiserror::Error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// The outbound Open-Meteo call failed at the transport/HTTP level
    #[error("Error conectando con Open-Meteo: {0}")]
    UpstreamUnavailable(String),

    /// The call succeeded but the data could not be processed
    #[error("Error procesando datos climáticos: {0}")]
    DataProcessing(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    /// Human-readable failure description, cause included
    pub detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::UpstreamUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::DataProcessing(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = ErrorDetail {
            detail: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<WeatherError> for ApiError {
    fn from(err: WeatherError) -> Self {
        if err.is_upstream() {
            Self::UpstreamUnavailable(err.to_string())
        } else {
            Self::DataProcessing(err.to_string())
        }
    }
}
