//! Root and health handlers

use axum::Json;
use serde::{Deserialize, Serialize};

/// Root endpoint response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiInfo {
    pub message: String,
    pub version: String,
    pub endpoints: Vec<String>,
}

/// API information
///
/// GET /
pub async fn root() -> Json<ApiInfo> {
    Json(ApiInfo {
        message: "API del Calendario Amazónico Biosemiótico - Solo Clima".to_string(),
        version: "1.0".to_string(),
        endpoints: vec![
            "/api/v1/climate/{season_id} - Datos climáticos en tiempo real por estación"
                .to_string(),
        ],
    })
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Liveness check - is the server running?
///
/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
