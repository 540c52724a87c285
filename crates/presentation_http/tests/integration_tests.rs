//! Integration tests for HTTP handlers
#![allow(clippy::expect_used)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use axum_test::TestServer;
use chrono::NaiveDate;
use chrono_tz::America::Bogota;
use domain::ForecastData;
use integration_weather::{ForecastProvider, WeatherError};
use presentation_http::{create_router, state::AppState};
use serde_json::Value;

/// What the mock provider should do when called
enum MockOutcome {
    /// Return the reference forecast fixture
    Fixture,
    /// Fail at the transport level
    Upstream,
    /// Fail while decoding the response
    Malformed,
}

struct MockForecast {
    outcome: MockOutcome,
}

#[async_trait]
impl ForecastProvider for MockForecast {
    async fn fetch_forecast(&self, today: NaiveDate) -> Result<ForecastData, WeatherError> {
        match self.outcome {
            MockOutcome::Fixture => Ok(ForecastData {
                days: (0..3).map(|i| today + chrono::Days::new(i)).collect(),
                precipitation_sum: vec![10.0, 6.0, 0.0],
                temperature_max: vec![30.0, 31.0],
                temperature_min: vec![22.0, 23.0],
                relative_humidity: vec![88.5],
            }),
            MockOutcome::Upstream => Err(WeatherError::RequestFailed(
                "connection refused".to_string(),
            )),
            MockOutcome::Malformed => Err(WeatherError::Parse(
                "no daily block in response".to_string(),
            )),
        }
    }
}

fn test_server(outcome: MockOutcome) -> TestServer {
    let state = AppState::new(
        Arc::new(MockForecast { outcome }),
        "Leticia, Amazonas - Colombia",
    );
    TestServer::new(create_router(state)).expect("failed to start test server")
}

/// Today as the climate handler computes it
fn bogota_today() -> String {
    chrono::Utc::now()
        .with_timezone(&Bogota)
        .date_naive()
        .format("%Y-%m-%d")
        .to_string()
}

#[tokio::test]
async fn root_reports_api_info() {
    let server = test_server(MockOutcome::Fixture);

    let response = server.get("/").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(
        body["message"],
        "API del Calendario Amazónico Biosemiótico - Solo Clima"
    );
    assert_eq!(body["version"], "1.0");
    let endpoints = body["endpoints"].as_array().expect("endpoints array");
    assert_eq!(endpoints.len(), 1);
}

#[tokio::test]
async fn health_reports_ok() {
    let server = test_server(MockOutcome::Fixture);

    let response = server.get("/health").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn climate_round_trip_matches_fixture() {
    let server = test_server(MockOutcome::Fixture);

    let response = server.get("/api/v1/climate/7").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["season_id"], 7);
    assert_eq!(body["location"], "Leticia, Amazonas - Colombia");
    assert_eq!(body["date"], bogota_today());

    // mean precipitation 16/3 ≈ 5.33 -> rainy season
    let climate = &body["climate"];
    assert_eq!(climate["cycle"], "Temporada de lluvias 🌧️🌧️");
    assert_eq!(climate["precipitation_today"], 10.0);
    assert_eq!(climate["precipitation_avg"], 5.33);
    assert_eq!(climate["temperature_range"], "22.5-30.5°C");
    assert_eq!(climate["humidity"], "88.5%");
}

#[tokio::test]
async fn season_id_is_echoed_verbatim() {
    let server = test_server(MockOutcome::Fixture);

    for season_id in [0i64, -42, 9_999_999] {
        let response = server.get(&format!("/api/v1/climate/{season_id}")).await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["season_id"], season_id);
    }
}

#[tokio::test]
async fn non_integer_season_id_is_rejected() {
    let server = test_server(MockOutcome::Fixture);

    let response = server.get("/api/v1/climate/wet-season").await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn upstream_failure_maps_to_503_with_detail() {
    let server = test_server(MockOutcome::Upstream);

    let response = server.get("/api/v1/climate/1").await;
    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let body: Value = response.json();
    let detail = body["detail"].as_str().expect("detail string");
    assert!(detail.starts_with("Error conectando con Open-Meteo: "));
    assert!(detail.contains("connection refused"));
}

#[tokio::test]
async fn processing_failure_maps_to_500_with_detail() {
    let server = test_server(MockOutcome::Malformed);

    let response = server.get("/api/v1/climate/1").await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = response.json();
    let detail = body["detail"].as_str().expect("detail string");
    assert!(detail.starts_with("Error procesando datos climáticos: "));
    assert!(detail.contains("no daily block"));
}

#[tokio::test]
async fn unknown_route_is_404() {
    let server = test_server(MockOutcome::Fixture);

    let response = server.get("/api/v1/seasons").await;
    response.assert_status(StatusCode::NOT_FOUND);
}
