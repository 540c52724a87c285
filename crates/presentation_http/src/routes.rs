//! Route definitions

use axum::{Router, routing::get};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // API information
        .route("/", get(handlers::meta::root))
        // Health endpoint
        .route("/health", get(handlers::meta::health_check))
        // Climate API (v1)
        .route(
            "/api/v1/climate/{season_id}",
            get(handlers::climate::season_climate),
        )
        // Attach state
        .with_state(state)
}
