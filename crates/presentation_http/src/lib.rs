//! HTTP presentation layer for the Amazon climate calendar
//!
//! Routes, shared state, error mapping and middleware for the API surface.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use middleware::RequestIdLayer;
pub use routes::create_router;
pub use state::AppState;
