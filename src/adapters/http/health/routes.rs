//! HTTP routes for health and status endpoints.

use axum::{routing::get, Router};

use super::handlers::{api_status, health_check, HealthHandlers};

pub fn health_routes(handlers: HealthHandlers) -> Router {
    Router::new()
        .route("/", get(health_check))
        .route("/api/status", get(api_status))
        .with_state(handlers)
}
