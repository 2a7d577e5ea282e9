//! HTTP adapter for liveness and status checks.

mod dto;
mod handlers;
mod routes;

pub use dto::{ApiKeyStatus, HealthResponse, StatusResponse, API_VERSION, SERVICE_NAME};
pub use handlers::HealthHandlers;
pub use routes::health_routes;
