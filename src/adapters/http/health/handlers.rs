//! HTTP handlers for health and status endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::domain::foundation::Timestamp;
use crate::ports::{ProviderInfo, SessionStore};

use super::dto::{
    ApiKeyStatus, HealthResponse, StatusResponse, API_VERSION, PUBLIC_ENDPOINTS, SECURITY_NOTE,
    SERVICE_NAME, SERVICE_STATUS,
};

#[derive(Clone)]
pub struct HealthHandlers {
    store: Arc<dyn SessionStore>,
    provider: ProviderInfo,
}

impl HealthHandlers {
    pub fn new(store: Arc<dyn SessionStore>, provider: ProviderInfo) -> Self {
        Self { store, provider }
    }
}

/// GET / - Liveness check
pub async fn health_check(State(handlers): State<HealthHandlers>) -> Response {
    let response = HealthResponse {
        status: SERVICE_STATUS.to_string(),
        version: API_VERSION.to_string(),
        security: SECURITY_NOTE.to_string(),
        api_key_status: ApiKeyStatus::from_configured(handlers.provider.configured),
        timestamp: Timestamp::now().to_rfc3339(),
    };
    (StatusCode::OK, Json(response)).into_response()
}

/// GET /api/status - Operational status
pub async fn api_status(State(handlers): State<HealthHandlers>) -> Response {
    let active_sessions = match handlers.store.count().await {
        Ok(count) => count,
        Err(e) => {
            tracing::error!(error = %e, "failed to count sessions");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal(e.to_string())),
            )
                .into_response();
        }
    };

    let response = StatusResponse {
        service: SERVICE_NAME.to_string(),
        groq_configured: handlers.provider.configured,
        active_sessions,
        endpoints: PUBLIC_ENDPOINTS.iter().map(|e| e.to_string()).collect(),
    };
    (StatusCode::OK, Json(response)).into_response()
}
