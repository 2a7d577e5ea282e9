//! HTTP DTOs for health and status endpoints.

use serde::{Deserialize, Serialize};

pub const SERVICE_STATUS: &str = "🟢 Legalgram Brain Online";
pub const SERVICE_NAME: &str = "Legalgram AI Backend";
pub const API_VERSION: &str = "2.0.0";
pub const SECURITY_NOTE: &str = "MAXIMUM - Server-Side Keys";

/// Public endpoint groups advertised by the status endpoint.
pub const PUBLIC_ENDPOINTS: [&str; 3] = ["/api/chat", "/api/session", "/api/documents"];

/// Whether the completion provider has a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ApiKeyStatus {
    Configured,
    Missing,
}

impl ApiKeyStatus {
    pub fn from_configured(configured: bool) -> Self {
        if configured {
            ApiKeyStatus::Configured
        } else {
            ApiKeyStatus::Missing
        }
    }
}

/// Liveness check body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub security: String,
    pub api_key_status: ApiKeyStatus,
    pub timestamp: String,
}

/// Operational status body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub service: String,
    pub groq_configured: bool,
    pub active_sessions: usize,
    pub endpoints: Vec<String>,
}
