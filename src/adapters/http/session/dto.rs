//! HTTP DTOs for session endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::session::SessionSummary;
use crate::domain::conversation::Stage;

/// Status text reported by every clear request.
pub const SESSION_CLEARED: &str = "Session cleared";

/// Public view of a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub session_id: String,
    pub user_name: Option<String>,
    pub stage: Stage,
    pub message_count: usize,
    pub created_at: String,
}

impl From<SessionSummary> for SessionResponse {
    fn from(summary: SessionSummary) -> Self {
        Self {
            session_id: summary.session_id.to_string(),
            user_name: summary.user_name,
            stage: summary.stage,
            message_count: summary.message_count,
            created_at: summary.created_at.to_rfc3339(),
        }
    }
}

/// Acknowledgement of a clear request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClearSessionResponse {
    pub status: String,
    pub session_id: String,
}

impl ClearSessionResponse {
    pub fn cleared(session_id: impl Into<String>) -> Self {
        Self {
            status: SESSION_CLEARED.to_string(),
            session_id: session_id.into(),
        }
    }
}
