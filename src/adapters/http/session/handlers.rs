//! HTTP handlers for session endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{handle_session_error, ErrorResponse};
use crate::application::handlers::session::{
    ClearSessionCommand, ClearSessionHandler, GetSessionHandler, GetSessionQuery,
};
use crate::domain::foundation::SessionId;

use super::dto::{ClearSessionResponse, SessionResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct SessionHandlers {
    get_handler: Arc<GetSessionHandler>,
    clear_handler: Arc<ClearSessionHandler>,
}

impl SessionHandlers {
    pub fn new(get_handler: Arc<GetSessionHandler>, clear_handler: Arc<ClearSessionHandler>) -> Self {
        Self {
            get_handler,
            clear_handler,
        }
    }
}

fn invalid_session_id() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::bad_request("Invalid session ID")),
    )
        .into_response()
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/session/:id - Get session details
pub async fn get_session(
    State(handlers): State<SessionHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match session_id.parse::<SessionId>() {
        Ok(id) => id,
        Err(_) => return invalid_session_id(),
    };

    match handlers.get_handler.handle(GetSessionQuery { session_id }).await {
        Ok(summary) => {
            let response: SessionResponse = summary.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_session_error(e),
    }
}

/// DELETE /api/session/:id - Clear a session
///
/// Reports success whether or not the session existed.
pub async fn clear_session(
    State(handlers): State<SessionHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let parsed = match session_id.parse::<SessionId>() {
        Ok(id) => id,
        Err(_) => return invalid_session_id(),
    };

    match handlers
        .clear_handler
        .handle(ClearSessionCommand { session_id: parsed })
        .await
    {
        Ok(_) => (
            StatusCode::OK,
            Json(ClearSessionResponse::cleared(session_id)),
        )
            .into_response(),
        Err(e) => handle_session_error(e),
    }
}
