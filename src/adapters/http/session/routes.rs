//! HTTP routes for session endpoints.

use axum::{routing::get, Router};

use super::handlers::{clear_session, get_session, SessionHandlers};

/// Creates the session router with all endpoints.
pub fn session_routes(handlers: SessionHandlers) -> Router {
    Router::new()
        .route("/api/session/:id", get(get_session).delete(clear_session))
        .with_state(handlers)
}
