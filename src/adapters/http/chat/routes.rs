//! HTTP routes for the chat endpoint.

use axum::{routing::post, Router};

use super::handlers::{send_chat_message, ChatHandlers};

/// Creates the chat router.
///
/// Routes:
/// - `POST /api/chat` - Process one chat message
pub fn chat_routes(handlers: ChatHandlers) -> Router {
    Router::new()
        .route("/api/chat", post(send_chat_message))
        .with_state(handlers)
}
