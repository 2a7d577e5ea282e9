//! HTTP handlers for the chat endpoint.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::handle_session_error;
use crate::application::handlers::chat::SendChatMessageHandler;

use super::dto::{ChatRequest, ChatResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ChatHandlers {
    send_handler: Arc<SendChatMessageHandler>,
}

impl ChatHandlers {
    pub fn new(send_handler: Arc<SendChatMessageHandler>) -> Self {
        Self { send_handler }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/chat - Process one chat message
pub async fn send_chat_message(
    State(handlers): State<ChatHandlers>,
    Json(req): Json<ChatRequest>,
) -> Response {
    match handlers.send_handler.handle(req.into()).await {
        Ok(reply) => (StatusCode::OK, Json(ChatResponse::from(reply))).into_response(),
        Err(e) => handle_session_error(e),
    }
}
