//! HTTP DTOs for the chat endpoint.

use serde::{Deserialize, Serialize};

use crate::application::handlers::chat::{ChatReply, SendChatMessageCommand};
use crate::domain::conversation::{ActionButton, Stage, StageInput};

fn default_context_stage() -> String {
    Stage::Init.as_str().to_string()
}

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// One inbound chat message.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
    /// Stage the client believes it is in. Unknown values are tolerated.
    #[serde(default = "default_context_stage")]
    pub context_stage: String,
}

impl From<ChatRequest> for SendChatMessageCommand {
    fn from(req: ChatRequest) -> Self {
        SendChatMessageCommand {
            message: req.message,
            session_id: req.session_id,
            user_name: req.user_name,
            context_stage: StageInput::parse(&req.context_stage),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Reply to one chat message. Optional fields serialize as `null`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    pub new_stage: Stage,
    pub session_id: String,
    pub user_name: Option<String>,
    pub suggested_documents: Option<Vec<String>>,
    pub action_buttons: Option<Vec<ActionButton>>,
}

impl From<ChatReply> for ChatResponse {
    fn from(reply: ChatReply) -> Self {
        Self {
            response: reply.response,
            new_stage: reply.new_stage,
            session_id: reply.session_id.to_string(),
            user_name: reply.user_name,
            suggested_documents: reply.suggested_documents,
            action_buttons: reply.action_buttons,
        }
    }
}
