//! Chat session aggregate.
//!
//! A session remembers just enough to continue a conversation: the stage,
//! the user's name once known, and an append-only transcript.

use serde::{Deserialize, Serialize};

use crate::domain::conversation::{FlowResult, Stage};
use crate::domain::foundation::{SessionId, Timestamp};

/// Who wrote a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

/// One transcript entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionMessage {
    pub role: MessageRole,
    pub content: String,
    pub timestamp: Timestamp,
}

/// Chat session aggregate.
///
/// # Invariants
///
/// - `id` and `created_at` never change
/// - `user_name`, once set, is only ever replaced, never cleared
/// - `messages` is append-only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    id: SessionId,
    user_name: Option<String>,
    stage: Stage,
    messages: Vec<SessionMessage>,
    created_at: Timestamp,
}

impl Session {
    /// A fresh session at [`Stage::Init`].
    pub fn new(id: SessionId) -> Self {
        Self {
            id,
            user_name: None,
            stage: Stage::Init,
            messages: Vec::new(),
            created_at: Timestamp::now(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn user_name(&self) -> Option<&str> {
        self.user_name.as_deref()
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn messages(&self) -> &[SessionMessage] {
        &self.messages
    }

    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Stores a name the caller declared. Blank names are ignored.
    pub fn declare_user_name(&mut self, name: &str) {
        let name = name.trim();
        if !name.is_empty() {
            self.user_name = Some(name.to_string());
        }
    }

    /// Persists the outcome of one flow step: the new stage, and the resolved
    /// name if there is one.
    pub fn apply(&mut self, result: &FlowResult) {
        self.stage = result.new_stage;
        if let Some(name) = &result.resolved_user_name {
            self.user_name = Some(name.clone());
        }
    }

    /// Appends the user's message and the reply, both stamped now.
    pub fn record_exchange(&mut self, user_text: impl Into<String>, assistant_text: impl Into<String>) {
        let now = Timestamp::now();
        self.messages.push(SessionMessage {
            role: MessageRole::User,
            content: user_text.into(),
            timestamp: now,
        });
        self.messages.push(SessionMessage {
            role: MessageRole::Assistant,
            content: assistant_text.into(),
            timestamp: now,
        });
    }
}
