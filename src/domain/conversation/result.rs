//! Flow results and UI affordances.

use serde::{Deserialize, Serialize};

use super::stage::Stage;

/// How the client should treat an action button's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ButtonKind {
    /// Send the value back as the next chat message.
    #[default]
    Reply,
    /// Navigate to the value, a site-relative path.
    Link,
}

/// A suggested UI action shown next to a reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionButton {
    pub label: String,
    pub value: String,
    #[serde(rename = "type")]
    pub kind: ButtonKind,
}

impl ActionButton {
    /// A button that posts its value back as a message.
    pub fn reply(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            kind: ButtonKind::Reply,
        }
    }

    /// A button that navigates to a path.
    pub fn link(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: path.into(),
            kind: ButtonKind::Link,
        }
    }
}

/// Outcome of processing one chat message.
///
/// # Invariants
///
/// - `response_text` is never empty
/// - optional collections are `None` rather than empty when not offered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowResult {
    pub response_text: String,
    pub new_stage: Stage,
    pub resolved_user_name: Option<String>,
    pub suggested_documents: Option<Vec<String>>,
    pub action_buttons: Option<Vec<ActionButton>>,
}

impl FlowResult {
    pub(crate) fn new(
        response_text: String,
        new_stage: Stage,
        resolved_user_name: Option<String>,
    ) -> Self {
        Self {
            response_text,
            new_stage,
            resolved_user_name,
            suggested_documents: None,
            action_buttons: None,
        }
    }

    pub(crate) fn with_buttons(mut self, buttons: Vec<ActionButton>) -> Self {
        self.action_buttons = (!buttons.is_empty()).then_some(buttons);
        self
    }

    pub(crate) fn with_suggestions(mut self, documents: Vec<String>) -> Self {
        self.suggested_documents = (!documents.is_empty()).then_some(documents);
        self
    }
}
