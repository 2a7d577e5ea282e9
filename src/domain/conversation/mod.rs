//! Conversation module - the stage machine behind the sales assistant.
//!
//! - [`Stage`] and its transition graph
//! - keyword classification and name extraction ([`classifier`])
//! - ordered rule tables per stage ([`rules`])
//! - [`ConversationFlow`], which turns one message into a [`FlowResult`]

pub mod classifier;
mod flow;
pub mod replies;
mod result;
pub mod rules;
mod sanitizer;
mod stage;

pub use flow::{ConversationFlow, FlowRequest, FlowSettings};
pub use result::{ActionButton, ButtonKind, FlowResult};
pub use sanitizer::{ReplySanitizer, SanitizationError, MAX_REPLY_LENGTH};
pub use stage::{Stage, StageInput, UnknownStage};
