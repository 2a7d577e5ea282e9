//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Commands (chat turns, clearing a session) are kept apart from queries
//! (reading a session summary).

pub mod handlers;

pub use handlers::{
    ChatReply, ClearSessionCommand, ClearSessionHandler, GetSessionHandler, GetSessionQuery,
    SendChatMessageCommand, SendChatMessageHandler, SessionSummary,
};
