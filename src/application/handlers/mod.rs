//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod chat;
pub mod session;
mod session_locks;

pub use chat::{ChatReply, SendChatMessageCommand, SendChatMessageHandler};
pub use session::{
    ClearSessionCommand, ClearSessionHandler, GetSessionHandler, GetSessionQuery, SessionSummary,
};
pub use session_locks::SessionLocks;
