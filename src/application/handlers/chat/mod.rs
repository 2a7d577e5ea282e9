//! Chat command handlers.

mod send_chat_message;

pub use send_chat_message::{ChatReply, SendChatMessageCommand, SendChatMessageHandler};
