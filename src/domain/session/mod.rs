//! Session domain module.
//!
//! A session carries one visitor's conversation between requests: the stage
//! it has reached, the name the visitor gave, and the transcript.

mod aggregate;
mod errors;

pub use aggregate::{MessageRole, Session, SessionMessage};
pub use errors::SessionError;
