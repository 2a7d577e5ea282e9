//! Session command and query handlers.

mod clear_session;
mod get_session;

pub use clear_session::{ClearSessionCommand, ClearSessionHandler};
pub use get_session::{GetSessionHandler, GetSessionQuery, SessionSummary};
