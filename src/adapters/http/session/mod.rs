//! HTTP adapter for session endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{ClearSessionResponse, SessionResponse, SESSION_CLEARED};
pub use handlers::SessionHandlers;
pub use routes::session_routes;
