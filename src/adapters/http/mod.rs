//! HTTP adapters - REST API implementations.
//!
//! Each endpoint group has its own adapter module with DTOs, handlers and
//! routes; [`app_router`] merges them and adds the middleware stack.

pub mod chat;
pub mod documents;
pub mod error;
pub mod health;
mod router;
pub mod session;

pub use error::{handle_session_error, ErrorResponse};
pub use router::{api_router, app_router, cors_layer, ApiHandlers};
