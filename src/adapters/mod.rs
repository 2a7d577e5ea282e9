//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Completion gateways (OpenAI-compatible HTTP, unconfigured, mock)
//! - `http` - REST API (axum)
//! - `session_store` - Session storage (in-memory)

pub mod ai;
pub mod http;
pub mod session_store;

pub use ai::{MockGateway, OpenAiCompatibleGateway, UnconfiguredGateway};
pub use session_store::InMemorySessionStore;
