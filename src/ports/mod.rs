//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `CompletionGateway` - External text-completion service
//! - `SessionStore` - Chat session persistence

mod completion_gateway;
mod session_store;

pub use completion_gateway::{
    CompletionGateway, CompletionRequest, CompletionResponse, FinishReason, GatewayError, Message,
    MessageRole, ProviderInfo, RequestMetadata, TokenUsage,
};
pub use session_store::SessionStore;
