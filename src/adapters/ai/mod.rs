//! Completion gateway adapters.
//!
//! Implementations of the `CompletionGateway` port.
//!
//! ## Available Adapters
//!
//! - `OpenAiCompatibleGateway` - Any OpenAI-style chat completions API (Groq by default)
//! - `UnconfiguredGateway` - Stand-in when no API key is set
//! - `MockGateway` - Configurable mock for testing

mod mock_gateway;
mod openai_compatible_gateway;
mod unconfigured_gateway;

pub use mock_gateway::{MockGateway, MockResponse, DEFAULT_MOCK_REPLY};
pub use openai_compatible_gateway::{
    GatewayConfig, OpenAiCompatibleGateway, DEFAULT_BASE_URL, DEFAULT_MODEL,
};
pub use unconfigured_gateway::UnconfiguredGateway;
