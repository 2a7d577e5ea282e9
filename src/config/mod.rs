//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `LEGALGRAM` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use legalgram_assistant::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod ai;
mod error;
mod server;

pub use ai::AiConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig, DEFAULT_CORS_ORIGINS};

use serde::Deserialize;

/// Bare variable accepted as the API key when the prefixed one is absent.
pub const LEGACY_API_KEY_VAR: &str = "GROQ_API_KEY";

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a runnable
/// (if unconfigured) server.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, CORS)
    #[serde(default)]
    pub server: ServerConfig,

    /// Completion gateway configuration (Groq)
    #[serde(default)]
    pub ai: AiConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `LEGALGRAM` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Falls back to `GROQ_API_KEY` for the API key
    ///
    /// # Environment Variable Format
    ///
    /// - `LEGALGRAM__SERVER__PORT=8000` -> `server.port = 8000`
    /// - `LEGALGRAM__AI__GROQ_API_KEY=...` -> `ai.groq_api_key = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let mut builder = config::Config::builder();
        if let Ok(key) = std::env::var(LEGACY_API_KEY_VAR) {
            builder = builder.set_default("ai.groq_api_key", key)?;
        }

        let config = builder
            .add_source(
                config::Environment::default()
                    .prefix("LEGALGRAM")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid, or if
    /// a completion call could outlive the HTTP request that waits on it.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.ai.validate()?;
        if self.ai.timeout_secs >= self.server.request_timeout_secs {
            return Err(ValidationError::GatewayTimeoutExceedsRequest {
                gateway_secs: self.ai.timeout_secs,
                request_secs: self.server.request_timeout_secs,
            });
        }
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
