//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),

    #[error("Invalid completion API base URL")]
    InvalidBaseUrl,

    #[error("Model name must not be empty")]
    MissingModel,

    #[error("Temperature must be between 0 and 2")]
    InvalidTemperature,

    #[error("max_tokens must be between 1 and 8192")]
    InvalidMaxTokens,

    #[error("Invalid completion timeout")]
    InvalidGatewayTimeout,

    #[error("Completion timeout ({gateway_secs}s) must be shorter than the request timeout ({request_secs}s)")]
    GatewayTimeoutExceedsRequest { gateway_secs: u64, request_secs: u64 },
}
