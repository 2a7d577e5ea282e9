//! Sanitization of completion-gateway replies.
//!
//! Replies come from a third-party model and are shown to the user verbatim,
//! so they are cleaned before they leave the flow.

use thiserror::Error;

/// Maximum accepted reply length (32KB).
pub const MAX_REPLY_LENGTH: usize = 32_000;

/// Markers that models use to delimit roles. None belong in a user-facing
/// reply.
const INJECTION_MARKERS: [&str; 11] = [
    "```system",
    "```assistant",
    "[INST]",
    "[/INST]",
    "<|system|>",
    "<|assistant|>",
    "<|user|>",
    "<|im_start|>",
    "<|im_end|>",
    "<<SYS>>",
    "<</SYS>>",
];

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SanitizationError {
    #[error("Reply too long: {actual} bytes exceeds maximum of {max} bytes")]
    TooLong { max: usize, actual: usize },

    #[error("Reply is empty after sanitization")]
    Blank,
}

/// Cleans gateway replies before they are returned to the user.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReplySanitizer;

impl ReplySanitizer {
    pub fn new() -> Self {
        Self
    }

    /// Strips control characters (keeping newlines and tabs) and role
    /// markers, then trims. Blank output is an error.
    pub fn sanitize(&self, reply: &str) -> Result<String, SanitizationError> {
        if reply.len() > MAX_REPLY_LENGTH {
            return Err(SanitizationError::TooLong {
                max: MAX_REPLY_LENGTH,
                actual: reply.len(),
            });
        }

        let mut cleaned: String = reply
            .chars()
            .filter(|c| !c.is_control() || matches!(c, '\n' | '\t' | '\r'))
            .collect();

        for marker in INJECTION_MARKERS {
            cleaned = cleaned.replace(marker, "");
        }

        let trimmed = cleaned.trim();
        if trimmed.is_empty() {
            return Err(SanitizationError::Blank);
        }
        Ok(trimmed.to_string())
    }
}
