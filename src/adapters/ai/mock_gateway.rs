//! Mock completion gateway for testing.
//!
//! Lets tests exercise the sales flow without calling a real model.
//!
//! # Features
//!
//! - Pre-configured replies, consumed in order
//! - Simulated delays for timeout testing
//! - Error injection for degradation testing
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let gateway = MockGateway::new()
//!     .with_response("Our Lease Agreement covers that.")
//!     .with_delay(Duration::from_millis(100));
//!
//! let response = gateway.complete(request).await?;
//! assert_eq!(response.content, "Our Lease Agreement covers that.");
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{
    CompletionGateway, CompletionRequest, CompletionResponse, FinishReason, GatewayError,
    ProviderInfo, TokenUsage,
};

/// Reply used once the queue is exhausted.
pub const DEFAULT_MOCK_REPLY: &str = "Mock response";

/// Scriptable gateway.
#[derive(Debug, Clone)]
pub struct MockGateway {
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    info: ProviderInfo,
    delay: Duration,
    calls: Arc<Mutex<Vec<CompletionRequest>>>,
}

/// A configured mock reply.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Success {
        content: String,
        usage: TokenUsage,
        finish_reason: FinishReason,
    },
    Error(GatewayError),
}

impl Default for MockGateway {
    fn default() -> Self {
        Self::new()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockGateway {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            info: ProviderInfo::new("mock", "mock-model-1"),
            delay: Duration::ZERO,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queues a successful reply.
    pub fn with_response(self, content: impl Into<String>) -> Self {
        lock(&self.responses).push_back(MockResponse::Success {
            content: content.into(),
            usage: TokenUsage::new(10, 20),
            finish_reason: FinishReason::Stop,
        });
        self
    }

    /// Queues a failure.
    pub fn with_error(self, error: GatewayError) -> Self {
        lock(&self.responses).push_back(MockResponse::Error(error));
        self
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_provider_info(mut self, info: ProviderInfo) -> Self {
        self.info = info;
        self
    }

    /// Number of calls made so far.
    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    /// All recorded requests.
    pub fn get_calls(&self) -> Vec<CompletionRequest> {
        lock(&self.calls).clone()
    }

    fn next_response(&self) -> MockResponse {
        lock(&self.responses)
            .pop_front()
            .unwrap_or_else(|| MockResponse::Success {
                content: DEFAULT_MOCK_REPLY.to_string(),
                usage: TokenUsage::new(5, 10),
                finish_reason: FinishReason::Stop,
            })
    }
}

#[async_trait]
impl CompletionGateway for MockGateway {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, GatewayError> {
        lock(&self.calls).push(request);

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        match self.next_response() {
            MockResponse::Success {
                content,
                usage,
                finish_reason,
            } => Ok(CompletionResponse {
                content,
                usage,
                model: self.info.model.clone(),
                finish_reason,
            }),
            MockResponse::Error(err) => Err(err),
        }
    }

    fn provider_info(&self) -> ProviderInfo {
        self.info.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::SessionId;
    use crate::ports::{MessageRole, RequestMetadata};

    fn request() -> CompletionRequest {
        CompletionRequest::new(RequestMetadata::new(SessionId::new(), "trace-1"))
            .with_message(MessageRole::User, "Hello")
    }

    #[tokio::test]
    async fn returns_queued_responses_in_order() {
        let gateway = MockGateway::new()
            .with_response("first")
            .with_response("second");

        assert_eq!(gateway.complete(request()).await.unwrap().content, "first");
        assert_eq!(gateway.complete(request()).await.unwrap().content, "second");
        assert_eq!(
            gateway.complete(request()).await.unwrap().content,
            DEFAULT_MOCK_REPLY
        );
    }

    #[tokio::test]
    async fn returns_queued_errors() {
        let gateway = MockGateway::new().with_error(GatewayError::AuthenticationFailed);
        let result = gateway.complete(request()).await;
        assert_eq!(result.unwrap_err(), GatewayError::AuthenticationFailed);
    }

    #[tokio::test]
    async fn records_calls() {
        let gateway = MockGateway::new();
        gateway.complete(request()).await.unwrap();

        assert_eq!(gateway.call_count(), 1);
        assert_eq!(gateway.get_calls()[0].last_user_message(), Some("Hello"));
    }

    #[tokio::test]
    async fn clones_share_state() {
        let gateway = MockGateway::new().with_response("shared");
        let clone = gateway.clone();

        assert_eq!(clone.complete(request()).await.unwrap().content, "shared");
        assert_eq!(gateway.call_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn honors_delay() {
        let gateway = MockGateway::new().with_delay(Duration::from_secs(5));
        let started = tokio::time::Instant::now();
        gateway.complete(request()).await.unwrap();
        assert!(started.elapsed() >= Duration::from_secs(5));
    }
}
