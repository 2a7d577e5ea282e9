//! Gateway used when no API key is configured.

use async_trait::async_trait;

use crate::ports::{CompletionGateway, CompletionRequest, CompletionResponse, GatewayError, ProviderInfo};

/// Fails every request with [`GatewayError::NotConfigured`], so sales-mode
/// questions get the canned fallback instead of an answer.
#[derive(Debug, Clone, Default)]
pub struct UnconfiguredGateway;

impl UnconfiguredGateway {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CompletionGateway for UnconfiguredGateway {
    async fn complete(&self, _request: CompletionRequest) -> Result<CompletionResponse, GatewayError> {
        Err(GatewayError::not_configured("no API key set"))
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::unconfigured("groq")
    }
}
