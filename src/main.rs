use std::sync::Arc;

use legalgram_assistant::adapters::ai::{GatewayConfig, OpenAiCompatibleGateway, UnconfiguredGateway};
use legalgram_assistant::adapters::http::{app_router, ApiHandlers};
use legalgram_assistant::adapters::session_store::InMemorySessionStore;
use legalgram_assistant::config::{AiConfig, AppConfig, ServerConfig};
use legalgram_assistant::domain::conversation::{ConversationFlow, FlowSettings};
use legalgram_assistant::ports::{CompletionGateway, GatewayError, SessionStore};

fn init_tracing(server: &ServerConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&server.log_level));

    if server.is_production() {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

fn build_gateway(ai: &AiConfig) -> Result<Arc<dyn CompletionGateway>, GatewayError> {
    match ai.api_key() {
        Some(key) => {
            let config = GatewayConfig::new(key)
                .with_base_url(&ai.base_url)
                .with_model(&ai.model)
                .with_timeout(ai.timeout())
                .with_max_retries(ai.max_retries);
            Ok(Arc::new(OpenAiCompatibleGateway::new(config)?))
        }
        None => {
            tracing::warn!("no completion API key configured; open questions get the canned reply");
            Ok(Arc::new(UnconfiguredGateway::new()))
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    tracing::info!(
        "Starting Legalgram Assistant v{} ({:?})",
        env!("CARGO_PKG_VERSION"),
        config.server.environment
    );

    let gateway = build_gateway(&config.ai)?;
    let info = gateway.provider_info();
    tracing::info!(
        provider = %info.name,
        model = %info.model,
        configured = info.configured,
        "completion gateway ready"
    );

    let settings = FlowSettings {
        gateway_timeout: config.ai.timeout(),
        temperature: config.ai.temperature,
        max_tokens: config.ai.max_tokens,
    };
    let flow = Arc::new(ConversationFlow::new(gateway).with_settings(settings));
    let store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());

    let router = app_router(ApiHandlers::new(store, flow), &config.server);

    let addr = config.server.socket_addr()?;
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(addr = %addr, error = %e, "Failed to bind");
            return Err(e.into());
        }
    };
    tracing::info!(addr = %addr, "listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
