//! Application router assembly.
//!
//! Builds every endpoint's handler state from the shared services, merges
//! the per-module routers and wraps them in the cross-cutting layers.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::application::handlers::{
    ClearSessionHandler, GetSessionHandler, SendChatMessageHandler, SessionLocks,
};
use crate::config::ServerConfig;
use crate::domain::conversation::ConversationFlow;
use crate::ports::SessionStore;

use super::chat::{chat_routes, ChatHandlers};
use super::documents::{document_routes, DocumentHandlers};
use super::health::{health_routes, HealthHandlers};
use super::session::{session_routes, SessionHandlers};

/// Handler state for every endpoint group.
#[derive(Clone)]
pub struct ApiHandlers {
    pub chat: ChatHandlers,
    pub session: SessionHandlers,
    pub documents: DocumentHandlers,
    pub health: HealthHandlers,
}

impl ApiHandlers {
    /// Wires the application handlers over one store and one flow.
    ///
    /// Handlers that write sessions share one set of per-session locks.
    pub fn new(store: Arc<dyn SessionStore>, flow: Arc<ConversationFlow>) -> Self {
        let provider = flow.gateway().provider_info();
        let documents = Arc::clone(flow.documents());
        let locks = Arc::new(SessionLocks::new());

        Self {
            chat: ChatHandlers::new(Arc::new(SendChatMessageHandler::new(
                Arc::clone(&store),
                flow,
                Arc::clone(&locks),
            ))),
            session: SessionHandlers::new(
                Arc::new(GetSessionHandler::new(Arc::clone(&store))),
                Arc::new(ClearSessionHandler::new(Arc::clone(&store), locks)),
            ),
            documents: DocumentHandlers::new(documents),
            health: HealthHandlers::new(store, provider),
        }
    }
}

/// All endpoints, without middleware.
pub fn api_router(handlers: ApiHandlers) -> Router {
    Router::new()
        .merge(health_routes(handlers.health))
        .merge(chat_routes(handlers.chat))
        .merge(session_routes(handlers.session))
        .merge(document_routes(handlers.documents))
}

/// All endpoints wrapped in timeout, tracing and CORS layers.
pub fn app_router(handlers: ApiHandlers, server: &ServerConfig) -> Router {
    api_router(handlers)
        .layer(TimeoutLayer::new(Duration::from_secs(
            server.request_timeout_secs,
        )))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&server.cors_origins_list()))
}

/// CORS for the given origins. Origins that are not valid header values are
/// skipped with a warning.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .allow_credentials(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockGateway;
    use crate::adapters::session_store::InMemorySessionStore;
    use crate::domain::conversation::FlowSettings;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn handlers() -> ApiHandlers {
        let flow = Arc::new(ConversationFlow::new(Arc::new(MockGateway::new())));
        ApiHandlers::new(Arc::new(InMemorySessionStore::new()), flow)
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let app = api_router(handlers());
        let response = app
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn preflight_from_allowed_origin_is_answered() {
        let server = ServerConfig::default();
        let app = app_router(handlers(), &server);
        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/api/chat")
                    .header(header::ORIGIN, "http://localhost:5173")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://localhost:5173"
        );
    }

    #[tokio::test]
    async fn other_origins_get_no_allow_header() {
        let server = ServerConfig::default();
        let app = app_router(handlers(), &server);
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(header::ORIGIN, "https://evil.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn slow_gateway_answers_with_fallback_before_request_timeout() {
        let gateway = MockGateway::new().with_delay(Duration::from_secs(5));
        let flow = ConversationFlow::new(Arc::new(gateway)).with_settings(FlowSettings {
            gateway_timeout: Duration::from_secs(1),
            ..FlowSettings::default()
        });
        let handlers = ApiHandlers::new(Arc::new(InMemorySessionStore::new()), Arc::new(flow));
        let server = ServerConfig {
            request_timeout_secs: 2,
            ..ServerConfig::default()
        };

        let body = serde_json::json!({
            "message": "tell me more",
            "user_name": "Ed",
            "context_stage": "SALES_MODE"
        });
        let response = app_router(handlers, &server)
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/api/chat")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let reply: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(reply["response"]
            .as_str()
            .unwrap()
            .starts_with("I apologize, Ed,"));
    }

    #[test]
    fn invalid_origins_are_skipped() {
        // Must not panic on a value with a newline in it.
        let _layer = cors_layer(&["http://ok.example".to_string(), "bad\norigin".to_string()]);
    }
}
