//! GetSessionHandler - Query handler for session details.

use std::sync::Arc;

use crate::domain::conversation::Stage;
use crate::domain::foundation::{SessionId, Timestamp};
use crate::domain::session::SessionError;
use crate::ports::SessionStore;

/// Query to get a session by ID.
#[derive(Debug, Clone)]
pub struct GetSessionQuery {
    pub session_id: SessionId,
}

/// What callers may see of a session. The transcript stays private.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub session_id: SessionId,
    pub user_name: Option<String>,
    pub stage: Stage,
    pub message_count: usize,
    pub created_at: Timestamp,
}

/// Handler for retrieving session details.
pub struct GetSessionHandler {
    store: Arc<dyn SessionStore>,
}

impl GetSessionHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetSessionQuery) -> Result<SessionSummary, SessionError> {
        let session = self
            .store
            .find(&query.session_id)
            .await?
            .ok_or_else(|| SessionError::not_found(query.session_id.clone()))?;

        Ok(SessionSummary {
            session_id: session.id().clone(),
            user_name: session.user_name().map(str::to_string),
            stage: session.stage(),
            message_count: session.message_count(),
            created_at: *session.created_at(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::session_store::InMemorySessionStore;
    use crate::domain::session::Session;

    #[tokio::test]
    async fn returns_summary_for_existing_session() {
        let store = Arc::new(InMemorySessionStore::new());
        let mut session = Session::new(SessionId::parse("s-1").unwrap());
        session.declare_user_name("Ana");
        session.record_exchange("hi", "welcome");
        store.save(&session).await.unwrap();

        let handler = GetSessionHandler::new(store);
        let summary = handler
            .handle(GetSessionQuery {
                session_id: SessionId::parse("s-1").unwrap(),
            })
            .await
            .unwrap();

        assert_eq!(summary.user_name.as_deref(), Some("Ana"));
        assert_eq!(summary.stage, Stage::Init);
        assert_eq!(summary.message_count, 2);
        assert_eq!(summary.created_at, *session.created_at());
    }

    #[tokio::test]
    async fn missing_session_is_not_found() {
        let handler = GetSessionHandler::new(Arc::new(InMemorySessionStore::new()));
        let id = SessionId::parse("nope").unwrap();

        let err = handler
            .handle(GetSessionQuery {
                session_id: id.clone(),
            })
            .await
            .unwrap_err();

        assert_eq!(err, SessionError::not_found(id));
    }
}
