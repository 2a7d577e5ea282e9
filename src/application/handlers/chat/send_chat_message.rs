//! SendChatMessageHandler - Command handler for one chat turn.

use std::sync::Arc;

use crate::domain::conversation::{
    ActionButton, ConversationFlow, FlowRequest, Stage, StageInput,
};
use crate::domain::foundation::SessionId;
use crate::domain::session::{Session, SessionError};
use crate::ports::SessionStore;

use crate::application::handlers::SessionLocks;

/// Command carrying one inbound chat message.
#[derive(Debug, Clone)]
pub struct SendChatMessageCommand {
    pub message: String,
    /// Caller-supplied session id. Absent or blank starts a new session.
    pub session_id: Option<String>,
    /// A name the caller already knows. Overrides the stored one.
    pub user_name: Option<String>,
    /// Stage the caller believes it is in. `INIT` defers to the stored stage.
    pub context_stage: StageInput,
}

impl SendChatMessageCommand {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            session_id: None,
            user_name: None,
            context_stage: StageInput::Known(Stage::Init),
        }
    }

    pub fn with_session_id(mut self, id: impl Into<String>) -> Self {
        self.session_id = Some(id.into());
        self
    }

    pub fn with_user_name(mut self, name: impl Into<String>) -> Self {
        self.user_name = Some(name.into());
        self
    }

    pub fn with_context_stage(mut self, stage: impl Into<StageInput>) -> Self {
        self.context_stage = stage.into();
        self
    }
}

/// Reply to one chat turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub session_id: SessionId,
    pub response: String,
    pub new_stage: Stage,
    pub user_name: Option<String>,
    pub suggested_documents: Option<Vec<String>>,
    pub action_buttons: Option<Vec<ActionButton>>,
}

/// Handler for chat turns.
pub struct SendChatMessageHandler {
    store: Arc<dyn SessionStore>,
    flow: Arc<ConversationFlow>,
    locks: Arc<SessionLocks>,
}

impl SendChatMessageHandler {
    pub fn new(
        store: Arc<dyn SessionStore>,
        flow: Arc<ConversationFlow>,
        locks: Arc<SessionLocks>,
    ) -> Self {
        Self { store, flow, locks }
    }

    pub async fn handle(&self, cmd: SendChatMessageCommand) -> Result<ChatReply, SessionError> {
        // 1. Resolve the session id
        let session_id = match cmd.session_id.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => SessionId::parse(raw)?,
            _ => SessionId::new(),
        };

        // 2. One turn per session at a time
        let _guard = self.locks.acquire(&session_id).await;

        // 3. Load or create
        let mut session = match self.store.find(&session_id).await? {
            Some(session) => session,
            None => {
                tracing::info!(session_id = %session_id, "creating chat session");
                Session::new(session_id.clone())
            }
        };

        if let Some(name) = &cmd.user_name {
            session.declare_user_name(name);
        }

        // 4. A declared INIT defers to whatever the session has reached
        let stage = match cmd.context_stage {
            StageInput::Known(Stage::Init) => StageInput::Known(session.stage()),
            declared => declared,
        };

        // 5. Run the flow
        let request = FlowRequest::new(session_id.clone(), cmd.message.clone())
            .with_user_name(session.user_name().map(str::to_string))
            .with_stage(stage);
        let result = self.flow.process(request).await;

        // 6. Persist
        session.apply(&result);
        session.record_exchange(cmd.message, result.response_text.clone());
        self.store.save(&session).await?;

        tracing::debug!(
            session_id = %session_id,
            stage = %result.new_stage,
            messages = session.message_count(),
            "chat turn processed"
        );

        Ok(ChatReply {
            session_id,
            response: result.response_text,
            new_stage: result.new_stage,
            user_name: session.user_name().map(str::to_string),
            suggested_documents: result.suggested_documents,
            action_buttons: result.action_buttons,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockGateway;
    use crate::adapters::session_store::InMemorySessionStore;
    use crate::domain::foundation::{DomainError, ErrorCode};
    use async_trait::async_trait;

    fn handler_with(store: Arc<dyn SessionStore>) -> SendChatMessageHandler {
        let flow = ConversationFlow::new(Arc::new(MockGateway::new()));
        SendChatMessageHandler::new(store, Arc::new(flow), Arc::new(SessionLocks::new()))
    }

    struct FailingStore;

    #[async_trait]
    impl SessionStore for FailingStore {
        async fn find(&self, _id: &SessionId) -> Result<Option<Session>, DomainError> {
            Ok(None)
        }
        async fn save(&self, _session: &Session) -> Result<(), DomainError> {
            Err(DomainError::new(ErrorCode::StorageError, "Simulated save failure"))
        }
        async fn delete(&self, _id: &SessionId) -> Result<bool, DomainError> {
            Ok(false)
        }
        async fn count(&self) -> Result<usize, DomainError> {
            Ok(0)
        }
    }

    #[tokio::test]
    async fn missing_session_id_creates_a_session() {
        let store = Arc::new(InMemorySessionStore::new());
        let handler = handler_with(store.clone());

        let reply = handler.handle(SendChatMessageCommand::new("hello")).await.unwrap();

        assert_eq!(reply.new_stage, Stage::CaptureName);
        let saved = store.find(&reply.session_id).await.unwrap().unwrap();
        assert_eq!(saved.stage(), Stage::CaptureName);
        assert_eq!(saved.message_count(), 2);
    }

    #[tokio::test]
    async fn blank_session_id_creates_a_session() {
        let store = Arc::new(InMemorySessionStore::new());
        let handler = handler_with(store.clone());

        let reply = handler
            .handle(SendChatMessageCommand::new("hello").with_session_id("   "))
            .await
            .unwrap();
        assert!(!reply.session_id.as_str().trim().is_empty());
    }

    #[tokio::test]
    async fn stored_stage_is_used_when_caller_says_init() {
        let store = Arc::new(InMemorySessionStore::new());
        let handler = handler_with(store.clone());

        let first = handler.handle(SendChatMessageCommand::new("hi")).await.unwrap();
        let id = first.session_id.to_string();

        let second = handler
            .handle(SendChatMessageCommand::new("my name is ana").with_session_id(&id))
            .await
            .unwrap();

        assert_eq!(second.new_stage, Stage::Triage);
        assert_eq!(second.user_name.as_deref(), Some("Ana"));
        assert_eq!(second.session_id, first.session_id);
    }

    #[tokio::test]
    async fn declared_stage_wins_over_stored_stage() {
        let store = Arc::new(InMemorySessionStore::new());
        let handler = handler_with(store);

        let reply = handler
            .handle(
                SendChatMessageCommand::new("2")
                    .with_session_id("client-1")
                    .with_user_name("Ana")
                    .with_context_stage(Stage::Triage),
            )
            .await
            .unwrap();

        assert_eq!(reply.new_stage, Stage::SalesMode);
        assert_eq!(reply.session_id.as_str(), "client-1");
        assert!(reply.response.starts_with("Great, Ana!"));
    }

    #[tokio::test]
    async fn declared_name_overrides_stored_name() {
        let store = Arc::new(InMemorySessionStore::new());
        let handler = handler_with(store.clone());

        handler
            .handle(
                SendChatMessageCommand::new("Ana")
                    .with_session_id("s")
                    .with_context_stage(Stage::CaptureName),
            )
            .await
            .unwrap();
        let reply = handler
            .handle(
                SendChatMessageCommand::new("maybe")
                    .with_session_id("s")
                    .with_user_name("Beatriz"),
            )
            .await
            .unwrap();

        assert_eq!(reply.user_name.as_deref(), Some("Beatriz"));
        assert!(reply.response.contains("Beatriz"));
    }

    #[tokio::test]
    async fn unknown_declared_stage_restarts_the_session() {
        let store = Arc::new(InMemorySessionStore::new());
        let handler = handler_with(store.clone());

        let reply = handler
            .handle(
                SendChatMessageCommand::new("hello")
                    .with_session_id("s")
                    .with_context_stage(StageInput::parse("BOGUS")),
            )
            .await
            .unwrap();

        assert_eq!(reply.new_stage, Stage::Init);
        assert_eq!(reply.response, "How can I help you today, there?");
    }

    #[tokio::test]
    async fn transcript_grows_by_two_per_turn() {
        let store = Arc::new(InMemorySessionStore::new());
        let handler = handler_with(store.clone());

        for message in ["hi", "Ana", "2"] {
            handler
                .handle(SendChatMessageCommand::new(message).with_session_id("s"))
                .await
                .unwrap();
        }

        let session = store
            .find(&SessionId::parse("s").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(session.message_count(), 6);
        assert_eq!(session.stage(), Stage::SalesMode);
        assert_eq!(session.messages()[2].content, "Ana");
    }

    #[tokio::test]
    async fn storage_failure_is_reported() {
        let handler = handler_with(Arc::new(FailingStore));
        let err = handler
            .handle(SendChatMessageCommand::new("hi"))
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::StorageError);
    }
}
