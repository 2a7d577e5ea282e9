//! The conversation flow: one chat message in, one [`FlowResult`] out.
//!
//! The flow owns no storage. The caller hands in the session's current stage
//! and known name and persists whatever comes back. Rule selection is pure;
//! the only side effect is the completion-gateway call made when a sales-mode
//! message names no known document.

use std::sync::Arc;
use std::time::Duration;

use uuid::Uuid;

use crate::domain::catalog::{DocumentRecord, DocumentStore};
use crate::domain::foundation::SessionId;
use crate::ports::{CompletionGateway, CompletionRequest, GatewayError, MessageRole, RequestMetadata};

use super::classifier::{contains_any, extract_name};
use super::replies::{self, ANONYMOUS_NAME, ASK_A_LAWYER_PATH};
use super::result::{ActionButton, FlowResult};
use super::rules::{rules_for, Matcher, Reply, Rule, FALLBACK_RULES};
use super::sanitizer::{ReplySanitizer, SanitizationError};
use super::stage::{Stage, StageInput};

/// Tuning for the sales-mode completion call.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowSettings {
    pub gateway_timeout: Duration,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for FlowSettings {
    fn default() -> Self {
        Self {
            gateway_timeout: Duration::from_secs(20),
            temperature: 0.6,
            max_tokens: 600,
        }
    }
}

/// One message to run through the flow.
#[derive(Debug, Clone)]
pub struct FlowRequest {
    pub session_id: SessionId,
    pub message: String,
    pub user_name: Option<String>,
    pub stage: StageInput,
}

impl FlowRequest {
    pub fn new(session_id: SessionId, message: impl Into<String>) -> Self {
        Self {
            session_id,
            message: message.into(),
            user_name: None,
            stage: StageInput::Known(Stage::Init),
        }
    }

    pub fn with_user_name(mut self, name: Option<String>) -> Self {
        self.user_name = name;
        self
    }

    pub fn with_stage(mut self, stage: impl Into<StageInput>) -> Self {
        self.stage = stage.into();
        self
    }
}

/// Drives a session through its stages.
#[derive(Clone)]
pub struct ConversationFlow {
    documents: Arc<DocumentStore>,
    gateway: Arc<dyn CompletionGateway>,
    sanitizer: ReplySanitizer,
    settings: FlowSettings,
}

impl ConversationFlow {
    /// A flow over the built-in catalogue.
    pub fn new(gateway: Arc<dyn CompletionGateway>) -> Self {
        Self {
            documents: Arc::new(DocumentStore::standard().clone()),
            gateway,
            sanitizer: ReplySanitizer::new(),
            settings: FlowSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: FlowSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn documents(&self) -> &Arc<DocumentStore> {
        &self.documents
    }

    pub fn gateway(&self) -> &Arc<dyn CompletionGateway> {
        &self.gateway
    }

    /// Processes one message. Never fails: unmatched input degrades to a
    /// clarification or fallback reply, and gateway failures to a canned
    /// apology.
    pub async fn process(&self, request: FlowRequest) -> FlowResult {
        let rules = match &request.stage {
            StageInput::Known(stage) => rules_for(*stage),
            StageInput::Unrecognized(raw) => {
                tracing::debug!(stage = %raw, "unrecognized stage, using fallback rules");
                FALLBACK_RULES
            }
        };

        let (rule, document) = self.select(rules, &request.message);

        let resolved_name = match rule.reply {
            Reply::Welcome => None,
            Reply::NameCaptured => Some(extract_name(&request.message)),
            _ => request.user_name.clone(),
        };
        let name = resolved_name.as_deref().unwrap_or(ANONYMOUS_NAME);

        let text = match rule.reply {
            Reply::Welcome => replies::welcome(),
            Reply::NameCaptured => replies::name_captured(name),
            Reply::HumanAdvice => replies::human_advice(name),
            Reply::SalesIntro => replies::sales_intro(name),
            Reply::TriageClarification => replies::triage_clarification(name),
            Reply::SwitchToSales => replies::switch_to_sales(name),
            Reply::HumanFollowUp => replies::human_follow_up(name),
            Reply::DocumentPitch => match document {
                Some(document) => replies::document_pitch(document, name),
                None => replies::gateway_fallback(name),
            },
            Reply::GatewayCompletion => {
                match self.complete(&request.session_id, &request.message, name).await {
                    Ok(text) => text,
                    Err(err) => {
                        tracing::warn!(
                            session_id = %request.session_id,
                            error = %err,
                            "completion gateway failed, using fallback reply"
                        );
                        replies::gateway_fallback(name)
                    }
                }
            }
            Reply::Fallback => replies::greeting_fallback(name),
        };

        let result = FlowResult::new(text, rule.next, resolved_name);
        match (rule.reply, document) {
            (Reply::NameCaptured, _) => result.with_buttons(vec![
                ActionButton::reply("👨‍⚖️ Human Lawyer", "1"),
                ActionButton::reply("🤖 AI Assistant", "2"),
            ]),
            (Reply::HumanAdvice, _) => result.with_buttons(vec![
                ActionButton::link("Go to Free Advice", ASK_A_LAWYER_PATH),
                ActionButton::reply("Ask AI Instead", "ai"),
            ]),
            (Reply::DocumentPitch, Some(document)) => result
                .with_suggestions(vec![document.full_name.to_string()])
                .with_buttons(vec![
                    ActionButton::link(format!("Create {}", document.full_name), document.create_path()),
                    ActionButton::reply("See Other Documents", "other"),
                ]),
            _ => result,
        }
    }

    /// First rule in `rules` that accepts the message, with the document it
    /// matched if it is a document rule.
    fn select<'a>(&'a self, rules: &'static [Rule], message: &str) -> (&'static Rule, Option<&'a DocumentRecord>) {
        rules
            .iter()
            .find_map(|rule| match rule.matcher {
                Matcher::Always => Some((rule, None)),
                Matcher::Keywords(keywords) => contains_any(message, keywords).then_some((rule, None)),
                Matcher::Document => self
                    .documents
                    .find_by_key_or_substring(message)
                    .map(|document| (rule, Some(document))),
            })
            .unwrap_or((&FALLBACK_RULES[0], None))
    }

    async fn complete(&self, session_id: &SessionId, message: &str, name: &str) -> Result<String, GatewayError> {
        let request = CompletionRequest::new(RequestMetadata::new(session_id.clone(), Uuid::new_v4().to_string()))
            .with_system_prompt(replies::sales_system_prompt(name, message))
            .with_message(MessageRole::User, message)
            .with_temperature(self.settings.temperature)
            .with_max_tokens(self.settings.max_tokens);

        let timeout = self.settings.gateway_timeout;
        let response = tokio::time::timeout(timeout, self.gateway.complete(request))
            .await
            .map_err(|_| GatewayError::Timeout {
                timeout_secs: timeout.as_secs(),
            })??;

        self.sanitizer
            .sanitize(&response.content)
            .map_err(|err| match err {
                SanitizationError::Blank => GatewayError::EmptyResponse,
                SanitizationError::TooLong { .. } => GatewayError::parse(err.to_string()),
            })
    }
}

impl std::fmt::Debug for ConversationFlow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConversationFlow")
            .field("provider", &self.gateway.provider_info())
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockGateway;
    use crate::domain::conversation::result::ButtonKind;
    use proptest::prelude::*;

    fn flow_with(gateway: MockGateway) -> ConversationFlow {
        ConversationFlow::new(Arc::new(gateway))
    }

    fn request(stage: Stage, message: &str, name: Option<&str>) -> FlowRequest {
        FlowRequest::new(SessionId::new(), message)
            .with_stage(stage)
            .with_user_name(name.map(str::to_string))
    }

    async fn run(stage: Stage, message: &str, name: Option<&str>) -> FlowResult {
        flow_with(MockGateway::new())
            .process(request(stage, message, name))
            .await
    }

    mod init {
        use super::*;

        #[tokio::test]
        async fn welcomes_and_asks_for_name() {
            let result = run(Stage::Init, "hello", None).await;
            assert_eq!(result.new_stage, Stage::CaptureName);
            assert!(result.response_text.contains("Welcome to Legalgram"));
            assert_eq!(result.resolved_user_name, None);
        }

        #[tokio::test]
        async fn ignores_a_known_name() {
            let result = run(Stage::Init, "hi", Some("Ana")).await;
            assert_eq!(result.resolved_user_name, None);
        }
    }

    mod capture_name {
        use super::*;

        #[tokio::test]
        async fn plain_name() {
            let result = run(Stage::CaptureName, "John", None).await;
            assert_eq!(result.resolved_user_name.as_deref(), Some("John"));
            assert_eq!(result.new_stage, Stage::Triage);
            assert!(result.response_text.contains("Nice to meet you, **John**!"));
        }

        #[tokio::test]
        async fn prefixed_name() {
            let result = run(Stage::CaptureName, "my name is alexander", None).await;
            assert_eq!(result.resolved_user_name.as_deref(), Some("Alexander"));
        }

        #[tokio::test]
        async fn blank_input_uses_placeholder() {
            let result = run(Stage::CaptureName, "", None).await;
            assert_eq!(result.resolved_user_name.as_deref(), Some("Friend"));
            assert_eq!(result.new_stage, Stage::Triage);
        }

        #[tokio::test]
        async fn offers_human_and_ai_buttons() {
            let result = run(Stage::CaptureName, "John", None).await;
            let buttons = result.action_buttons.unwrap();
            let values: Vec<_> = buttons.iter().map(|b| b.value.as_str()).collect();
            assert_eq!(values, vec!["1", "2"]);
            assert!(buttons.iter().all(|b| b.kind == ButtonKind::Reply));
        }
    }

    mod triage {
        use super::*;

        #[tokio::test]
        async fn one_routes_to_human() {
            let result = run(Stage::Triage, "1", Some("Ana")).await;
            assert_eq!(result.new_stage, Stage::HumanRoute);
            assert!(result.response_text.contains("/ask-a-lawyer"));
            let buttons = result.action_buttons.unwrap();
            assert_eq!(buttons[0].kind, ButtonKind::Link);
            assert_eq!(buttons[0].value, "/ask-a-lawyer");
        }

        #[tokio::test]
        async fn two_routes_to_sales() {
            let result = run(Stage::Triage, "2", Some("Ana")).await;
            assert_eq!(result.new_stage, Stage::SalesMode);
            assert!(result.response_text.starts_with("Great, Ana!"));
        }

        #[tokio::test]
        async fn unclear_answer_stays_in_triage() {
            let result = run(Stage::Triage, "maybe", Some("Ana")).await;
            assert_eq!(result.new_stage, Stage::Triage);
            assert!(result.response_text.contains("1️⃣"));
        }

        #[tokio::test]
        async fn human_keywords_win_over_ai_keywords() {
            // "12" satisfies both lists.
            let result = run(Stage::Triage, "12", Some("Ana")).await;
            assert_eq!(result.new_stage, Stage::HumanRoute);
        }

        #[tokio::test]
        async fn keeps_the_known_name() {
            let result = run(Stage::Triage, "2", Some("Ana")).await;
            assert_eq!(result.resolved_user_name.as_deref(), Some("Ana"));
        }
    }

    mod human_route {
        use super::*;

        #[tokio::test]
        async fn ai_switches_to_sales() {
            let result = run(Stage::HumanRoute, "ai", Some("Ana")).await;
            assert_eq!(result.new_stage, Stage::SalesMode);
        }

        #[tokio::test]
        async fn anything_else_stays() {
            let result = run(Stage::HumanRoute, "thanks", Some("Ana")).await;
            assert_eq!(result.new_stage, Stage::HumanRoute);
            assert!(result.response_text.starts_with("Is there anything else"));
        }
    }

    mod sales_mode {
        use super::*;

        #[tokio::test]
        async fn document_match_pitches_it() {
            let gateway = MockGateway::new();
            let flow = flow_with(gateway.clone());
            let result = flow
                .process(request(Stage::SalesMode, "I need an NDA", Some("Ana")))
                .await;

            let nda = DocumentStore::standard().find_details("nda").unwrap();
            assert_eq!(result.new_stage, Stage::SalesMode);
            assert_eq!(
                result.suggested_documents,
                Some(vec!["Non-Disclosure Agreement".to_string()])
            );
            assert!(result.response_text.contains(nda.sales_pitch));
            assert_eq!(gateway.call_count(), 0);

            let buttons = result.action_buttons.unwrap();
            assert_eq!(buttons[0].label, "Create Non-Disclosure Agreement");
            assert_eq!(buttons[0].value, "/documents/non-disclosure-agreement");
            assert_eq!(buttons[1].value, "other");
        }

        #[tokio::test]
        async fn first_document_in_store_order_wins() {
            let result = run(
                Stage::SalesMode,
                "an employment agreement with an nda",
                Some("Ana"),
            )
            .await;
            assert_eq!(
                result.suggested_documents,
                Some(vec!["Non-Disclosure Agreement".to_string()])
            );
        }

        #[tokio::test]
        async fn unmatched_message_goes_to_gateway() {
            let gateway = MockGateway::new().with_response("You want our Will template.");
            let flow = flow_with(gateway.clone());
            let result = flow
                .process(request(Stage::SalesMode, "what about my estate?", Some("Ana")))
                .await;

            assert_eq!(result.response_text, "You want our Will template.");
            assert_eq!(result.new_stage, Stage::SalesMode);
            assert_eq!(result.suggested_documents, None);

            let calls = gateway.get_calls();
            assert_eq!(calls.len(), 1);
            assert_eq!(calls[0].last_user_message(), Some("what about my estate?"));
            assert_eq!(calls[0].temperature, Some(0.6));
            assert_eq!(calls[0].max_tokens, Some(600));
            let prompt = calls[0].system_prompt.as_deref().unwrap();
            assert!(prompt.contains("- User Name: Ana"));
            assert!(prompt.contains("- Current Query: what about my estate?"));
        }

        #[tokio::test]
        async fn gateway_failure_degrades_to_fallback() {
            let gateway = MockGateway::new().with_error(GatewayError::not_configured("no key"));
            let result = flow_with(gateway)
                .process(request(Stage::SalesMode, "what about my estate?", Some("Ana")))
                .await;

            assert_eq!(result.response_text, replies::gateway_fallback("Ana"));
            assert_eq!(result.new_stage, Stage::SalesMode);
        }

        #[tokio::test]
        async fn blank_gateway_reply_degrades_to_fallback() {
            let gateway = MockGateway::new().with_response("  <|im_end|>  ");
            let result = flow_with(gateway)
                .process(request(Stage::SalesMode, "hmm", None))
                .await;

            assert_eq!(result.response_text, replies::gateway_fallback(ANONYMOUS_NAME));
        }

        #[tokio::test]
        async fn gateway_reply_is_sanitized() {
            let gateway = MockGateway::new().with_response("[INST]Try a Will.[/INST]");
            let result = flow_with(gateway)
                .process(request(Stage::SalesMode, "hmm", Some("Ana")))
                .await;

            assert_eq!(result.response_text, "Try a Will.");
        }

        #[tokio::test(start_paused = true)]
        async fn slow_gateway_times_out_to_fallback() {
            let gateway = MockGateway::new()
                .with_response("too late")
                .with_delay(Duration::from_secs(60));
            let flow = flow_with(gateway).with_settings(FlowSettings {
                gateway_timeout: Duration::from_secs(1),
                ..FlowSettings::default()
            });

            let result = flow
                .process(request(Stage::SalesMode, "hmm", Some("Ana")))
                .await;

            assert_eq!(result.response_text, replies::gateway_fallback("Ana"));
            assert_eq!(result.new_stage, Stage::SalesMode);
        }
    }

    mod fallback {
        use super::*;

        #[tokio::test]
        async fn unknown_stage_restarts() {
            let flow = flow_with(MockGateway::new());
            let result = flow
                .process(
                    FlowRequest::new(SessionId::new(), "hello")
                        .with_stage(StageInput::parse("ADVISING"))
                        .with_user_name(Some("Ana".into())),
                )
                .await;

            assert_eq!(result.new_stage, Stage::Init);
            assert_eq!(result.response_text, "How can I help you today, Ana?");
        }

        #[tokio::test]
        async fn done_restarts_with_anonymous_greeting() {
            let result = run(Stage::Done, "hello", None).await;
            assert_eq!(result.new_stage, Stage::Init);
            assert_eq!(result.response_text, "How can I help you today, there?");
        }
    }

    #[tokio::test]
    async fn keyword_paths_are_deterministic() {
        let flow = flow_with(MockGateway::new());
        for (stage, message) in [
            (Stage::Init, "hi"),
            (Stage::CaptureName, "i am bob"),
            (Stage::Triage, "maybe"),
            (Stage::HumanRoute, "thanks"),
            (Stage::SalesMode, "lease agreement please"),
        ] {
            let first = flow.process(request(stage, message, Some("Bob"))).await;
            let second = flow.process(request(stage, message, Some("Bob"))).await;
            assert_eq!(first.response_text, second.response_text);
            assert_eq!(first.new_stage, second.new_stage);
        }
    }

    #[tokio::test]
    async fn full_session_round_trip() {
        let flow = flow_with(MockGateway::new());
        let mut stage = Stage::Init;
        let mut name: Option<String> = None;

        for message in ["hi", "my name is dana", "2", "I need a lease agreement"] {
            let result = flow
                .process(
                    FlowRequest::new(SessionId::new(), message)
                        .with_stage(stage)
                        .with_user_name(name.clone()),
                )
                .await;
            stage = result.new_stage;
            if result.resolved_user_name.is_some() {
                name = result.resolved_user_name.clone();
            }
            if message.contains("lease") {
                assert!(result.suggested_documents.is_some());
                assert_eq!(result.resolved_user_name.as_deref(), Some("Dana"));
            }
        }

        assert_eq!(stage, Stage::SalesMode);
        assert_eq!(name.as_deref(), Some("Dana"));
    }

    fn any_stage() -> impl Strategy<Value = Stage> {
        prop::sample::select(Stage::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn every_result_is_well_formed(
            stage in any_stage(),
            message in ".{0,80}",
            name in prop::option::of("[A-Za-z]{1,12}"),
        ) {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_time()
                .build()
                .unwrap();
            let gateway = MockGateway::new().with_error(GatewayError::network("down"));
            let result = runtime.block_on(
                flow_with(gateway).process(request(stage, &message, name.as_deref())),
            );

            prop_assert!(!result.response_text.trim().is_empty());
            prop_assert!(Stage::ALL.contains(&result.new_stage));
            prop_assert!(result.suggested_documents.as_ref().map_or(true, |d| !d.is_empty()));
            prop_assert!(result.action_buttons.as_ref().map_or(true, |b| !b.is_empty()));
        }

        #[test]
        fn init_always_asks_for_a_name(message in ".{0,80}") {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .build()
                .unwrap();
            let result = runtime.block_on(
                flow_with(MockGateway::new()).process(request(Stage::Init, &message, None)),
            );

            prop_assert_eq!(result.new_stage, Stage::CaptureName);
            prop_assert_eq!(result.resolved_user_name, None);
        }
    }
}
