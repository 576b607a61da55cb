//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the optional LLM client, the assistant rate limiter, and the
//! preamble built once from the bundled inventory at startup.

use std::sync::Arc;

use crate::llm::LlmChat;
use crate::rate_limit::RateLimiter;
use crate::services::assistant::{AssistantSettings, showroom_preamble};

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Copy.
#[derive(Clone)]
pub struct AppState {
    /// Optional LLM client. `None` if LLM env vars are not configured.
    pub llm: Option<Arc<dyn LlmChat>>,
    /// In-memory rate limiter for assistant requests.
    pub rate_limiter: RateLimiter,
    /// System instruction sent with every assistant call.
    pub preamble: Arc<str>,
    pub assistant_settings: AssistantSettings,
}

impl AppState {
    #[must_use]
    pub fn new(llm: Option<Arc<dyn LlmChat>>, rate_limiter: RateLimiter, assistant_settings: AssistantSettings) -> Self {
        Self { llm, rate_limiter, preamble: showroom_preamble().into(), assistant_settings }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use std::sync::Mutex;

    use crate::llm::types::{ChatRequest, ChatResponse, LlmError, Message};
    use crate::rate_limit::RateLimitConfig;

    /// What a `MockLlm` saw on one call.
    #[derive(Debug, Clone)]
    pub struct RecordedCall {
        pub system: String,
        pub messages: Vec<Message>,
        pub temperature: f32,
        pub max_tokens: u32,
    }

    /// Scripted `LlmChat`: pops queued outcomes in order, then answers "done".
    pub struct MockLlm {
        outcomes: Mutex<Vec<Result<String, LlmError>>>,
        pub calls: Mutex<Vec<RecordedCall>>,
    }

    impl MockLlm {
        pub fn new(outcomes: Vec<Result<String, LlmError>>) -> Arc<Self> {
            Arc::new(Self { outcomes: Mutex::new(outcomes), calls: Mutex::new(Vec::new()) })
        }

        pub fn replying(text: &str) -> Arc<Self> {
            Self::new(vec![Ok(text.to_owned())])
        }

        pub fn recorded(&self) -> Vec<RecordedCall> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl LlmChat for MockLlm {
        async fn chat(&self, request: ChatRequest<'_>) -> Result<ChatResponse, LlmError> {
            self.calls.lock().unwrap().push(RecordedCall {
                system: request.system.to_owned(),
                messages: request.messages.to_vec(),
                temperature: request.temperature,
                max_tokens: request.max_tokens,
            });
            let mut outcomes = self.outcomes.lock().unwrap();
            let text = if outcomes.is_empty() { Ok("done".to_owned()) } else { outcomes.remove(0) }?;
            Ok(ChatResponse { text, model: "mock".into(), stop_reason: None, input_tokens: 0, output_tokens: 0 })
        }
    }

    /// Create a test `AppState` with no LLM and default limits.
    #[must_use]
    pub fn test_app_state() -> AppState {
        AppState::new(None, RateLimiter::default(), AssistantSettings::default())
    }

    /// Create a test `AppState` with a mock LLM.
    #[must_use]
    pub fn test_app_state_with_llm(llm: Arc<dyn LlmChat>) -> AppState {
        AppState::new(Some(llm), RateLimiter::default(), AssistantSettings::default())
    }

    /// Create a test `AppState` with a mock LLM and a custom rate limit.
    #[must_use]
    pub fn test_app_state_with_limits(llm: Arc<dyn LlmChat>, config: RateLimitConfig) -> AppState {
        AppState::new(Some(llm), RateLimiter::new(config), AssistantSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use client::content::INVENTORY;

    #[test]
    fn new_state_carries_showroom_preamble() {
        let state = test_helpers::test_app_state();
        assert!(state.llm.is_none());
        for car in INVENTORY {
            assert!(state.preamble.contains(car.name));
        }
    }

    #[test]
    fn clones_share_the_rate_limiter() {
        let state = test_helpers::test_app_state();
        let clone = state.clone();
        let session = uuid::Uuid::new_v4();
        for _ in 0..state.rate_limiter.config().per_client_limit {
            state.rate_limiter.check_and_record(session).unwrap();
        }
        assert!(clone.rate_limiter.check_and_record(session).is_err());
    }
}
