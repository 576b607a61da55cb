//! Assistant service: visitor question -> preamble + history -> LLM -> reply.
//!
//! DESIGN
//! ======
//! `AssistantSession` is the only path to the model. It never surfaces a
//! provider error to the visitor: failures are logged and replaced by one of
//! two fixed apologies, so the chat panel always gets a reply to show.
//! Rate limiting and input validation happen in [`handle_chat`] before a
//! session is ever consulted.

use std::sync::Arc;

use serde::Serialize;
use tracing::{error, info, warn};
use uuid::Uuid;

use client::content::{ASSISTANT_PERSONA, INVENTORY};
use client::net::types::{AssistantRequest, ChatRole, WireMessage};
use client::state::catalog::Car;

use crate::llm::LlmChat;
use crate::llm::config::parse_or;
use crate::llm::types::{ChatRequest, Message};
use crate::rate_limit::RateLimitError;
use crate::state::AppState;

pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_MAX_TOKENS: u32 = 1024;

/// Reply when the model answers with an empty body.
pub const EMPTY_REPLY_APOLOGY: &str =
    "I apologize, I'm having a bit of trouble connecting to my knowledge base right now. Please try again.";

/// Reply when the model call itself fails.
pub const FAILURE_APOLOGY: &str =
    "I'm currently undergoing maintenance. Please contact a human sales representative.";

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum AssistantError {
    #[error("LLM not configured")]
    NotConfigured,
    #[error("rate limited: {0}")]
    RateLimited(#[from] RateLimitError),
    #[error("message is empty")]
    EmptyMessage,
    #[error("invalid session id: {0}")]
    InvalidSession(String),
}

/// Sampling parameters applied to every assistant call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssistantSettings {
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for AssistantSettings {
    fn default() -> Self {
        Self { temperature: DEFAULT_TEMPERATURE, max_tokens: DEFAULT_MAX_TOKENS }
    }
}

impl AssistantSettings {
    /// Read `LLM_TEMPERATURE` and `LLM_MAX_TOKENS`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            temperature: parse_or(lookup("LLM_TEMPERATURE"), DEFAULT_TEMPERATURE),
            max_tokens: parse_or(lookup("LLM_MAX_TOKENS"), DEFAULT_MAX_TOKENS),
        }
    }
}

// =============================================================================
// PREAMBLE
// =============================================================================

#[derive(Serialize)]
struct StockEntry<'a> {
    name: &'a str,
    brand: &'a str,
    price: u64,
}

/// Persona text followed by a JSON snapshot of the stock on the floor.
#[must_use]
pub fn build_preamble(persona: &str, cars: &[Car]) -> String {
    let stock: Vec<StockEntry<'_>> = cars
        .iter()
        .map(|car| StockEntry { name: car.name, brand: car.brand, price: car.price })
        .collect();
    let snapshot = serde_json::to_string(&stock).unwrap_or_else(|_| "[]".into());
    format!("{persona}\n\nCurrent Inventory: {snapshot}")
}

/// Preamble for the bundled showroom inventory.
#[must_use]
pub fn showroom_preamble() -> String {
    build_preamble(ASSISTANT_PERSONA, INVENTORY)
}

// =============================================================================
// SESSION
// =============================================================================

pub struct AssistantSession {
    llm: Arc<dyn LlmChat>,
    preamble: Arc<str>,
    settings: AssistantSettings,
}

impl AssistantSession {
    #[must_use]
    pub fn new(llm: Arc<dyn LlmChat>, preamble: Arc<str>, settings: AssistantSettings) -> Self {
        Self { llm, preamble, settings }
    }

    /// Ask the model one question with the prior turns as context.
    ///
    /// Always yields text for the transcript; no retry is attempted.
    pub async fn send(&self, history: &[WireMessage], message: &str) -> String {
        let mut messages: Vec<Message> = history.iter().map(to_llm_message).collect();
        messages.push(Message::user(message));

        let request = ChatRequest {
            system: &self.preamble,
            messages: &messages,
            temperature: self.settings.temperature,
            max_tokens: self.settings.max_tokens,
        };

        match self.llm.chat(request).await {
            Ok(response) if response.text.trim().is_empty() => {
                warn!(model = %response.model, "assistant: empty reply");
                EMPTY_REPLY_APOLOGY.to_owned()
            }
            Ok(response) => {
                info!(
                    model = %response.model,
                    input_tokens = response.input_tokens,
                    output_tokens = response.output_tokens,
                    "assistant: reply received"
                );
                response.text
            }
            Err(e) => {
                error!(error = %e, "assistant: llm call failed");
                FAILURE_APOLOGY.to_owned()
            }
        }
    }
}

fn to_llm_message(wire: &WireMessage) -> Message {
    match wire.role {
        ChatRole::User => Message::user(wire.text.clone()),
        ChatRole::Model => Message::model(wire.text.clone()),
    }
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Validate, rate-limit, and answer one visitor turn.
///
/// # Errors
///
/// Returns an error for a blank message, a malformed session id, an exceeded
/// rate limit, or a server with no LLM configured.
pub async fn handle_chat(state: &AppState, request: &AssistantRequest) -> Result<String, AssistantError> {
    let message = request.message.trim();
    if message.is_empty() {
        return Err(AssistantError::EmptyMessage);
    }
    let session_id = Uuid::parse_str(&request.session_id)
        .map_err(|_| AssistantError::InvalidSession(request.session_id.clone()))?;
    let Some(llm) = state.llm.clone() else {
        return Err(AssistantError::NotConfigured);
    };

    state.rate_limiter.check_and_record(session_id)?;
    info!(%session_id, history_len = request.history.len(), message_len = message.len(), "assistant: message received");

    let session = AssistantSession::new(llm, state.preamble.clone(), state.assistant_settings);
    Ok(session.send(&request.history, message).await)
}

#[cfg(test)]
#[path = "assistant_test.rs"]
mod tests;
