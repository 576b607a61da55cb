//! Assistant ("Chacha") transcript and compose state.
//!
//! DESIGN
//! ======
//! The panel owns an ordered, growing transcript. A send appends the user's
//! turn immediately and marks the panel loading; completion appends exactly
//! one model turn on success and nothing on failure. Either way loading is
//! cleared so the compose row re-enables.

#[cfg(test)]
#[path = "assistant_test.rs"]
mod assistant_test;

use crate::content::ASSISTANT_GREETING;
use crate::net::types::{AssistantRequest, ChatRole, WireMessage};

/// Id of the canned greeting; it is never sent upstream as history.
pub const GREETING_ID: &str = "greeting";

/// A single transcript entry.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    pub text: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AssistantState {
    /// Identifies this browser session to the server's rate limiter.
    pub session_id: String,
    pub messages: Vec<ChatMessage>,
    pub input: String,
    pub loading: bool,
}

impl AssistantState {
    /// Fresh transcript containing only the greeting.
    #[must_use]
    pub fn new(session_id: String, now_ms: f64) -> Self {
        Self {
            session_id,
            messages: vec![ChatMessage {
                id: GREETING_ID.to_owned(),
                role: ChatRole::Model,
                text: ASSISTANT_GREETING.to_owned(),
                timestamp: now_ms,
            }],
            input: String::new(),
            loading: false,
        }
    }

    /// Whether the compose row should accept a send right now.
    #[must_use]
    pub fn can_send(&self) -> bool {
        !self.loading && !self.input.trim().is_empty()
    }

    /// Start a turn from the current input.
    ///
    /// Returns `None` (and changes nothing) for blank input or while a
    /// request is in flight. Otherwise appends the user turn, clears the
    /// input, sets `loading`, and returns the request to send.
    pub fn begin_send(&mut self, now_ms: f64) -> Option<AssistantRequest> {
        if !self.can_send() {
            return None;
        }
        let text = self.input.trim().to_owned();
        let history = self
            .messages
            .iter()
            .filter(|m| m.id != GREETING_ID)
            .map(|m| WireMessage { role: m.role, text: m.text.clone() })
            .collect();

        self.messages.push(ChatMessage {
            id: uuid::Uuid::new_v4().to_string(),
            role: ChatRole::User,
            text: text.clone(),
            timestamp: now_ms,
        });
        self.input.clear();
        self.loading = true;

        Some(AssistantRequest { session_id: self.session_id.clone(), history, message: text })
    }

    /// Finish the in-flight turn.
    ///
    /// `Ok` appends one model message; `Err` leaves the transcript as is.
    pub fn complete(&mut self, outcome: Result<String, String>, now_ms: f64) {
        if let Ok(text) = outcome {
            self.messages.push(ChatMessage {
                id: uuid::Uuid::new_v4().to_string(),
                role: ChatRole::Model,
                text,
                timestamp: now_ms,
            });
        }
        self.loading = false;
    }
}
