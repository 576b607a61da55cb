//! Shared wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! The server crate depends on these definitions directly, so a schema change
//! breaks the build on both sides at once instead of drifting.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Path of the assistant endpoint.
pub const ASSISTANT_CHAT_PATH: &str = "/api/assistant/chat";

/// Who authored a transcript entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

/// One prior turn of conversation context.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireMessage {
    pub role: ChatRole,
    pub text: String,
}

/// `POST /api/assistant/chat` request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantRequest {
    /// Browser session id (UUID string), used for rate limiting only.
    pub session_id: String,
    /// Prior turns, oldest first, excluding the canned greeting.
    #[serde(default)]
    pub history: Vec<WireMessage>,
    /// The new user message.
    pub message: String,
}

/// `POST /api/assistant/chat` success body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantReply {
    pub text: String,
}
