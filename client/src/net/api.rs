//! REST helpers for talking to the storefront server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error, since the assistant is only
//! driven from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` instead of panics so a failed assistant
//! turn degrades to a console log without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::AssistantRequest;
#[cfg(feature = "hydrate")]
use super::types::{ASSISTANT_CHAT_PATH, AssistantReply};

#[cfg(any(test, feature = "hydrate"))]
fn assistant_failed_message(status: u16) -> String {
    match status {
        429 => "assistant request rate limited: 429".to_owned(),
        503 => "assistant not configured: 503".to_owned(),
        other => format!("assistant request failed: {other}"),
    }
}

/// Send one assistant turn via `POST /api/assistant/chat`.
///
/// # Errors
///
/// Returns an error string if the request cannot be sent, the server answers
/// with a non-OK status, or the body does not parse.
pub async fn send_assistant_message(request: &AssistantRequest) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(ASSISTANT_CHAT_PATH)
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(assistant_failed_message(resp.status()));
        }
        let body: AssistantReply = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.text)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err("not available on server".to_owned())
    }
}
