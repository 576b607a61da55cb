//! Assistant chat route.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use tracing::warn;

use client::net::types::{AssistantReply, AssistantRequest};

use crate::services::assistant::{self, AssistantError};
use crate::state::AppState;

/// `POST /api/assistant/chat`: answer one visitor turn.
pub async fn chat(
    State(state): State<AppState>,
    Json(body): Json<AssistantRequest>,
) -> Result<Json<AssistantReply>, StatusCode> {
    let text = assistant::handle_chat(&state, &body).await.map_err(|e| {
        warn!(error = %e, "assistant: request rejected");
        assistant_error_to_status(&e)
    })?;
    Ok(Json(AssistantReply { text }))
}

pub(crate) fn assistant_error_to_status(err: &AssistantError) -> StatusCode {
    match err {
        AssistantError::EmptyMessage | AssistantError::InvalidSession(_) => StatusCode::BAD_REQUEST,
        AssistantError::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
        AssistantError::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
    }
}

#[cfg(test)]
#[path = "assistant_test.rs"]
mod tests;
