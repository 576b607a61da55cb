use super::*;
use std::time::Duration;

use axum::body::{Body, to_bytes};
use axum::http::{Request, header};
use serde_json::json;
use tower::ServiceExt;
use uuid::Uuid;

use client::net::types::AssistantReply;

use crate::rate_limit::RateLimitConfig;
use crate::services::assistant::FAILURE_APOLOGY;
use crate::llm::types::LlmError;
use crate::state::test_helpers::{self, MockLlm};

fn chat_request(body: &serde_json::Value) -> Request<Body> {
    Request::post(ASSISTANT_CHAT_PATH)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn chat_body(session_id: Uuid, message: &str) -> serde_json::Value {
    json!({
        "session_id": session_id.to_string(),
        "history": [{ "role": "model", "text": "Namaste!" }],
        "message": message,
    })
}

async fn reply_text(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let reply: AssistantReply = serde_json::from_slice(&bytes).unwrap();
    reply.text
}

#[tokio::test]
async fn healthz_is_ok() {
    let app = api_routes(test_helpers::test_app_state());
    let response = app
        .oneshot(Request::get("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn chat_returns_model_reply() {
    let app = api_routes(test_helpers::test_app_state_with_llm(MockLlm::replying("Solid iron, beta.")));
    let response = app.oneshot(chat_request(&chat_body(Uuid::new_v4(), "Is it strong?"))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(reply_text(response).await, "Solid iron, beta.");
}

#[tokio::test]
async fn chat_failure_still_answers_with_apology() {
    let mock = MockLlm::new(vec![Err(LlmError::ApiRequest("down".into()))]);
    let app = api_routes(test_helpers::test_app_state_with_llm(mock));
    let response = app.oneshot(chat_request(&chat_body(Uuid::new_v4(), "hello"))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(reply_text(response).await, FAILURE_APOLOGY);
}

#[tokio::test]
async fn chat_without_llm_is_unavailable() {
    let app = api_routes(test_helpers::test_app_state());
    let response = app.oneshot(chat_request(&chat_body(Uuid::new_v4(), "hello"))).await.unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn chat_with_empty_message_is_bad_request() {
    let app = api_routes(test_helpers::test_app_state_with_llm(MockLlm::replying("unused")));
    let response = app.oneshot(chat_request(&chat_body(Uuid::new_v4(), ""))).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn chat_history_defaults_when_omitted() {
    let app = api_routes(test_helpers::test_app_state_with_llm(MockLlm::replying("hi")));
    let body = json!({ "session_id": Uuid::new_v4().to_string(), "message": "hello" });
    let response = app.oneshot(chat_request(&body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn chat_over_global_limit_is_too_many_requests() {
    let config = RateLimitConfig {
        per_client_limit: 10,
        per_client_window: Duration::from_secs(60),
        global_limit: 1,
        global_window: Duration::from_secs(60),
    };
    let app = api_routes(test_helpers::test_app_state_with_limits(MockLlm::new(Vec::new()), config));

    let first = app.clone().oneshot(chat_request(&chat_body(Uuid::new_v4(), "one"))).await.unwrap();
    assert_eq!(first.status(), StatusCode::OK);
    let second = app.oneshot(chat_request(&chat_body(Uuid::new_v4(), "two"))).await.unwrap();
    assert_eq!(second.status(), StatusCode::TOO_MANY_REQUESTS);
}
