use super::*;

fn request_json(messages: &[Message]) -> serde_json::Value {
    let req = ChatRequest { system: "be Chacha", messages, temperature: 0.7, max_tokens: 1024 };
    serde_json::to_value(build_request(req)).unwrap()
}

// =============================================================================
// build_request
// =============================================================================

#[test]
fn request_carries_system_instruction_and_config() {
    let json = request_json(&[Message::user("hello")]);
    assert_eq!(json["systemInstruction"]["parts"][0]["text"], "be Chacha");
    assert!(json["systemInstruction"].get("role").is_none());
    let temperature = json["generationConfig"]["temperature"].as_f64().unwrap();
    assert!((temperature - 0.7).abs() < 1e-6);
    assert_eq!(json["generationConfig"]["maxOutputTokens"], 1024);
}

#[test]
fn request_maps_roles_in_order() {
    let json = request_json(&[Message::user("a"), Message::model("b"), Message::user("c")]);
    let contents = json["contents"].as_array().unwrap();
    assert_eq!(contents.len(), 3);
    assert_eq!(contents[0]["role"], "user");
    assert_eq!(contents[1]["role"], "model");
    assert_eq!(contents[1]["parts"][0]["text"], "b");
    assert_eq!(contents[2]["parts"][0]["text"], "c");
}

// =============================================================================
// parse_response
// =============================================================================

#[test]
fn parse_text_response() {
    let json = serde_json::json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": "Solid iron, " }, { "text": "beta!" }] },
            "finishReason": "STOP"
        }],
        "usageMetadata": { "promptTokenCount": 120, "candidatesTokenCount": 8 },
        "modelVersion": "gemini-2.5-flash-001"
    })
    .to_string();
    let resp = parse_response(&json, "gemini-2.5-flash").unwrap();
    assert_eq!(resp.text, "Solid iron, beta!");
    assert_eq!(resp.stop_reason.as_deref(), Some("STOP"));
    assert_eq!(resp.model, "gemini-2.5-flash-001");
    assert_eq!(resp.input_tokens, 120);
    assert_eq!(resp.output_tokens, 8);
}

#[test]
fn parse_skips_thought_parts() {
    let json = serde_json::json!({
        "candidates": [{
            "content": { "parts": [{ "text": "thinking...", "thought": true }, { "text": "answer" }] }
        }]
    })
    .to_string();
    let resp = parse_response(&json, "m").unwrap();
    assert_eq!(resp.text, "answer");
}

#[test]
fn parse_without_candidates_yields_empty_text() {
    let json = serde_json::json!({ "promptFeedback": { "blockReason": "SAFETY" } }).to_string();
    let resp = parse_response(&json, "gemini-2.5-flash").unwrap();
    assert!(resp.text.is_empty());
    assert_eq!(resp.model, "gemini-2.5-flash");
    assert_eq!(resp.input_tokens, 0);
}

#[test]
fn parse_invalid_json() {
    assert!(matches!(parse_response("not json", "m"), Err(LlmError::ApiParse(_))));
}
