use super::*;

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
    assert_eq!(serde_json::to_string(&Role::Model).unwrap(), "\"model\"");
}

#[test]
fn message_constructors_set_role() {
    assert_eq!(Message::user("hi").role, Role::User);
    assert_eq!(Message::model("namaste").role, Role::Model);
    assert_eq!(Message::model("namaste").text, "namaste");
}

#[test]
fn message_deserializes_from_wire_shape() {
    let msg: Message = serde_json::from_str(r#"{"role":"model","text":"ok"}"#).unwrap();
    assert_eq!(msg, Message::model("ok"));
}

#[test]
fn error_display_includes_detail() {
    let err = LlmError::MissingApiKey { var: "GEMINI_API_KEY".into() };
    assert_eq!(err.to_string(), "missing API key: env var GEMINI_API_KEY not set");

    let err = LlmError::ApiResponse { status: 503, body: "overloaded".into() };
    assert_eq!(err.to_string(), "API response error: status 503");
}
