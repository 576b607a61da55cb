use super::*;

#[test]
fn assistant_failed_message_names_rate_limit() {
    assert_eq!(assistant_failed_message(429), "assistant request rate limited: 429");
}

#[test]
fn assistant_failed_message_names_missing_config() {
    assert_eq!(assistant_failed_message(503), "assistant not configured: 503");
}

#[test]
fn assistant_failed_message_formats_other_status() {
    assert_eq!(assistant_failed_message(500), "assistant request failed: 500");
}
