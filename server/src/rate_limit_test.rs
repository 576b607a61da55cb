use super::*;

fn small_limiter(per_client: usize, global: usize) -> RateLimiter {
    RateLimiter::new(RateLimitConfig {
        per_client_limit: per_client,
        per_client_window: Duration::from_secs(60),
        global_limit: global,
        global_window: Duration::from_secs(60),
    })
}

#[test]
fn per_client_allows_up_to_limit() {
    let rl = RateLimiter::default();
    let client = Uuid::new_v4();
    let now = Instant::now();

    for i in 0..DEFAULT_PER_CLIENT_LIMIT {
        assert!(rl.check_and_record_at(client, now).is_ok(), "request {i} should succeed");
    }
    assert!(matches!(
        rl.check_and_record_at(client, now),
        Err(RateLimitError::PerClientExceeded { limit: DEFAULT_PER_CLIENT_LIMIT, window_secs: 60 })
    ));
}

#[test]
fn global_allows_up_to_limit() {
    let rl = RateLimiter::default();
    let now = Instant::now();

    // Distinct sessions so the per-session limit never trips first.
    for i in 0..DEFAULT_GLOBAL_LIMIT {
        assert!(rl.check_and_record_at(Uuid::new_v4(), now).is_ok(), "request {i} should succeed");
    }
    assert!(matches!(
        rl.check_and_record_at(Uuid::new_v4(), now),
        Err(RateLimitError::GlobalExceeded { limit: DEFAULT_GLOBAL_LIMIT, .. })
    ));
}

#[test]
fn window_expiry_allows_new_requests() {
    let rl = small_limiter(2, 100);
    let client = Uuid::new_v4();
    let start = Instant::now();

    rl.check_and_record_at(client, start).unwrap();
    rl.check_and_record_at(client, start).unwrap();
    assert!(rl.check_and_record_at(client, start).is_err());

    let after_window = start + Duration::from_secs(60) + Duration::from_millis(1);
    assert!(rl.check_and_record_at(client, after_window).is_ok());
}

#[test]
fn distinct_clients_do_not_interfere() {
    let rl = small_limiter(1, 100);
    let client_a = Uuid::new_v4();
    let client_b = Uuid::new_v4();
    let now = Instant::now();

    rl.check_and_record_at(client_a, now).unwrap();
    assert!(rl.check_and_record_at(client_a, now).is_err());
    assert!(rl.check_and_record_at(client_b, now).is_ok());
}

#[test]
fn rejected_requests_are_not_recorded() {
    let rl = small_limiter(1, 2);
    let client = Uuid::new_v4();
    let now = Instant::now();

    rl.check_and_record_at(client, now).unwrap();
    for _ in 0..5 {
        assert!(rl.check_and_record_at(client, now).is_err());
    }
    // Only one slot of the global budget is used.
    assert!(rl.check_and_record_at(Uuid::new_v4(), now).is_ok());
}

#[test]
fn config_reads_overrides_and_defaults() {
    let cfg = RateLimitConfig::from_lookup(|key| match key {
        "RATE_LIMIT_PER_CLIENT" => Some("3".into()),
        "RATE_LIMIT_GLOBAL_WINDOW_SECS" => Some("5".into()),
        "RATE_LIMIT_GLOBAL" => Some("many".into()),
        _ => None,
    });
    assert_eq!(cfg.per_client_limit, 3);
    assert_eq!(cfg.per_client_window, Duration::from_secs(DEFAULT_PER_CLIENT_WINDOW_SECS));
    assert_eq!(cfg.global_limit, DEFAULT_GLOBAL_LIMIT);
    assert_eq!(cfg.global_window, Duration::from_secs(5));
}

#[test]
fn error_messages_name_the_limit() {
    let err = RateLimitError::PerClientExceeded { limit: 10, window_secs: 60 };
    assert_eq!(err.to_string(), "per-session rate limit exceeded (max 10 requests/60s)");
}
