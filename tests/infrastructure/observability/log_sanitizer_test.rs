use voxnote::infrastructure::observability::sanitize_for_log;

#[test]
fn given_blank_text_when_sanitizing_then_marks_empty() {
    assert_eq!(sanitize_for_log("   "), "[EMPTY]");
}

#[test]
fn given_short_text_when_sanitizing_then_returns_trimmed() {
    assert_eq!(sanitize_for_log("  hello  "), "hello");
}

#[test]
fn given_long_text_when_sanitizing_then_truncates_with_total() {
    let text = "é".repeat(150);

    let sanitized = sanitize_for_log(&text);

    assert!(sanitized.starts_with(&"é".repeat(100)));
    assert!(sanitized.ends_with("... (150 chars total)"));
}

#[test]
fn given_credentials_when_sanitizing_then_redacts_every_value() {
    let sanitized = sanitize_for_log("Authorization: Bearer sk-123 then api_key=abc&token=xyz");

    assert_eq!(
        sanitized,
        "Authorization: Bearer [REDACTED] then api_key=[REDACTED]&token=[REDACTED]"
    );
}
