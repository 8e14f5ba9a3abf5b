use super::*;

// =============================================================
// ErrorDetail
// =============================================================

#[test]
fn string_detail_is_used_verbatim() {
    let detail: ErrorDetail = serde_json::from_str("\"Incorrect email or password\"").unwrap();
    assert_eq!(detail.message(), "Incorrect email or password");
}

#[test]
fn validation_detail_joins_messages() {
    let detail: ErrorDetail = serde_json::from_value(serde_json::json!([
        { "loc": ["body", "email"], "msg": "value is not a valid email address", "type": "value_error" },
        { "loc": ["body", "password"], "msg": "String should have at least 6 characters", "type": "string_too_short" }
    ]))
    .unwrap();
    assert_eq!(detail.message(), "value is not a valid email address, String should have at least 6 characters");
}

#[test]
fn single_validation_issue_has_no_separator() {
    let detail: ErrorDetail = serde_json::from_value(serde_json::json!([{ "msg": "invalid credentials" }])).unwrap();
    assert_eq!(detail.message(), "invalid credentials");
}

// =============================================================
// ApiError
// =============================================================

#[test]
fn from_status_parses_detail_envelope() {
    let err = ApiError::from_status(401, r#"{"detail":"Incorrect email or password"}"#);
    assert_eq!(err.status(), Some(401));
    assert_eq!(err.user_message("Login failed"), "Incorrect email or password");
}

#[test]
fn from_status_tolerates_non_json_body() {
    let err = ApiError::from_status(502, "<html>Bad Gateway</html>");
    assert_eq!(err, ApiError::Status { status: 502, detail: None });
    assert_eq!(err.user_message("Login failed"), "Login failed");
}

#[test]
fn network_error_uses_fallback() {
    let err = ApiError::Network("connection refused".to_owned());
    assert_eq!(err.user_message("Registration failed"), "Registration failed");
}

#[test]
fn empty_detail_uses_fallback() {
    let err = ApiError::Status { status: 422, detail: Some(ErrorDetail::Validation(Vec::new())) };
    assert_eq!(err.user_message("Failed to save package."), "Failed to save package.");
}

#[test]
fn not_found_checks_status() {
    assert!(ApiError::from_status(404, r#"{"detail":"Delivery not found"}"#).is_not_found());
    assert!(!ApiError::Unavailable.is_not_found());
}
