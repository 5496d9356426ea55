use super::*;

// =============================================================
// Error message extraction
// =============================================================

#[test]
fn message_field_wins_when_present() {
    // A 401 with a message payload surfaces the backend text verbatim.
    let body = r#"{"message":"Bad credentials"}"#;
    assert_eq!(error_message(401, body), "Bad credentials");
}

#[test]
fn json_without_message_falls_back_to_body_text() {
    let body = r#"{"error":"Conflict"}"#;
    assert_eq!(error_message(409, body), body);
}

#[test]
fn plain_text_body_is_used_directly() {
    assert_eq!(error_message(400, "Username is already taken"), "Username is already taken");
}

#[test]
fn empty_body_falls_back_to_generic_status_line() {
    assert_eq!(error_message(500, ""), "request failed: 500");
    assert_eq!(error_message(503, "  \n"), "request failed: 503");
}

#[test]
fn non_string_message_field_is_ignored() {
    let body = r#"{"message":42}"#;
    assert_eq!(error_message(400, body), body);
}

// =============================================================
// Authorization header
// =============================================================

#[test]
fn authorization_value_joins_scheme_and_token() {
    let session = Session {
        token: "abc123".to_owned(),
        token_type: "Bearer".to_owned(),
        id: 1,
        username: "alice".to_owned(),
        email: "a@x.com".to_owned(),
        roles: vec!["ROLE_USER".to_owned()],
    };
    assert_eq!(authorization_value(&session), "Bearer abc123");
}

// =============================================================
// ApiError display
// =============================================================

#[test]
fn api_error_displays_its_message() {
    let err = ApiError {
        status: Some(401),
        message: "Bad credentials".to_owned(),
    };
    assert_eq!(err.to_string(), "Bad credentials");
}

#[test]
fn native_stub_error_has_no_status() {
    let err = ApiError::unavailable();
    assert_eq!(err.status, None);
    assert!(!err.message.is_empty());
}
