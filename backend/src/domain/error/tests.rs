//! Tests for the domain error payload and its client-facing serialisation.

use super::*;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn email_error() -> Error {
    Error::validation("Invalid email format", "email")
}

#[rstest]
fn validation_constructor_sets_code_and_field(email_error: Error) {
    assert_eq!(email_error.code(), ErrorCode::ValidationError);
    assert_eq!(email_error.message(), "Invalid email format");
    assert_eq!(email_error.field(), Some("email"));
}

#[rstest]
fn not_found_message_names_resource_and_identifier() {
    let err = Error::not_found("User", "test-id");
    assert_eq!(err.code(), ErrorCode::NotFound);
    assert_eq!(err.message(), "User with identifier 'test-id' not found");
    assert_eq!(err.field(), None);
}

#[rstest]
fn try_new_rejects_blank_messages() {
    let result = Error::try_new(ErrorCode::ValidationError, "   ");
    assert_eq!(result, Err(ErrorValidationError::EmptyMessage));
}

#[rstest]
#[case(ErrorCode::ValidationError, "Validation failed")]
#[case(ErrorCode::InternalError, "Internal Server Error")]
fn new_falls_back_to_default_message(#[case] code: ErrorCode, #[case] expected: &str) {
    let err = Error::new(code, "");
    assert_eq!(err.message(), expected);
}

#[rstest]
#[case(ErrorCode::ValidationError, "VALIDATION_ERROR")]
#[case(ErrorCode::NotFound, "NOT_FOUND")]
#[case(ErrorCode::InvalidContentType, "INVALID_CONTENT_TYPE")]
#[case(ErrorCode::InternalError, "INTERNAL_ERROR")]
fn codes_serialise_in_screaming_snake_case(#[case] code: ErrorCode, #[case] expected: &str) {
    let value = serde_json::to_value(code).expect("serialise code");
    assert_eq!(value, Value::String(expected.to_owned()));
    assert_eq!(code.as_str(), expected);
}

#[rstest]
fn body_uses_error_code_and_field_keys(email_error: Error) {
    let value = serde_json::to_value(email_error.with_trace_id(TRACE_ID)).expect("serialise");
    assert_eq!(
        value,
        json!({
            "error": "Invalid email format",
            "code": "VALIDATION_ERROR",
            "field": "email",
        })
    );
}

#[rstest]
fn body_omits_absent_field() {
    let value = serde_json::to_value(Error::not_found("User", "x")).expect("serialise");
    assert!(value.get("field").is_none());
}

#[rstest]
fn deserialisation_rejects_blank_messages() {
    let result = serde_json::from_value::<Error>(json!({
        "error": " ",
        "code": "NOT_FOUND",
    }));
    assert!(result.is_err());
}

#[rstest]
fn redaction_hides_internal_detail_but_keeps_trace_id() {
    let err = Error::internal("lock poisoned")
        .with_field("secret")
        .with_trace_id(TRACE_ID);

    let redacted = err.redacted();
    assert_eq!(redacted.code(), ErrorCode::InternalError);
    assert_eq!(redacted.message(), "Internal Server Error");
    assert_eq!(redacted.field(), None);
    assert_eq!(redacted.trace_id(), Some(TRACE_ID));
}

#[rstest]
fn redaction_keeps_caller_facing_errors(email_error: Error) {
    assert_eq!(email_error.redacted(), email_error);
}

#[tokio::test]
async fn new_captures_trace_id_in_scope() {
    let trace_id = TraceId::generate();
    let err = TraceId::scope(trace_id, async { Error::internal("boom") }).await;
    assert_eq!(err.trace_id(), Some(trace_id.to_string().as_str()));
}

#[rstest]
fn new_has_no_trace_id_out_of_scope() {
    assert!(Error::internal("boom").trace_id().is_none());
}
