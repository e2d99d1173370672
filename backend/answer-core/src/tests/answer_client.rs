// Unit tests for response interpretation and wire types
// Network behaviour is covered in integration_tests/answer_client.rs

use crate::answer_client::{
    AnswerRequest, AnswerResponse, NO_ANSWER_FALLBACK, Question, interpret_reply,
};
use crate::error::ServiceError;

use common::HttpStatusCode;

use serde_json::json;

fn reply(status: u16, body: &str) -> Result<String, ServiceError> {
    interpret_reply(HttpStatusCode(status), "Reason", body).map(|answer| answer.into_string())
}

// ============================================
// QUESTION
// ============================================

/// **VALUE**: Verifies blank questions are rejected before anything else happens.
///
/// **BUG THIS CATCHES**: Would catch whitespace-only cells being sent to the service.
#[test]
fn given_blank_question_when_parsed_then_empty_input() {
    assert!(matches!(Question::parse(""), Err(ServiceError::EmptyInput { .. })));
    assert!(matches!(
        Question::parse("   \n\t"),
        Err(ServiceError::EmptyInput { .. })
    ));
}

#[test]
fn given_padded_question_when_parsed_then_text_kept_verbatim() {
    let question = Question::parse("  What is revenue? ").unwrap();

    assert_eq!(question.as_str(), "  What is revenue? ");
}

#[test]
fn given_question_when_request_serialized_then_single_question_field() {
    let question = Question::parse("Why?").unwrap();

    let body = serde_json::to_value(AnswerRequest::from(question)).unwrap();

    assert_eq!(body, json!({"question": "Why?"}));
}

// ============================================
// STATUS MAPPING
// ============================================

/// **VALUE**: Verifies 401 maps to Unauthorized whatever the body says.
///
/// **WHY THIS MATTERS**: The status surface tells the user to fix their token only for
/// this kind.
///
/// **BUG THIS CATCHES**: Would catch body parsing being attempted before status checks.
#[test]
fn given_401_when_interpreted_then_unauthorized_regardless_of_body() {
    let result = reply(401, r#"{"success": true, "analysis": "secret"}"#);

    assert!(matches!(result, Err(ServiceError::Unauthorized { .. })));
    assert!(matches!(reply(401, ""), Err(ServiceError::Unauthorized { .. })));
}

#[test]
fn given_429_when_interpreted_then_rate_limited() {
    assert!(matches!(
        reply(429, "slow down"),
        Err(ServiceError::RateLimited { .. })
    ));
}

/// **VALUE**: Verifies 400 carries the server's validation message when present.
///
/// **BUG THIS CATCHES**: Would catch the `error` field being ignored or unparseable
/// bodies producing a JSON error instead of the fallback.
#[test]
fn given_400_when_interpreted_then_bad_request_with_message_or_fallback() {
    match reply(400, r#"{"error": "bad format"}"#) {
        Err(ServiceError::BadRequest { message, .. }) => assert_eq!(message, "bad format"),
        other => panic!("expected BadRequest, got {other:?}"),
    }

    for body in ["<html>oops</html>", "", r#"{"detail": "x"}"#, r#"{"error": ""}"#] {
        match reply(400, body) {
            Err(ServiceError::BadRequest { message, .. }) => {
                assert_eq!(message, "Invalid request", "body {body:?}")
            }
            other => panic!("expected BadRequest for {body:?}, got {other:?}"),
        }
    }
}

#[test]
fn given_other_error_status_when_interpreted_then_service_unavailable_with_status() {
    let result = interpret_reply(HttpStatusCode(503), "Service Unavailable", "down");

    match result {
        Err(ServiceError::ServiceUnavailable {
            status, status_text, ..
        }) => {
            assert_eq!(status, Some(HttpStatusCode(503)));
            assert_eq!(status_text, "Service Unavailable");
        }
        other => panic!("expected ServiceUnavailable, got {other:?}"),
    }

    assert!(matches!(
        reply(404, ""),
        Err(ServiceError::ServiceUnavailable { .. })
    ));
}

// ============================================
// SUCCESS BODIES
// ============================================

/// **VALUE**: Verifies the raw answer is returned untouched on success.
///
/// **BUG THIS CATCHES**: Would catch normalization leaking into the client layer.
#[test]
fn given_success_with_analysis_when_interpreted_then_raw_answer() {
    assert_eq!(
        reply(200, r#"{"success": true, "analysis": "<p>Hi</p>"}"#).unwrap(),
        "<p>Hi</p>"
    );
}

#[test]
fn given_success_with_answer_fields_when_interpreted_then_analysis_preferred() {
    assert_eq!(
        reply(
            200,
            r#"{"success": true, "analysis": "A", "formatted_answer": "F"}"#
        )
        .unwrap(),
        "A"
    );
    assert_eq!(
        reply(200, r#"{"success": true, "formatted_answer": "F"}"#).unwrap(),
        "F"
    );
    assert_eq!(
        reply(
            200,
            r#"{"success": true, "analysis": "", "formatted_answer": "F"}"#
        )
        .unwrap(),
        "F"
    );
    assert_eq!(
        reply(201, r#"{"success": true, "analysis": null}"#).unwrap(),
        NO_ANSWER_FALLBACK
    );
}

#[test]
fn given_logical_failure_when_interpreted_then_application_error() {
    match reply(200, r#"{"success": false, "error": "oops"}"#) {
        Err(ServiceError::ApplicationError { message, .. }) => assert_eq!(message, "oops"),
        other => panic!("expected ApplicationError, got {other:?}"),
    }

    for body in [r#"{"success": false}"#, r#"{"analysis": "ignored"}"#] {
        match reply(200, body) {
            Err(ServiceError::ApplicationError { message, .. }) => {
                assert_eq!(message, "Unknown error occurred")
            }
            other => panic!("expected ApplicationError for {body:?}, got {other:?}"),
        }
    }
}

#[test]
fn given_malformed_success_body_when_interpreted_then_application_error() {
    match reply(200, "not json at all") {
        Err(ServiceError::ApplicationError { message, .. }) => {
            assert!(message.contains("Malformed response"))
        }
        other => panic!("expected ApplicationError, got {other:?}"),
    }
}

#[test]
fn given_response_missing_fields_when_deserialized_then_defaults() {
    let response: AnswerResponse = serde_json::from_str("{}").unwrap();

    assert_eq!(response, AnswerResponse::default());
    assert!(!response.success);
}

// ============================================
// ERROR PRESENTATION
// ============================================

/// **VALUE**: Verifies errors render kind, detail and source location.
///
/// **BUG THIS CATCHES**: Would catch the location field being dropped from Display.
#[test]
fn given_service_error_when_formatted_then_includes_kind_and_location() {
    let err = reply(503, "").unwrap_err();

    let text = err.to_string();

    assert!(text.contains("Service Unavailable Error"));
    assert!(text.contains("HTTP 503"));
    assert!(text.contains(".rs:"));
}

#[test]
fn given_each_kind_when_user_message_requested_then_no_location_in_text() {
    let errors = [
        ServiceError::empty_input(),
        ServiceError::unauthorized(),
        ServiceError::rate_limited(),
        ServiceError::bad_request("bad format"),
        ServiceError::unavailable(Some(HttpStatusCode(502)), "Bad Gateway"),
        ServiceError::unavailable(None, "connection refused"),
        ServiceError::application("oops"),
    ];

    for err in &errors {
        let message = err.user_message();
        assert!(!message.is_empty());
        assert!(!message.contains(".rs:"), "location leaked: {message}");
    }

    assert!(errors[3].user_message().contains("bad format"));
    assert!(errors[4].user_message().contains("502"));
    assert!(errors[6].user_message().contains("oops"));
}

#[test]
fn given_each_kind_when_status_code_requested_then_matches_http_origin() {
    assert_eq!(ServiceError::empty_input().status_code(), None);
    assert_eq!(ServiceError::unauthorized().status_code(), Some(401));
    assert_eq!(ServiceError::rate_limited().status_code(), Some(429));
    assert_eq!(ServiceError::bad_request("x").status_code(), Some(400));
    assert_eq!(
        ServiceError::unavailable(None, "refused").status_code(),
        None
    );
    assert_eq!(
        ServiceError::unavailable(None, "refused").error_category(),
        "transport"
    );
}

/// **VALUE**: Verifies HTTP failures are logged under the side of the wire that failed.
///
/// **WHY THIS MATTERS**: Log triage separates "the service is down" from "we sent
/// something the service refused".
///
/// **BUG THIS CATCHES**: Would catch every non-mapped status collapsing into one
/// category, or the status code being lost on the way out.
#[test]
fn given_unavailable_status_when_categorised_then_split_by_status_class() {
    let server = ServiceError::unavailable(Some(HttpStatusCode(503)), "Service Unavailable");
    let client = ServiceError::unavailable(Some(HttpStatusCode(404)), "Not Found");
    let other = ServiceError::unavailable(Some(HttpStatusCode(302)), "Found");

    assert_eq!(server.error_category(), "server_error");
    assert_eq!(server.status_code(), Some(503));
    assert_eq!(client.error_category(), "client_error");
    assert_eq!(client.status_code(), Some(404));
    assert_eq!(other.error_category(), "service_unavailable");
}
