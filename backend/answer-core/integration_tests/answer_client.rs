use answer_core::AnswerClient;
use answer_core::error::ServiceError;

use common::{BearerToken, HttpStatusCode};

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ANSWER_PATH: &str = "/api/ask";

fn client_for(server: &MockServer) -> AnswerClient {
    AnswerClient::new(&format!("{}{ANSWER_PATH}", server.uri())).unwrap()
}

/// **VALUE**: Verifies the exact wire request: POST, JSON content type, `{"question"}` body.
///
/// **WHY THIS MATTERS**: The service validates the body shape; any drift is a 400 for
/// every user.
///
/// **BUG THIS CATCHES**: Would catch the question being trimmed, renamed, or wrapped.
#[tokio::test]
async fn given_question_when_submitted_then_posts_exact_json_body_once() {
    // GIVEN: A service that answers one well-formed request
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ANSWER_PATH))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"question": " What is churn? "})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"success": true, "analysis": "<p>Hi</p>"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    // WHEN: Submitting without a credential
    let answer = client_for(&server)
        .submit(" What is churn? ", None)
        .await
        .unwrap();

    // THEN: Raw answer comes back untouched
    assert_eq!(answer.as_str(), "<p>Hi</p>");

    // AND: No Authorization header was sent
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
}

/// **VALUE**: Verifies the bearer header is attached when a credential is present.
///
/// **BUG THIS CATCHES**: Would catch the token being sent under the wrong scheme or not
/// at all.
#[tokio::test]
async fn given_credential_when_submitted_then_bearer_header_attached() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ANSWER_PATH))
        .and(header("authorization", "Bearer tok-123"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"success": true, "formatted_answer": "ok"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let token = BearerToken::new("tok-123").unwrap();

    let answer = client_for(&server)
        .submit("Question?", Some(&token))
        .await
        .unwrap();

    assert_eq!(answer.as_str(), "ok");
}

/// **VALUE**: Verifies blank questions never reach the network.
///
/// **BUG THIS CATCHES**: Would catch the emptiness check moving after the send.
#[tokio::test]
async fn given_blank_question_when_submitted_then_empty_input_and_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);

    for question in ["", "   "] {
        let result = client.submit(question, None).await;
        assert!(matches!(result, Err(ServiceError::EmptyInput { .. })));
    }

    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn given_401_when_submitted_then_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"success": true, "analysis": "ignored"})),
        )
        .mount(&server)
        .await;

    let token = BearerToken::new("expired").unwrap();
    let result = client_for(&server).submit("Q", Some(&token)).await;

    assert!(matches!(result, Err(ServiceError::Unauthorized { .. })));
}

#[tokio::test]
async fn given_429_when_submitted_then_rate_limited() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let result = client_for(&server).submit("Q", None).await;

    assert!(matches!(result, Err(ServiceError::RateLimited { .. })));
}

#[tokio::test]
async fn given_400_with_error_field_when_submitted_then_bad_request_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"error": "bad format"})))
        .mount(&server)
        .await;

    match client_for(&server).submit("Q", None).await {
        Err(ServiceError::BadRequest { message, .. }) => assert_eq!(message, "bad format"),
        other => panic!("expected BadRequest, got {other:?}"),
    }
}

#[tokio::test]
async fn given_400_with_unparseable_body_when_submitted_then_generic_bad_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_string("<html>nope</html>"))
        .mount(&server)
        .await;

    match client_for(&server).submit("Q", None).await {
        Err(ServiceError::BadRequest { message, .. }) => assert_eq!(message, "Invalid request"),
        other => panic!("expected BadRequest, got {other:?}"),
    }
}

#[tokio::test]
async fn given_500_when_submitted_then_service_unavailable_with_status_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    match client_for(&server).submit("Q", None).await {
        Err(ServiceError::ServiceUnavailable {
            status, status_text, ..
        }) => {
            assert_eq!(status, Some(HttpStatusCode(500)));
            assert_eq!(status_text, "Internal Server Error");
        }
        other => panic!("expected ServiceUnavailable, got {other:?}"),
    }
}

#[tokio::test]
async fn given_logical_failure_when_submitted_then_application_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"success": false, "error": "oops"})),
        )
        .mount(&server)
        .await;

    match client_for(&server).submit("Q", None).await {
        Err(ServiceError::ApplicationError { message, .. }) => assert_eq!(message, "oops"),
        other => panic!("expected ApplicationError, got {other:?}"),
    }
}

/// **VALUE**: Verifies transport failures surface as ServiceUnavailable without a status.
///
/// **WHY THIS MATTERS**: Offline users must get an error they can act on, not a panic.
///
/// **BUG THIS CATCHES**: Would catch reqwest errors being unwrapped or mapped to a fake
/// HTTP status.
#[tokio::test]
async fn given_unreachable_service_when_submitted_then_unavailable_without_status() {
    // GIVEN: A port that was bound and released, so nothing is listening
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    let endpoint = format!("http://127.0.0.1:{port}{ANSWER_PATH}");

    let client = AnswerClient::new(&endpoint).unwrap();

    // WHEN: Submitting
    let result = client.submit("Q", None).await;

    // THEN: Transport-level failure, no status
    match result {
        Err(err @ ServiceError::ServiceUnavailable { status: None, .. }) => {
            assert_eq!(err.status_code(), None);
            assert_eq!(err.error_category(), "transport");
        }
        other => panic!("expected transport ServiceUnavailable, got {other:?}"),
    }
}

/// **VALUE**: Verifies a failed call does not poison the client for the next one.
#[tokio::test]
async fn given_failed_call_when_submitting_again_then_next_call_independent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_json(json!({"question": "first"})))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(body_json(json!({"question": "second"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .mount(&server)
        .await;

    let client = client_for(&server);

    assert!(client.submit("first", None).await.is_err());
    assert_eq!(
        client.submit("second", None).await.unwrap().as_str(),
        "No answer returned"
    );
}

#[test]
fn given_invalid_endpoint_when_building_client_then_url_parse_error() {
    let result = AnswerClient::new("not a url");

    assert!(matches!(
        result,
        Err(answer_core::error::AnswerClientError::UrlParse { .. })
    ));
}
