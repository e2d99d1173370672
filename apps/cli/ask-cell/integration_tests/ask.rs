use crate::run_cli;

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ANSWER_PATH: &str = "/api/ask";

fn endpoint(server: &MockServer) -> String {
    format!("{}{ANSWER_PATH}", server.uri())
}

/// **VALUE**: Full ask flow: question out, normalized answer printed.
///
/// **WHY THIS MATTERS**: This is the path every user takes.
///
/// **BUG THIS CATCHES**: Would catch the explicit token not reaching the
/// request, or the answer being printed without normalization.
#[tokio::test]
async fn given_html_answer_when_ask_then_prints_normalized_text() {
    // GIVEN: A service returning an HTML analysis
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ANSWER_PATH))
        .and(header("authorization", "Bearer tok-cli-1"))
        .and(body_json(json!({"question": "How did sales do?"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "analysis": "<h2>Summary</h2><p>Sales <strong>up</strong> &amp; costs down</p>"
        })))
        .expect(1)
        .mount(&server)
        .await;
    let dir = tempfile::tempdir().unwrap();

    // WHEN
    let (result, stdout) = run_cli(
        dir.path(),
        &[
            "--endpoint",
            &endpoint(&server),
            "ask",
            "How did sales do?",
            "--token",
            "tok-cli-1",
        ],
        "",
    )
    .await;

    // THEN
    assert!(result.is_ok(), "{result:?}");
    assert_eq!(
        stdout,
        format!("Summary\n{}\nSales **up** & costs down\n", "=".repeat(40))
    );
}

/// **VALUE**: `--raw` prints the service text untouched.
///
/// **BUG THIS CATCHES**: Would catch normalization leaking into raw mode.
#[tokio::test]
async fn given_raw_flag_when_ask_then_prints_service_text_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ANSWER_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "formatted_answer": "<b>42</b>"
        })))
        .mount(&server)
        .await;
    let dir = tempfile::tempdir().unwrap();

    let (result, stdout) = run_cli(
        dir.path(),
        &["--endpoint", &endpoint(&server), "ask", "q", "--raw", "--token", "t0k3n-raw"],
        "",
    )
    .await;

    assert!(result.is_ok(), "{result:?}");
    assert_eq!(stdout, "<b>42</b>\n");
}

/// **VALUE**: Without a question argument the question is read from stdin.
///
/// **BUG THIS CATCHES**: Would catch the trailing newline from stdin being
/// sent as part of the question.
#[tokio::test]
async fn given_question_on_stdin_when_ask_then_trailing_newline_dropped() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_json(json!({"question": "Piped question?"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"success": true, "analysis": "Yes"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    let dir = tempfile::tempdir().unwrap();

    let (result, stdout) = run_cli(
        dir.path(),
        &["--endpoint", &endpoint(&server), "ask", "--token", "t0k3n-pipe"],
        "Piped question?\n",
    )
    .await;

    assert!(result.is_ok(), "{result:?}");
    assert_eq!(stdout, "Yes\n");
}

/// **VALUE**: A blank question never reaches the network.
///
/// **BUG THIS CATCHES**: Would catch the empty-input guard moving after the
/// HTTP call.
#[tokio::test]
async fn given_blank_question_when_ask_then_fails_without_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let dir = tempfile::tempdir().unwrap();

    let (result, stdout) = run_cli(
        dir.path(),
        &["--endpoint", &endpoint(&server), "ask", "   ", "--token", "t0k3n-blank"],
        "",
    )
    .await;

    let err = result.unwrap_err();
    assert!(
        err.user_message().contains("Please select a cell"),
        "got: {}",
        err.user_message()
    );
    assert!(stdout.is_empty());
}

/// **VALUE**: A rejected token surfaces the token message and prints nothing.
///
/// **BUG THIS CATCHES**: Would catch an error body being printed as if it
/// were an answer.
#[tokio::test]
async fn given_unauthorized_when_ask_then_error_and_empty_stdout() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;
    let dir = tempfile::tempdir().unwrap();

    let (result, stdout) = run_cli(
        dir.path(),
        &["--endpoint", &endpoint(&server), "ask", "q", "--token", "wrong-t0k3n"],
        "",
    )
    .await;

    let err = result.unwrap_err();
    assert!(err.user_message().contains("Invalid API token"));
    assert!(stdout.is_empty());
}

/// **VALUE**: The stored token is used when nothing else is given.
///
/// **BUG THIS CATCHES**: Would catch `ask` ignoring the credential store.
#[tokio::test]
async fn given_stored_token_when_ask_then_sent_as_bearer() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(header("authorization", "Bearer stored-t0k3n-9"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"success": true, "analysis": "ok"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    let dir = tempfile::tempdir().unwrap();

    let (set_result, _) = run_cli(dir.path(), &["token", "set", "stored-t0k3n-9"], "").await;
    assert!(set_result.is_ok(), "{set_result:?}");

    let (result, stdout) = run_cli(
        dir.path(),
        &["--endpoint", &endpoint(&server), "ask", "q"],
        "",
    )
    .await;

    assert!(result.is_ok(), "{result:?}");
    assert_eq!(stdout, "ok\n");
}
