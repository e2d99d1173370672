use answer_core::config::AppConfig;
use answer_core::error::{HostError, PanelError, ServiceError};
use answer_core::normalizer::{HEADING_RULE_WIDTH, NormalizeStrategy};
use answer_core::panel::{
    ANSWER_FONT_COLOR, AnswerPanel, CellFormat, CellHost, PanelStatus, VerticalAlignment,
};
use answer_core::AnswerClient;

use common::BearerToken;

use std::cell::RefCell;
use std::sync::Mutex;

use serde_json::json;
use wiremock::matchers::{body_json, header, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================
// TEST DOUBLES
// ============================================

/// Spreadsheet stand-in: one selected cell, records every write.
struct FakeHost {
    selection: Result<String, String>,
    writes: Mutex<Vec<(String, CellFormat)>>,
}

impl FakeHost {
    fn with_selection(text: &str) -> Self {
        Self {
            selection: Ok(text.to_string()),
            writes: Mutex::new(Vec::new()),
        }
    }

    fn failing_read(message: &str) -> Self {
        Self {
            selection: Err(message.to_string()),
            writes: Mutex::new(Vec::new()),
        }
    }

    fn writes(&self) -> Vec<(String, CellFormat)> {
        self.writes.lock().unwrap().clone()
    }
}

impl CellHost for FakeHost {
    async fn read_selection(&self) -> Result<String, HostError> {
        self.selection.clone().map_err(HostError::read)
    }

    async fn write_answer(&self, text: &str, format: &CellFormat) -> Result<(), HostError> {
        self.writes
            .lock()
            .unwrap()
            .push((text.to_string(), format.clone()));
        Ok(())
    }
}

fn panel_for(server: &MockServer, strategy: NormalizeStrategy) -> AnswerPanel {
    let client = AnswerClient::new(&format!("{}/api/ask", server.uri())).unwrap();
    AnswerPanel::new(client, strategy)
}

// ============================================
// TESTS
// ============================================

/// **VALUE**: Exercises the whole read → ask → normalize → write cycle.
///
/// **WHY THIS MATTERS**: This is the single user-facing operation of the panel.
///
/// **BUG THIS CATCHES**: Would catch the raw HTML being written, the wrong cell offset
/// or formatting, or statuses out of order.
#[tokio::test]
async fn given_selected_question_when_answered_then_normalized_text_written_right_of_cell() {
    // GIVEN: A service returning an HTML answer
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_json(json!({"question": "What drove growth?"})))
        .and(header("authorization", "Bearer tok-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "analysis": "<h2>Summary</h2><p>Prices &amp; volume.</p>"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let host = FakeHost::with_selection("What drove growth?");
    let statuses = RefCell::new(Vec::new());
    let sink = |status: PanelStatus| statuses.borrow_mut().push(status);
    let token = BearerToken::new("tok-123");

    // WHEN: Running the panel
    let written = panel_for(&server, NormalizeStrategy::Pattern)
        .answer_selection(&host, &sink, token.as_ref())
        .await
        .unwrap();

    // THEN: Normalized text is written once, one column right, green/wrapped/top
    let expected = format!(
        "Summary\n{}\nPrices & volume.",
        "=".repeat(HEADING_RULE_WIDTH)
    );
    assert_eq!(written, expected);

    let writes = host.writes();
    assert_eq!(writes.len(), 1);
    assert_eq!(writes[0].0, expected);
    assert_eq!(writes[0].1, CellFormat::answer());
    assert_eq!(writes[0].1.column_offset, 1);
    assert_eq!(writes[0].1.row_offset, 0);
    assert_eq!(writes[0].1.font_color, ANSWER_FONT_COLOR);
    assert!(writes[0].1.wrap_text);
    assert_eq!(writes[0].1.vertical_alignment, VerticalAlignment::Top);

    // AND: Loading then Success
    let statuses = statuses.into_inner();
    assert_eq!(statuses.len(), 2);
    assert!(matches!(statuses[0], PanelStatus::Loading(_)));
    assert!(matches!(statuses[1], PanelStatus::Success(_)));
}

/// **VALUE**: Verifies an empty selection is reported without a network call or a write.
///
/// **BUG THIS CATCHES**: Would catch blank cells costing a service call, or an empty
/// answer overwriting the neighbour cell.
#[tokio::test]
async fn given_blank_selection_when_answered_then_error_status_and_nothing_sent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let host = FakeHost::with_selection("   ");
    let statuses = RefCell::new(Vec::new());
    let sink = |status: PanelStatus| statuses.borrow_mut().push(status);

    let result = panel_for(&server, NormalizeStrategy::Pattern)
        .answer_selection(&host, &sink, None)
        .await;

    assert!(matches!(
        result,
        Err(PanelError::Service(ServiceError::EmptyInput { .. }))
    ));
    assert!(host.writes().is_empty());

    let statuses = statuses.into_inner();
    assert_eq!(statuses.len(), 2);
    match &statuses[1] {
        PanelStatus::Error(message) => assert!(message.contains("select a cell")),
        other => panic!("expected Error status, got {other:?}"),
    }
}

#[tokio::test]
async fn given_rejected_token_when_answered_then_error_status_mentions_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let host = FakeHost::with_selection("Q");
    let statuses = RefCell::new(Vec::new());
    let sink = |status: PanelStatus| statuses.borrow_mut().push(status);

    let result = panel_for(&server, NormalizeStrategy::Pattern)
        .answer_selection(&host, &sink, None)
        .await;

    assert!(matches!(
        result,
        Err(PanelError::Service(ServiceError::Unauthorized { .. }))
    ));
    assert!(host.writes().is_empty());
    assert!(statuses.into_inner()[1].message().contains("token"));
}

#[tokio::test]
async fn given_host_read_failure_when_answered_then_host_error() {
    let server = MockServer::start().await;
    let host = FakeHost::failing_read("no workbook open");
    let statuses = RefCell::new(Vec::new());
    let sink = |status: PanelStatus| statuses.borrow_mut().push(status);

    let result = panel_for(&server, NormalizeStrategy::Pattern)
        .answer_selection(&host, &sink, None)
        .await;

    let err = result.unwrap_err();
    assert!(matches!(err, PanelError::Host(HostError::Read { .. })));
    assert!(err.user_message().contains("no workbook open"));
    assert!(server.received_requests().await.unwrap().is_empty());
}

/// **VALUE**: Verifies a panel built from config uses the override endpoint and strategy.
#[tokio::test]
async fn given_config_with_override_when_panel_built_then_uses_endpoint_and_strategy() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "formatted_answer": "<p>One</p><p><b>Disclaimer:</b> check</p>"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut config = AppConfig::default();
    config.service.endpoint_override = Some(format!("{}/api/ask", server.uri()));
    config.normalizer.strategy = NormalizeStrategy::Tree;

    let panel = AnswerPanel::from_config(&config).unwrap();
    let host = FakeHost::with_selection("Q");

    let written = panel
        .answer_selection(&host, &|_: PanelStatus| {}, None)
        .await
        .unwrap();

    assert_eq!(
        panel.client().endpoint().as_str(),
        format!("{}/api/ask", server.uri())
    );
    assert_eq!(written, "One\n\n**Disclaimer:** check");
}
