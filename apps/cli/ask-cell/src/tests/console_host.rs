// Unit tests for the terminal cell host

use crate::console_host::ConsoleHost;

use answer_core::panel::{CellFormat, CellHost};

/// **VALUE**: The "selected cell" is the question exactly as given.
///
/// **BUG THIS CATCHES**: Would catch the host trimming or rewriting the
/// question before the service sees it.
#[tokio::test]
async fn given_question_when_read_selection_then_returned_verbatim() {
    // GIVEN
    let host = ConsoleHost::new("  Why did Q3 drop?  ", Vec::new());

    // WHEN
    let selection = host.read_selection().await.unwrap();

    // THEN
    assert_eq!(selection, "  Why did Q3 drop?  ");
}

/// **VALUE**: Answers land on the output stream, one per line.
///
/// **BUG THIS CATCHES**: Would catch a missing newline or a missing flush
/// leaving the answer buffered.
#[tokio::test]
async fn given_answer_when_write_answer_then_output_gets_text_and_newline() {
    // GIVEN
    let host = ConsoleHost::new("q", Vec::new());

    // WHEN
    host.write_answer("Revenue fell.\nCosts rose.", &CellFormat::answer())
        .await
        .unwrap();

    // THEN
    let output = String::from_utf8(host.into_output()).unwrap();
    assert_eq!(output, "Revenue fell.\nCosts rose.\n");
}
