use crate::run_cli;

/// **VALUE**: `normalize` runs the same pipeline as `ask`, offline.
///
/// **BUG THIS CATCHES**: Would catch the disclaimer not being split onto its
/// own paragraph.
#[tokio::test]
async fn given_html_on_stdin_when_normalize_then_prints_plain_text() {
    let dir = tempfile::tempdir().unwrap();

    let (result, stdout) = run_cli(
        dir.path(),
        &["normalize"],
        "<p>Margins held.</p> <strong>Disclaimer:</strong> Not advice.",
    )
    .await;

    assert!(result.is_ok(), "{result:?}");
    assert_eq!(stdout, "Margins held.\n\n**Disclaimer:** Not advice.\n");
}

#[tokio::test]
async fn given_tree_flag_when_normalize_then_same_output_as_pattern() {
    let dir = tempfile::tempdir().unwrap();
    let html = "<h1>Q3</h1><div>Line one<br>Line two</div><script>x()</script>";

    let (pattern, pattern_out) = run_cli(dir.path(), &["normalize"], html).await;
    let (tree, tree_out) = run_cli(dir.path(), &["normalize", "--tree"], html).await;

    assert!(pattern.is_ok() && tree.is_ok());
    assert_eq!(pattern_out, tree_out);
    assert!(!tree_out.contains("x()"));
}
