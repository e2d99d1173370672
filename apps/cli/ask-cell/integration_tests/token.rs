use crate::run_cli;

use answer_core::credentials::{CredentialStore, FileCredentialStore};

/// **VALUE**: set / status / clear work against the config directory.
///
/// **WHY THIS MATTERS**: Status output is the only way to check setup without
/// revealing the token.
///
/// **BUG THIS CATCHES**: Would catch the token being echoed in status output.
#[tokio::test]
async fn given_token_set_when_status_then_reports_length_not_value() {
    let dir = tempfile::tempdir().unwrap();

    let (set, _) = run_cli(dir.path(), &["token", "set", "secret-t0k3n-abc"], "").await;
    assert!(set.is_ok(), "{set:?}");

    let stored = FileCredentialStore::new(dir.path()).load().unwrap().unwrap();
    assert_eq!(stored.expose(), "secret-t0k3n-abc");

    let (status, stdout) = run_cli(dir.path(), &["token", "status"], "").await;
    assert!(status.is_ok());
    assert!(!stdout.contains("secret-t0k3n-abc"));
    assert!(stdout.contains("16 chars"), "got: {stdout}");

    let (clear, _) = run_cli(dir.path(), &["token", "clear"], "").await;
    assert!(clear.is_ok());
    assert!(FileCredentialStore::new(dir.path()).load().unwrap().is_none());
}

/// **VALUE**: Placeholder tokens are refused before they are stored.
///
/// **BUG THIS CATCHES**: Would catch `token set` bypassing validation.
#[tokio::test]
async fn given_placeholder_token_when_set_then_rejected_and_nothing_stored() {
    let dir = tempfile::tempdir().unwrap();

    let (result, _) = run_cli(dir.path(), &["token", "set", "your-api-key"], "").await;

    assert!(result.is_err());
    assert!(FileCredentialStore::new(dir.path()).load().unwrap().is_none());
}
