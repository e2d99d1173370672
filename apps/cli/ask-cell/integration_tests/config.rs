use crate::run_cli;

use answer_core::AppConfig;
use answer_core::config::Environment;

/// **VALUE**: `config init` persists the effective config, overrides included.
///
/// **BUG THIS CATCHES**: Would catch `--env` not being applied before saving,
/// or init silently clobbering an existing file.
#[tokio::test]
async fn given_env_override_when_config_init_then_written_once_unless_forced() {
    let dir = tempfile::tempdir().unwrap();

    let (first, stdout) = run_cli(dir.path(), &["--env", "local", "config", "init"], "").await;
    assert!(first.is_ok(), "{first:?}");
    assert!(stdout.contains("config.json"));

    let saved = AppConfig::load(dir.path()).unwrap();
    assert_eq!(saved.service.environment, Environment::Local);

    let (second, _) = run_cli(dir.path(), &["config", "init"], "").await;
    assert!(second.unwrap_err().user_message().contains("--force"));

    let (forced, _) = run_cli(dir.path(), &["config", "init", "--force"], "").await;
    assert!(forced.is_ok());
}

#[tokio::test]
async fn given_endpoint_override_when_config_show_then_json_includes_it() {
    let dir = tempfile::tempdir().unwrap();

    let (result, stdout) = run_cli(
        dir.path(),
        &["--endpoint", "http://127.0.0.1:8080/api/ask", "config", "show"],
        "",
    )
    .await;

    assert!(result.is_ok());
    let shown: AppConfig = serde_json::from_str(&stdout).unwrap();
    assert_eq!(
        shown.service.endpoint_override.as_deref(),
        Some("http://127.0.0.1:8080/api/ask")
    );
}

/// **VALUE**: A bad `--endpoint` fails before any command runs.
///
/// **BUG THIS CATCHES**: Would catch overrides skipping validation.
#[tokio::test]
async fn given_non_http_endpoint_when_any_command_then_validation_error() {
    let dir = tempfile::tempdir().unwrap();

    let (result, stdout) = run_cli(
        dir.path(),
        &["--endpoint", "ftp://example.com", "config", "show"],
        "",
    )
    .await;

    assert!(result.unwrap_err().to_string().contains("endpoint_override"));
    assert!(stdout.is_empty());
}
