use answer_core::config::{AppConfig, Environment};
use answer_core::error::ConfigError;
use answer_core::normalizer::NormalizeStrategy;

use tempfile::TempDir;

/// **VALUE**: Verifies a saved config loads back identically.
///
/// **BUG THIS CATCHES**: Would catch serde renames breaking persistence between runs.
#[test]
fn given_saved_config_when_loaded_then_round_trips() {
    // GIVEN: A non-default config saved into a fresh directory
    let dir = TempDir::new().unwrap();
    let config_dir = dir.path().join("nested").join("ask-cell");

    let mut config = AppConfig::default();
    config.service.environment = Environment::Local;
    config.service.timeout_secs = Some(20);
    config.normalizer.strategy = NormalizeStrategy::Tree;

    // WHEN: Saving and loading
    config.save(&config_dir).unwrap();
    let loaded = AppConfig::load(&config_dir).unwrap();

    // THEN: Identical, and no temp file left behind
    assert_eq!(loaded, config);
    assert!(config_dir.join("config.json").exists());
    assert!(!config_dir.join("config.json.tmp").exists());
}

#[test]
fn given_missing_file_when_loaded_then_defaults() {
    let dir = TempDir::new().unwrap();

    let loaded = AppConfig::load(dir.path()).unwrap();

    assert_eq!(loaded, AppConfig::default());
}

#[test]
fn given_corrupt_file_when_loaded_then_parse_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), "{ not json").unwrap();

    let result = AppConfig::load(dir.path());

    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn given_invalid_values_on_disk_when_loaded_then_validation_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{"service": {"endpoint_override": "ftp://nope"}}"#,
    )
    .unwrap();

    let result = AppConfig::load(dir.path());

    assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
}

#[test]
fn given_invalid_config_when_saved_then_nothing_written() {
    let dir = TempDir::new().unwrap();
    let mut config = AppConfig::default();
    config.service.timeout_secs = Some(0);

    assert!(config.save(dir.path()).is_err());
    assert!(!dir.path().join("config.json").exists());
}
