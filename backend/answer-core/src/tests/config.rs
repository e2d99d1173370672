// Unit tests for endpoint selection and config validation
// File round-trips are in integration_tests/config.rs

use crate::config::{
    AppConfig, Environment, LOCAL_ANSWER_URL, PRODUCTION_ANSWER_URL, ServiceConfig,
};
use crate::error::ConfigError;
use crate::normalizer::NormalizeStrategy;

/// **VALUE**: Verifies the default config posts to the production endpoint.
///
/// **BUG THIS CATCHES**: Would catch a fresh install talking to a developer's localhost.
#[test]
fn given_default_config_when_resolving_endpoint_then_production() {
    let config = AppConfig::default();

    assert_eq!(config.service.environment, Environment::Production);
    assert_eq!(config.service.endpoint(), PRODUCTION_ANSWER_URL);
    assert!(config.service.timeout().is_none());
    assert!(config.validate().is_ok());
}

#[test]
fn given_local_environment_when_resolving_endpoint_then_local_url() {
    let service = ServiceConfig {
        environment: Environment::Local,
        ..ServiceConfig::default()
    };

    assert_eq!(service.endpoint(), LOCAL_ANSWER_URL);
}

/// **VALUE**: Verifies an explicit override beats the environment switch.
///
/// **WHY THIS MATTERS**: The endpoint is injected configuration; the override is how
/// staging or test servers are reached.
#[test]
fn given_endpoint_override_when_resolving_endpoint_then_override_wins() {
    let service = ServiceConfig {
        environment: Environment::Local,
        endpoint_override: Some("https://staging.internal/api/ask".to_string()),
        ..ServiceConfig::default()
    };

    assert_eq!(service.endpoint(), "https://staging.internal/api/ask");
}

#[test]
fn given_partial_json_when_deserialized_then_missing_fields_default() {
    let config: AppConfig =
        serde_json::from_str(r#"{"service": {"environment": "local"}, "normalizer": {"strategy": "tree"}}"#)
            .unwrap();

    assert_eq!(config.version, 1);
    assert_eq!(config.service.environment, Environment::Local);
    assert_eq!(config.service.local_url, LOCAL_ANSWER_URL);
    assert_eq!(config.normalizer.strategy, NormalizeStrategy::Tree);
}

/// **VALUE**: Verifies invalid endpoints and values are rejected.
///
/// **BUG THIS CATCHES**: Would catch a typo'd URL surviving until the first request.
#[test]
fn given_invalid_values_when_validated_then_validation_error() {
    let mut bad_scheme = AppConfig::default();
    bad_scheme.service.production_url = "ftp://answers.example.com".to_string();

    let mut empty_override = AppConfig::default();
    empty_override.service.endpoint_override = Some(String::new());

    let mut unparseable = AppConfig::default();
    unparseable.service.local_url = "http://".to_string();

    let mut zero_timeout = AppConfig::default();
    zero_timeout.service.timeout_secs = Some(0);

    let mut future_version = AppConfig::default();
    future_version.version = 99;

    for config in [
        bad_scheme,
        empty_override,
        unparseable,
        zero_timeout,
        future_version,
    ] {
        assert!(
            matches!(config.validate(), Err(ConfigError::ValidationError { .. })),
            "expected validation error for {config:?}"
        );
    }
}

#[test]
fn given_timeout_when_set_then_exposed_as_duration() {
    let service = ServiceConfig {
        timeout_secs: Some(15),
        ..ServiceConfig::default()
    };

    assert_eq!(service.timeout(), Some(std::time::Duration::from_secs(15)));
}
