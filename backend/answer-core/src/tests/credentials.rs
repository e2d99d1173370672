// Unit tests for token validation and the in-memory store

use crate::credentials::env::EnvLoadResult;
use crate::credentials::{
    CredentialStore, MemoryCredentialStore, TOKEN_ENV_VAR, parse_token, resolve_credential,
    validate_token,
};
use crate::error::{CredentialError, TokenValidationFailure};

use std::path::PathBuf;

/// **VALUE**: Verifies realistic tokens pass validation.
///
/// **BUG THIS CATCHES**: Would catch over-eager placeholder detection refusing real tokens.
#[test]
fn given_realistic_tokens_when_validated_then_ok() {
    assert!(validate_token("sk-live-9f8e7d6c5b4a").is_ok());
    assert!(validate_token("eyJhbGciOiJIUzI1NiJ9.eyJzdWIiOiIxIn0.abc").is_ok());
    assert!(validate_token("  padded-token-123  ").is_ok());
}

#[test]
fn given_invalid_tokens_when_validated_then_specific_failure() {
    assert_eq!(validate_token("   "), Err(TokenValidationFailure::Empty));
    assert_eq!(
        validate_token("two words"),
        Err(TokenValidationFailure::InvalidCharacters)
    );
    assert_eq!(
        validate_token("your-api-key"),
        Err(TokenValidationFailure::PlaceholderDetected {
            pattern: "your-api-key"
        })
    );
    assert_eq!(
        validate_token("aaaaaaaaaaaa"),
        Err(TokenValidationFailure::PlaceholderDetected {
            pattern: "repeated_char"
        })
    );
    assert!(matches!(
        validate_token(&"k".repeat(5000)),
        Err(TokenValidationFailure::TooLong { .. })
    ));
}

#[test]
fn given_valid_token_when_parsed_then_trimmed_bearer_token() {
    let token = parse_token(" abc-123 ").unwrap();

    assert_eq!(token.expose(), "abc-123");
}

#[test]
fn given_placeholder_when_parsed_then_validation_error() {
    assert!(matches!(
        parse_token("<your token>"),
        Err(CredentialError::Validation { .. })
    ));
}

/// **VALUE**: Verifies save/load/clear on the in-memory store.
///
/// **BUG THIS CATCHES**: Would catch clear() leaving the old token loadable.
#[test]
fn given_memory_store_when_saved_and_cleared_then_load_reflects_state() {
    let store = MemoryCredentialStore::new();
    assert!(store.load().unwrap().is_none());

    store.save("abc-123").unwrap();
    assert_eq!(store.load().unwrap().unwrap().expose(), "abc-123");

    store.clear().unwrap();
    assert!(store.load().unwrap().is_none());
}

#[test]
fn given_invalid_token_when_saved_then_previous_token_kept() {
    let store = MemoryCredentialStore::new();
    store.save("abc-123").unwrap();

    assert!(store.save("xxx-placeholder").is_err());
    assert_eq!(store.load().unwrap().unwrap().expose(), "abc-123");
}

/// **VALUE**: Verifies an explicit token takes precedence over stored ones.
///
/// **BUG THIS CATCHES**: Would catch `--token` being silently ignored.
#[test]
fn given_explicit_token_when_resolving_then_explicit_wins() {
    let store = MemoryCredentialStore::new();
    store.save("stored-token").unwrap();

    let token = resolve_credential(Some("explicit-token"), TOKEN_ENV_VAR, &store)
        .unwrap()
        .unwrap();

    assert_eq!(token.expose(), "explicit-token");
}

/// **VALUE**: Verifies the .env load result is driven by the path it carries.
///
/// **BUG THIS CATCHES**: Would catch a separate "loaded" flag drifting from the path it
/// is meant to describe.
#[test]
fn given_env_load_result_when_path_present_then_loaded() {
    let found = EnvLoadResult {
        path: Some(PathBuf::from("/work/.env")),
    };
    let missing = EnvLoadResult { path: None };

    assert!(found.loaded());
    assert!(!missing.loaded());
}
