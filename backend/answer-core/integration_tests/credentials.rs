use answer_core::credentials::{
    CREDENTIAL_KEY, CredentialStore, FileCredentialStore, MemoryCredentialStore,
    load_env_token, resolve_credential,
};
use answer_core::error::CredentialError;

use std::collections::BTreeMap;

use serial_test::serial;
use tempfile::TempDir;

const TEST_ENV_VAR: &str = "ASK_CELL_INTEGRATION_TEST_TOKEN";

/// **VALUE**: Verifies the file store persists, reloads and clears the token.
///
/// **WHY THIS MATTERS**: Users save the token once and expect it on every later run.
///
/// **BUG THIS CATCHES**: Would catch the key name drifting or clear() being a no-op.
#[test]
fn given_file_store_when_saved_loaded_cleared_then_state_persists_on_disk() {
    let dir = TempDir::new().unwrap();
    let store = FileCredentialStore::new(dir.path());

    assert!(store.load().unwrap().is_none());

    store.save("tok-abc-123").unwrap();
    let reopened = FileCredentialStore::new(dir.path());
    assert_eq!(reopened.load().unwrap().unwrap().expose(), "tok-abc-123");

    let raw: BTreeMap<String, String> =
        serde_json::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap();
    assert_eq!(raw.get(CREDENTIAL_KEY).map(String::as_str), Some("tok-abc-123"));

    reopened.clear().unwrap();
    assert!(store.load().unwrap().is_none());
}

#[test]
fn given_other_keys_in_file_when_token_saved_then_other_keys_preserved() {
    let dir = TempDir::new().unwrap();
    let store = FileCredentialStore::new(dir.path());
    std::fs::write(store.path(), r#"{"theme": "dark"}"#).unwrap();

    store.save("tok-abc-123").unwrap();
    store.clear().unwrap();

    let raw: BTreeMap<String, String> =
        serde_json::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap();
    assert_eq!(raw.get("theme").map(String::as_str), Some("dark"));
    assert!(!raw.contains_key(CREDENTIAL_KEY));
}

#[test]
fn given_corrupt_file_when_loaded_then_parse_error() {
    let dir = TempDir::new().unwrap();
    let store = FileCredentialStore::new(dir.path());
    std::fs::write(store.path(), "not json").unwrap();

    assert!(matches!(store.load(), Err(CredentialError::Parse { .. })));
}

#[test]
fn given_blank_stored_value_when_loaded_then_none() {
    let dir = TempDir::new().unwrap();
    let store = FileCredentialStore::new(dir.path());
    std::fs::write(store.path(), format!(r#"{{"{CREDENTIAL_KEY}": "   "}}"#)).unwrap();

    assert!(store.load().unwrap().is_none());
}

/// **VALUE**: Verifies the environment variable source and its precedence over the store.
///
/// **BUG THIS CATCHES**: Would catch the env var being ignored, or blank values being
/// treated as a credential.
#[test]
#[serial]
fn given_env_var_when_resolving_then_env_beats_store() {
    let store = MemoryCredentialStore::new();
    store.save("stored-token").unwrap();

    // SAFETY: serialised with other env-mutating tests.
    unsafe { std::env::set_var(TEST_ENV_VAR, "env-token") };
    let from_env = resolve_credential(None, TEST_ENV_VAR, &store).unwrap();
    let direct = load_env_token(TEST_ENV_VAR).unwrap();
    unsafe { std::env::remove_var(TEST_ENV_VAR) };

    assert_eq!(from_env.unwrap().expose(), "env-token");
    assert_eq!(direct.unwrap().expose(), "env-token");
}

#[test]
#[serial]
fn given_blank_or_missing_env_var_when_resolving_then_falls_back_to_store() {
    let store = MemoryCredentialStore::new();
    store.save("stored-token").unwrap();

    unsafe { std::env::set_var(TEST_ENV_VAR, "   ") };
    let blank = resolve_credential(None, TEST_ENV_VAR, &store).unwrap();
    unsafe { std::env::remove_var(TEST_ENV_VAR) };
    let missing = resolve_credential(None, TEST_ENV_VAR, &store).unwrap();

    assert_eq!(blank.unwrap().expose(), "stored-token");
    assert_eq!(missing.unwrap().expose(), "stored-token");
}
