//! Persistent storage for the answer-service bearer token.
//!
//! # Features
//! - Key-value JSON file with the token under a fixed key
//! - Atomic writes (temp file + rename)
//! - Environment / `.env` lookup as an alternative source
//! - Format checks before saving
//!
//! # Security
//! - Tokens wrapped in BearerToken (redacted Debug, zeroized on drop)
//! - Never logged; only lengths are

pub mod env;
pub mod validation;

pub use env::{TOKEN_ENV_VAR, load_env_token};
pub use validation::{parse_token, validate_token};

use crate::error::CredentialError;

use common::{BearerToken, ErrorLocation};

use std::collections::BTreeMap;
use std::panic::Location;
use std::path::PathBuf;
use std::sync::Mutex;

use log::{debug, info};

/// Key the token is stored under.
pub const CREDENTIAL_KEY: &str = "answer_api_token";

const CREDENTIAL_FILE_NAME: &str = "credentials.json";

/// Get/set access to the stored token.
pub trait CredentialStore {
    /// The stored token, or `None` when nothing (or only blanks) is stored.
    fn load(&self) -> Result<Option<BearerToken>, CredentialError>;

    /// Validate and persist `token`, replacing any previous value.
    fn save(&self, token: &str) -> Result<(), CredentialError>;

    /// Forget the stored token. Clearing an empty store is not an error.
    fn clear(&self) -> Result<(), CredentialError>;
}

/// Token kept in `{dir}/credentials.json`.
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    dir: PathBuf,
}

impl FileCredentialStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(CREDENTIAL_FILE_NAME)
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>, CredentialError> {
        let path = self.path();

        if !path.exists() {
            debug!("No credential file at {}", path.display());
            return Ok(BTreeMap::new());
        }

        let contents = std::fs::read_to_string(&path).map_err(|e| CredentialError::Read {
            path: path.clone(),
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })?;

        serde_json::from_str(&contents).map_err(|e| CredentialError::Parse {
            path: path.clone(),
            reason: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<(), CredentialError> {
        std::fs::create_dir_all(&self.dir).map_err(|e| CredentialError::Write {
            path: self.dir.clone(),
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })?;

        let path = self.path();
        let temp_path = self.dir.join(format!("{}.tmp", CREDENTIAL_FILE_NAME));

        let json = serde_json::to_string_pretty(entries).map_err(|e| CredentialError::Parse {
            path: path.clone(),
            reason: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        std::fs::write(&temp_path, json).map_err(|e| CredentialError::Write {
            path: temp_path.clone(),
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })?;

        std::fs::rename(&temp_path, &path).map_err(|e| CredentialError::Write {
            path: path.clone(),
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

impl CredentialStore for FileCredentialStore {
    fn load(&self) -> Result<Option<BearerToken>, CredentialError> {
        let mut entries = self.read_entries()?;
        Ok(entries.remove(CREDENTIAL_KEY).and_then(BearerToken::new))
    }

    fn save(&self, token: &str) -> Result<(), CredentialError> {
        let token = parse_token(token)?;

        let mut entries = self.read_entries()?;
        entries.insert(CREDENTIAL_KEY.to_string(), token.expose().to_string());
        self.write_entries(&entries)?;

        info!("API token saved to {} ({} chars)", self.path().display(), token.len());
        Ok(())
    }

    fn clear(&self) -> Result<(), CredentialError> {
        let mut entries = self.read_entries()?;
        if entries.remove(CREDENTIAL_KEY).is_none() {
            debug!("No stored API token to clear");
            return Ok(());
        }

        self.write_entries(&entries)?;
        info!("API token cleared from {}", self.path().display());
        Ok(())
    }
}

/// In-process store, for embedding and tests.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    token: Mutex<Option<BearerToken>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn load(&self) -> Result<Option<BearerToken>, CredentialError> {
        Ok(lock(&self.token).clone())
    }

    fn save(&self, token: &str) -> Result<(), CredentialError> {
        let token = parse_token(token)?;
        *lock(&self.token) = Some(token);
        Ok(())
    }

    fn clear(&self) -> Result<(), CredentialError> {
        *lock(&self.token) = None;
        Ok(())
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Resolve the credential to use: explicit value, then environment, then store.
pub fn resolve_credential(
    explicit: Option<&str>,
    env_var: &str,
    store: &dyn CredentialStore,
) -> Result<Option<BearerToken>, CredentialError> {
    if let Some(token) = explicit.and_then(BearerToken::new) {
        debug!("Using API token passed explicitly");
        return Ok(Some(token));
    }

    if let Some(token) = load_env_token(env_var)? {
        return Ok(Some(token));
    }

    store.load()
}
