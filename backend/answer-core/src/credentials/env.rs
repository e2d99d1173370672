//! Credential lookup from the process environment and `.env` files.

use crate::error::CredentialError;

use common::BearerToken;

use std::env;
use std::path::PathBuf;

use log::{debug, info, warn};

/// Environment variable consulted for the service token.
pub const TOKEN_ENV_VAR: &str = "ASK_CELL_API_TOKEN";

/// Result of attempting to load a .env file.
#[derive(Debug)]
pub struct EnvLoadResult {
    /// Path to loaded .env file, if found.
    pub path: Option<PathBuf>,
}

impl EnvLoadResult {
    /// Whether any .env file was loaded.
    pub fn loaded(&self) -> bool {
        self.path.is_some()
    }
}

/// Read a token from `var`, loading `.env` first.
///
/// Absent or blank values give `Ok(None)`. Variables already present in the
/// environment win over `.env` entries.
///
/// # Errors
///
/// Returns [`CredentialError::Env`] if the variable is not valid unicode.
pub fn load_env_token(var: &str) -> Result<Option<BearerToken>, CredentialError> {
    match try_load_dotenv().path {
        Some(path) => debug!("Looking up {} after loading {}", var, path.display()),
        None => debug!("No .env file found - checking existing environment variables"),
    }

    match env::var(var) {
        Ok(value) => {
            let token = BearerToken::new(value);
            if let Some(token) = &token {
                info!("Using API token from {} ({} chars)", var, token.len());
            }
            Ok(token)
        }
        Err(env::VarError::NotPresent) => {
            debug!("No {} env var found", var);
            Ok(None)
        }
        Err(env::VarError::NotUnicode(_)) => {
            warn!("Env var {} contains invalid unicode", var);
            Err(CredentialError::env(format!("{var} contains invalid unicode")))
        }
    }
}

/// Attempts to load .env from known locations.
pub fn try_load_dotenv() -> EnvLoadResult {
    if let Ok(path) = dotenvy::dotenv() {
        info!("Loaded .env from: {:?}", path);
        return EnvLoadResult {
            path: Some(path),
        };
    }

    if let Ok(exe_path) = env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let env_path = exe_dir.join(".env");
            if env_path.exists() {
                match dotenvy::from_path(&env_path) {
                    Ok(_) => {
                        info!("Loaded .env from: {:?}", env_path);
                        return EnvLoadResult {
                            path: Some(env_path),
                        };
                    }
                    Err(e) => {
                        warn!("Failed to parse .env at {:?}: {}", env_path, e);
                    }
                }
            }
        }
    }

    EnvLoadResult { path: None }
}
