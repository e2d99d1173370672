use crate::error::config::ConfigError;
use crate::normalizer::NormalizeStrategy;

use common::ErrorLocation;

use std::panic::Location;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::{info, warn};
use serde::{Deserialize, Serialize};
use url::Url;

const CONFIG_FILE_NAME: &str = "config.json";
const CONFIG_VERSION: u32 = 1;
const CONFIG_DIR_NAME: &str = "ask-cell";

pub const LOCAL_HOSTNAME: &str = "localhost:5000";
pub const LOCAL_ANSWER_URL: &str =
    const_format::concatcp!("http://", LOCAL_HOSTNAME, "/api/ask");
pub const PRODUCTION_HOSTNAME: &str = "answers.example.com";
pub const PRODUCTION_ANSWER_URL: &str =
    const_format::concatcp!("https://", PRODUCTION_HOSTNAME, "/api/ask");

// ============================================
// ENUMS WITH DEFAULTS
// ============================================

/// Deployment environment selecting which endpoint the panel talks to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Local,
    Production,
}

impl Default for Environment {
    fn default() -> Self {
        Environment::Production
    }
}

// ============================================
// CONFIG STRUCTS
// ============================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceConfig {
    #[serde(default)]
    pub environment: Environment,
    #[serde(default = "default_local_url")]
    pub local_url: String,
    #[serde(default = "default_production_url")]
    pub production_url: String,
    /// Takes precedence over the environment URLs when set.
    #[serde(default)]
    pub endpoint_override: Option<String>,
    /// Transport timeout. Unset means the request runs until the network gives up.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            local_url: default_local_url(),
            production_url: default_production_url(),
            endpoint_override: None,
            timeout_secs: None,
        }
    }
}

impl ServiceConfig {
    /// Endpoint URL the client should post to.
    pub fn endpoint(&self) -> &str {
        if let Some(url) = &self.endpoint_override {
            return url;
        }

        match self.environment {
            Environment::Local => &self.local_url,
            Environment::Production => &self.production_url,
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NormalizerConfig {
    #[serde(default)]
    pub strategy: NormalizeStrategy,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub service: ServiceConfig,

    #[serde(default)]
    pub normalizer: NormalizerConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            service: ServiceConfig::default(),
            normalizer: NormalizerConfig::default(),
        }
    }
}

// ============================================
// DEFAULT FUNCTIONS
// ============================================

fn default_version() -> u32 {
    CONFIG_VERSION
}
fn default_local_url() -> String {
    LOCAL_ANSWER_URL.to_string()
}
fn default_production_url() -> String {
    PRODUCTION_ANSWER_URL.to_string()
}

/// Platform config directory for ask-cell (e.g. `~/.config/ask-cell`).
///
/// # Errors
///
/// Returns [`ConfigError::DirectoryNotFound`] if the platform has no config directory.
pub fn default_config_dir() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME))
        .ok_or_else(|| ConfigError::DirectoryNotFound {
            location: ErrorLocation::from(Location::caller()),
        })
}

// ============================================
// IMPLEMENTATION
// ============================================

impl AppConfig {
    /// Load config from {config_dir}/config.json.
    ///
    /// # Returns
    ///
    /// Returns `Ok(AppConfig)` if loaded successfully or defaults if file missing.
    /// Returns `Err(ConfigError)` if file exists but is corrupted/invalid.
    pub fn load(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            info!(
                "Config file not found at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path).map_err(|e| {
            warn!("Failed to read config file: {}", e);
            ConfigError::ReadError {
                location: ErrorLocation::from(Location::caller()),
                path: config_path.clone(),
                source: e,
            }
        })?;

        let config: AppConfig = serde_json::from_str(&contents).map_err(|e| {
            warn!("Failed to parse config JSON: {}", e);
            ConfigError::ParseError {
                location: ErrorLocation::from(Location::caller()),
                path: config_path.clone(),
                reason: e.to_string(),
            }
        })?;

        config.validate()?;

        info!("Config loaded from {}", config_path.display());
        Ok(config)
    }

    /// Save config to {config_dir}/config.json using atomic write.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if:
    /// - Validation fails
    /// - Directory creation fails
    /// - Serialization fails
    /// - Write or rename fails
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        self.validate()?;

        std::fs::create_dir_all(config_dir).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: config_dir.to_path_buf(),
            source: e,
        })?;

        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let temp_path = config_dir.join(format!("{}.tmp", CONFIG_FILE_NAME));

        let json = serde_json::to_string_pretty(self).map_err(|e| ConfigError::SerializeError {
            location: ErrorLocation::from(Location::caller()),
            reason: e.to_string(),
        })?;

        std::fs::write(&temp_path, json).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: temp_path.clone(),
            source: e,
        })?;

        std::fs::rename(&temp_path, &config_path).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: config_path.clone(),
            source: e,
        })?;

        info!("Config saved to {}", config_path.display());
        Ok(())
    }

    /// Validate config values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version == 0 || self.version > CONFIG_VERSION {
            return Err(ConfigError::validation(format!(
                "Invalid version: {} (expected 1-{})",
                self.version, CONFIG_VERSION
            )));
        }

        validate_url("local_url", &self.service.local_url)?;
        validate_url("production_url", &self.service.production_url)?;
        if let Some(url) = &self.service.endpoint_override {
            validate_url("endpoint_override", url)?;
        }

        if self.service.timeout_secs == Some(0) {
            return Err(ConfigError::validation(
                "timeout_secs must be greater than zero when set",
            ));
        }

        Ok(())
    }
}

#[track_caller]
fn validate_url(field: &str, url: &str) -> Result<(), ConfigError> {
    if url.is_empty() {
        return Err(ConfigError::validation(format!(
            "{field} cannot be empty string"
        )));
    }

    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::validation(format!(
            "Invalid URL format for {field}: {url}"
        )));
    }

    Url::parse(url)
        .map_err(|e| ConfigError::validation(format!("Invalid URL for {field}: {url} ({e})")))?;

    Ok(())
}
