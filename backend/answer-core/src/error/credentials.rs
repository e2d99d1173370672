//! Error types for credential storage.

use common::ErrorLocation;

use std::path::PathBuf;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum CredentialError {
    #[error("Credential Read Error: {path}: {source} {location}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Credential Write Error: {path}: {source} {location}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Credential Parse Error: {path}: {reason} {location}")]
    Parse {
        path: PathBuf,
        reason: String,
        location: ErrorLocation,
    },

    #[error("Credential Environment Error: {message} {location}")]
    Env {
        message: String,
        location: ErrorLocation,
    },

    #[error("Token validation failed: {reason} {location}")]
    Validation {
        reason: TokenValidationFailure,
        location: ErrorLocation,
    },
}

/// Specific reasons a token was refused before being stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenValidationFailure {
    Empty,
    TooLong { max: usize, actual: usize },
    PlaceholderDetected { pattern: &'static str },
    InvalidCharacters,
}

impl std::fmt::Display for TokenValidationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "token is empty"),
            Self::TooLong { max, actual } => {
                write!(f, "token too long ({} chars, maximum {})", actual, max)
            }
            Self::PlaceholderDetected { pattern } => {
                write!(f, "detected placeholder pattern '{}'", pattern)
            }
            Self::InvalidCharacters => write!(f, "contains whitespace or control characters"),
        }
    }
}

impl CredentialError {
    #[track_caller]
    pub fn env(message: impl Into<String>) -> Self {
        CredentialError::Env {
            message: message.into(),
            location: ErrorLocation::caller(),
        }
    }

    #[track_caller]
    pub fn validation(reason: TokenValidationFailure) -> Self {
        CredentialError::Validation {
            reason,
            location: ErrorLocation::caller(),
        }
    }
}
