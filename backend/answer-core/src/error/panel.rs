use super::ServiceError;

use common::ErrorLocation;

use thiserror::Error as ThisError;

/// Failure reported by the host spreadsheet environment.
#[derive(Debug, ThisError)]
pub enum HostError {
    #[error("Host Read Error: {message} {location}")]
    Read {
        message: String,
        location: ErrorLocation,
    },

    #[error("Host Write Error: {message} {location}")]
    Write {
        message: String,
        location: ErrorLocation,
    },
}

impl HostError {
    #[track_caller]
    pub fn read(message: impl Into<String>) -> Self {
        HostError::Read {
            message: message.into(),
            location: ErrorLocation::caller(),
        }
    }

    #[track_caller]
    pub fn write(message: impl Into<String>) -> Self {
        HostError::Write {
            message: message.into(),
            location: ErrorLocation::caller(),
        }
    }
}

/// Why one run of the panel workflow failed.
#[derive(Debug, ThisError)]
pub enum PanelError {
    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error(transparent)]
    Host(#[from] HostError),
}

impl PanelError {
    /// Message for the status surface.
    pub fn user_message(&self) -> String {
        match self {
            PanelError::Service(error) => error.user_message(),
            PanelError::Host(HostError::Read { message, .. }) => {
                format!("Could not read the selected cell: {message}")
            }
            PanelError::Host(HostError::Write { message, .. }) => {
                format!("Could not write the answer: {message}")
            }
        }
    }
}
