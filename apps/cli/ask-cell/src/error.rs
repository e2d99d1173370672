use answer_core::error::{
    AnswerClientError, ConfigError, CoreError, CredentialError, PanelError, ServiceError,
};

use common::ErrorLocation;

use thiserror::Error;

/// Errors surfaced by the command-line front end.
///
/// Library failures are wrapped unchanged; `user_message()` strips source
/// locations for the terminal while the log keeps the full text.
#[derive(Debug, Error)]
pub enum AskCellError {
    /// Error from this app
    #[error("Ask Cell Error: {message} {location}")]
    AskCell {
        message: String,
        location: ErrorLocation,
    },

    /// Reading the question or writing output failed
    #[error("IO Error: {message} {location}")]
    Io {
        message: String,
        location: ErrorLocation,
    },

    /// Error from answer-core (service call, config, credentials)
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl AskCellError {
    #[track_caller]
    pub fn ask_cell(message: impl Into<String>) -> Self {
        AskCellError::AskCell {
            message: message.into(),
            location: ErrorLocation::caller(),
        }
    }

    #[track_caller]
    pub fn io(message: impl Into<String>) -> Self {
        AskCellError::Io {
            message: message.into(),
            location: ErrorLocation::caller(),
        }
    }

    /// One-line message for stderr.
    pub fn user_message(&self) -> String {
        match self {
            AskCellError::AskCell { message, .. } | AskCellError::Io { message, .. } => {
                message.clone()
            }
            AskCellError::Core(CoreError::Service(e)) => e.user_message(),
            AskCellError::Core(CoreError::Panel(e)) => e.user_message(),
            AskCellError::Core(other) => other.to_string(),
        }
    }
}

impl From<ServiceError> for AskCellError {
    fn from(error: ServiceError) -> Self {
        AskCellError::Core(CoreError::Service(error))
    }
}

impl From<PanelError> for AskCellError {
    fn from(error: PanelError) -> Self {
        AskCellError::Core(CoreError::Panel(error))
    }
}

impl From<ConfigError> for AskCellError {
    fn from(error: ConfigError) -> Self {
        AskCellError::Core(CoreError::Config(error))
    }
}

impl From<CredentialError> for AskCellError {
    fn from(error: CredentialError) -> Self {
        AskCellError::Core(CoreError::Credential(error))
    }
}

impl From<AnswerClientError> for AskCellError {
    fn from(error: AnswerClientError) -> Self {
        AskCellError::Core(CoreError::Client(error))
    }
}
