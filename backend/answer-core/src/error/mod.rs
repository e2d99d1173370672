pub mod answer_client;
pub mod config;
pub mod credentials;
pub mod panel;
pub mod service;

pub use answer_client::AnswerClientError;
pub use config::ConfigError;
pub use credentials::{CredentialError, TokenValidationFailure};
pub use panel::{HostError, PanelError};
pub use service::ServiceError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Client(#[from] AnswerClientError),

    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Credential(#[from] CredentialError),

    #[error(transparent)]
    Panel(#[from] PanelError),
}
