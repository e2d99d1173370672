//! Core of ask-cell: send a spreadsheet question to the answer service and
//! turn the HTML reply into plain text for a cell.

pub mod answer_client;
pub mod config;
pub mod credentials;
pub mod error;
pub mod normalizer;
pub mod panel;

#[cfg(test)]
mod tests;

pub use answer_client::{AnswerClient, RawAnswer};
pub use config::{AppConfig, Environment, ServiceConfig};
pub use credentials::{CredentialStore, FileCredentialStore, MemoryCredentialStore};
pub use error::{CoreError, ServiceError};
pub use normalizer::{NormalizeStrategy, normalize, normalize_tree, normalize_with};
pub use panel::{AnswerPanel, CellFormat, CellHost, PanelStatus, StatusSink};
