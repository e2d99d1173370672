//! Shared building blocks for ask-cell.
//!
//! Everything here is plain data with no I/O: source-location tracking for
//! errors, HTTP status categorisation, and the redacted bearer credential.
//!
//! ## Architecture
//!
//! - **common** (this crate): value types shared by every crate
//! - **answer-core**: service client, normalizer and panel workflow
//! - **ask-cell**: command-line front end wiring everything together

pub mod bearer_token;
pub mod error;
pub mod http_status;

pub use bearer_token::BearerToken;
pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use http_status::HttpStatusCode;

#[cfg(test)]
mod tests;
