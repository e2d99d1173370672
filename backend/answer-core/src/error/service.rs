//! Error kinds for a single answer-service call.
//!
//! Key design decisions:
//! - HTTP status codes stored directly (not parsed from strings)
//! - Every kind is terminal for the call; nothing here is retried
//! - All errors include ErrorLocation for debugging
//! - `#[track_caller]` for automatic location capture

use common::{ErrorLocation, HttpStatusCode};

use thiserror::Error as ThisError;

pub const BAD_REQUEST_FALLBACK_MESSAGE: &str = "Invalid request";
pub const APPLICATION_ERROR_FALLBACK_MESSAGE: &str = "Unknown error occurred";

/// Why a question did not produce an answer.
#[derive(Debug, ThisError)]
pub enum ServiceError {
    #[error("Empty Input Error: no question to submit {location}")]
    EmptyInput { location: ErrorLocation },

    #[error("Unauthorized Error: credential rejected by service {location}")]
    Unauthorized { location: ErrorLocation },

    #[error("Rate Limited Error: too many requests {location}")]
    RateLimited { location: ErrorLocation },

    #[error("Bad Request Error: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    #[error("Service Unavailable Error: {} {status_text} {location}", display_status(.status))]
    ServiceUnavailable {
        /// `None` when the request never produced an HTTP response.
        status: Option<HttpStatusCode>,
        status_text: String,
        location: ErrorLocation,
    },

    #[error("Application Error: {message} {location}")]
    ApplicationError {
        message: String,
        location: ErrorLocation,
    },
}

fn display_status(status: &Option<HttpStatusCode>) -> String {
    match status {
        Some(code) => format!("HTTP {code}"),
        None => String::from("transport failure:"),
    }
}

impl ServiceError {
    #[track_caller]
    pub fn empty_input() -> Self {
        ServiceError::EmptyInput {
            location: ErrorLocation::caller(),
        }
    }

    #[track_caller]
    pub fn unauthorized() -> Self {
        ServiceError::Unauthorized {
            location: ErrorLocation::caller(),
        }
    }

    #[track_caller]
    pub fn rate_limited() -> Self {
        ServiceError::RateLimited {
            location: ErrorLocation::caller(),
        }
    }

    #[track_caller]
    pub fn bad_request(message: impl Into<String>) -> Self {
        ServiceError::BadRequest {
            message: message.into(),
            location: ErrorLocation::caller(),
        }
    }

    #[track_caller]
    pub fn unavailable(status: Option<HttpStatusCode>, status_text: impl Into<String>) -> Self {
        ServiceError::ServiceUnavailable {
            status,
            status_text: status_text.into(),
            location: ErrorLocation::caller(),
        }
    }

    #[track_caller]
    pub fn application(message: impl Into<String>) -> Self {
        ServiceError::ApplicationError {
            message: message.into(),
            location: ErrorLocation::caller(),
        }
    }

    /// Transport-level failure: no HTTP status was received.
    #[track_caller]
    pub fn from_transport(error: &reqwest::Error) -> Self {
        Self::unavailable(None, error.to_string())
    }

    /// Message for the status surface, without source locations.
    pub fn user_message(&self) -> String {
        match self {
            ServiceError::EmptyInput { .. } => {
                String::from("Please select a cell containing a question")
            }
            ServiceError::Unauthorized { .. } => {
                String::from("Invalid API token. Please check your token and try again")
            }
            ServiceError::RateLimited { .. } => {
                String::from("Rate limit exceeded. Please wait a moment and try again")
            }
            ServiceError::BadRequest { message, .. } => format!("Invalid question: {message}"),
            ServiceError::ServiceUnavailable {
                status: Some(code),
                status_text,
                ..
            } => format!("Service unavailable ({code} {status_text})"),
            ServiceError::ServiceUnavailable {
                status: None,
                status_text,
                ..
            } => format!("Could not reach the answer service: {status_text}"),
            ServiceError::ApplicationError { message, .. } => format!("Error: {message}"),
        }
    }

    /// Stable category name for logs.
    pub fn error_category(&self) -> &'static str {
        match self {
            ServiceError::EmptyInput { .. } => "empty_input",
            ServiceError::Unauthorized { .. } => "unauthorized",
            ServiceError::RateLimited { .. } => "rate_limited",
            ServiceError::BadRequest { .. } => "bad_request",
            ServiceError::ServiceUnavailable { status: None, .. } => "transport",
            ServiceError::ServiceUnavailable {
                status: Some(code), ..
            } if code.is_server_error() => "server_error",
            ServiceError::ServiceUnavailable {
                status: Some(code), ..
            } if code.is_client_error() => "client_error",
            ServiceError::ServiceUnavailable { .. } => "service_unavailable",
            ServiceError::ApplicationError { .. } => "application",
        }
    }

    /// HTTP status code if the error came from an HTTP response.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ServiceError::Unauthorized { .. } => Some(HttpStatusCode::UNAUTHORIZED.as_u16()),
            ServiceError::RateLimited { .. } => Some(HttpStatusCode::TOO_MANY_REQUESTS.as_u16()),
            ServiceError::BadRequest { .. } => Some(HttpStatusCode::BAD_REQUEST.as_u16()),
            ServiceError::ServiceUnavailable { status, .. } => status.map(|s| s.as_u16()),
            ServiceError::EmptyInput { .. } | ServiceError::ApplicationError { .. } => None,
        }
    }
}
