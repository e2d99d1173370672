use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error as ThisError;

/// Failures while building an [`AnswerClient`](crate::AnswerClient).
///
/// Failures of an individual call are [`ServiceError`](super::ServiceError).
#[derive(Debug, ThisError)]
pub enum AnswerClientError {
    #[error("HTTP Client Error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
    },

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },
}

impl From<url::ParseError> for AnswerClientError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        AnswerClientError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for AnswerClientError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        AnswerClientError::Http {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
