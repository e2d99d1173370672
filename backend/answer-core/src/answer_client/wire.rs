//! JSON shapes exchanged with the answer service.

use crate::error::ServiceError;
use crate::error::service::APPLICATION_ERROR_FALLBACK_MESSAGE;
use crate::normalizer::{NormalizeStrategy, normalize_with};

use serde::{Deserialize, Serialize};

/// Returned when the service reports success but sends no answer text.
pub const NO_ANSWER_FALLBACK: &str = "No answer returned";

/// A question that passed the emptiness check.
///
/// Holds the caller's string unchanged; trimming is only used for the check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question<'a>(&'a str);

impl<'a> Question<'a> {
    /// # Errors
    ///
    /// Returns [`ServiceError::EmptyInput`] if the text is blank after trimming.
    #[track_caller]
    pub fn parse(text: &'a str) -> Result<Self, ServiceError> {
        if text.trim().is_empty() {
            return Err(ServiceError::empty_input());
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &'a str {
        self.0
    }
}

/// Request body: `{"question": "..."}`.
#[derive(Debug, Serialize)]
pub struct AnswerRequest<'a> {
    pub question: &'a str,
}

impl<'a> From<Question<'a>> for AnswerRequest<'a> {
    fn from(question: Question<'a>) -> Self {
        Self {
            question: question.as_str(),
        }
    }
}

/// Response body. A missing `success` reads as `false`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct AnswerResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub analysis: Option<String>,
    #[serde(default)]
    pub formatted_answer: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl AnswerResponse {
    /// Pick the answer text, preferring `analysis` over `formatted_answer`.
    /// Empty strings count as absent.
    #[track_caller]
    pub fn into_answer(self) -> Result<RawAnswer, ServiceError> {
        if !self.success {
            let message = non_empty(self.error)
                .unwrap_or_else(|| APPLICATION_ERROR_FALLBACK_MESSAGE.to_string());
            return Err(ServiceError::application(message));
        }

        let text = non_empty(self.analysis)
            .or_else(|| non_empty(self.formatted_answer))
            .unwrap_or_else(|| NO_ANSWER_FALLBACK.to_string());

        Ok(RawAnswer::new(text))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Answer text exactly as the service sent it (HTML or plain).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAnswer {
    text: String,
}

impl RawAnswer {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    /// Plain-text rendition for a spreadsheet cell.
    pub fn normalized(&self, strategy: NormalizeStrategy) -> String {
        normalize_with(&self.text, strategy)
    }
}

impl std::fmt::Display for RawAnswer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
