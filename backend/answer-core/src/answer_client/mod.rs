//! Client for the remote answer service: one POST per question, no retries.

pub mod wire;

pub use wire::{AnswerRequest, AnswerResponse, NO_ANSWER_FALLBACK, Question, RawAnswer};

use crate::config::ServiceConfig;
use crate::error::service::BAD_REQUEST_FALLBACK_MESSAGE;
use crate::error::{AnswerClientError, ServiceError};

use common::{BearerToken, HttpStatusCode};

use std::time::Duration;

use log::{debug, info, warn};
use reqwest::Client;
use serde_json::Value;
use url::Url;

const UNKNOWN_STATUS_TEXT: &str = "Unknown Status";

#[derive(Debug, Clone)]
pub struct AnswerClient {
    endpoint: Url,
    client: Client,
}

impl AnswerClient {
    /// Client without a transport timeout.
    ///
    /// # Errors
    ///
    /// Returns [`AnswerClientError`] if the endpoint is not a valid URL or the
    /// HTTP client cannot be built.
    pub fn new(endpoint: &str) -> Result<Self, AnswerClientError> {
        Self::with_timeout(endpoint, None)
    }

    pub fn with_timeout(
        endpoint: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, AnswerClientError> {
        let endpoint = Url::parse(endpoint)?;

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { endpoint, client })
    }

    pub fn from_config(config: &ServiceConfig) -> Result<Self, AnswerClientError> {
        Self::with_timeout(config.endpoint(), config.timeout())
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Send one question and return the raw answer.
    ///
    /// A blank question fails with [`ServiceError::EmptyInput`] before any
    /// network activity. The `Authorization` header is only attached when a
    /// credential is given.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] describing the rejected, failed or unreachable call.
    pub async fn submit(
        &self,
        question: &str,
        credential: Option<&BearerToken>,
    ) -> Result<RawAnswer, ServiceError> {
        let question = Question::parse(question)?;

        debug!(
            "Submitting question to {} ({} chars, credential: {})",
            self.endpoint,
            question.as_str().len(),
            credential.is_some()
        );

        let mut request = self
            .client
            .post(self.endpoint.clone())
            .json(&AnswerRequest::from(question));

        if let Some(token) = credential.filter(|token| !token.is_empty()) {
            request = request.bearer_auth(token.expose());
        }

        let result = match request.send().await {
            Ok(response) => read_reply(response).await,
            Err(e) => Err(ServiceError::from_transport(&e)),
        };

        match &result {
            Ok(answer) => info!("Answer received ({} chars)", answer.as_str().len()),
            Err(e) => warn!("Answer request failed [{}]: {}", e.error_category(), e),
        }

        result
    }
}

async fn read_reply(response: reqwest::Response) -> Result<RawAnswer, ServiceError> {
    let status = HttpStatusCode(response.status().as_u16());
    let status_text = response
        .status()
        .canonical_reason()
        .unwrap_or(UNKNOWN_STATUS_TEXT)
        .to_string();

    let body = match response.text().await {
        Ok(body) => body,
        Err(e) if status.is_success() => return Err(ServiceError::from_transport(&e)),
        // Error statuses other than 400 never look at the body.
        Err(_) => String::new(),
    };

    interpret_reply(status, &status_text, &body)
}

/// Map an HTTP status and body to the call outcome.
pub fn interpret_reply(
    status: HttpStatusCode,
    status_text: &str,
    body: &str,
) -> Result<RawAnswer, ServiceError> {
    match status {
        HttpStatusCode::UNAUTHORIZED => return Err(ServiceError::unauthorized()),
        HttpStatusCode::TOO_MANY_REQUESTS => return Err(ServiceError::rate_limited()),
        HttpStatusCode::BAD_REQUEST => {
            return Err(ServiceError::bad_request(bad_request_message(body)));
        }
        _ if !status.is_success() => {
            return Err(ServiceError::unavailable(Some(status), status_text));
        }
        _ => {}
    }

    let response: AnswerResponse = serde_json::from_str(body).map_err(|e| {
        ServiceError::application(format!("Malformed response from answer service: {e}"))
    })?;

    response.into_answer()
}

fn bad_request_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|json| json.get("error").and_then(Value::as_str).map(str::to_string))
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| BAD_REQUEST_FALLBACK_MESSAGE.to_string())
}
