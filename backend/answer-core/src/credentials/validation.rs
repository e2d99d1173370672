//! Token format checks run before a token is persisted.
//!
//! The service has no published token format, so only values that can never
//! be valid are refused: blanks, header-breaking characters and obvious
//! placeholders copied from documentation.

use crate::error::{CredentialError, TokenValidationFailure};

use common::BearerToken;

/// Upper bound on stored token length.
pub const MAX_TOKEN_LENGTH: usize = 4096;

/// Check a token value without storing it.
pub fn validate_token(token: &str) -> Result<(), TokenValidationFailure> {
    let trimmed = token.trim();

    if trimmed.is_empty() {
        return Err(TokenValidationFailure::Empty);
    }

    if trimmed.len() > MAX_TOKEN_LENGTH {
        return Err(TokenValidationFailure::TooLong {
            max: MAX_TOKEN_LENGTH,
            actual: trimmed.len(),
        });
    }

    if trimmed.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(TokenValidationFailure::InvalidCharacters);
    }

    if let Some(pattern) = detect_placeholder(trimmed) {
        return Err(TokenValidationFailure::PlaceholderDetected { pattern });
    }

    Ok(())
}

/// Validate and wrap in a [`BearerToken`].
#[track_caller]
pub fn parse_token(token: &str) -> Result<BearerToken, CredentialError> {
    validate_token(token).map_err(CredentialError::validation)?;

    BearerToken::new(token)
        .ok_or_else(|| CredentialError::validation(TokenValidationFailure::Empty))
}

/// Detect common placeholder patterns.
///
/// Returns the matched pattern name if detected.
fn detect_placeholder(token: &str) -> Option<&'static str> {
    let lower = token.to_lowercase();

    static PATTERNS: &[(&str, &str)] = &[
        ("...", "ellipsis"),
        ("your-api-key", "your-api-key"),
        ("your_api_key", "your_api_key"),
        ("your-token", "your-token"),
        ("your_token", "your_token"),
        ("<your", "<your...>"),
        ("xxx", "xxx"),
        ("placeholder", "placeholder"),
        ("changeme", "changeme"),
    ];

    for (pattern, name) in PATTERNS {
        if lower.contains(pattern) {
            return Some(name);
        }
    }

    // e.g. "aaaaaaaaaa"
    let mut chars = token.chars();
    if let Some(first_char) = chars.next() {
        if token.len() >= 10 && chars.all(|c| c == first_char) {
            return Some("repeated_char");
        }
    }

    None
}
