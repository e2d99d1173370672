// Unit tests for the redacted bearer credential

use crate::BearerToken;

/// **VALUE**: Verifies that blank input never produces a credential.
///
/// **WHY THIS MATTERS**: A blank token must behave exactly like "no token" so the
/// client sends an anonymous request instead of `Authorization: Bearer `.
///
/// **BUG THIS CATCHES**: Would catch if `new()` stops trimming or accepts "   ".
#[test]
fn given_blank_value_when_creating_token_then_returns_none() {
    assert!(BearerToken::new("").is_none());
    assert!(BearerToken::new("   \t\n").is_none());
}

/// **VALUE**: Verifies surrounding whitespace is stripped from the stored value.
///
/// **BUG THIS CATCHES**: Would catch a pasted token with a trailing newline being sent
/// verbatim in the header.
#[test]
fn given_padded_value_when_creating_token_then_trims_it() {
    let token = BearerToken::new("  abc123\n").unwrap();

    assert_eq!(token.expose(), "abc123");
    assert_eq!(token.len(), 6);
    assert!(!token.is_empty());
}

/// **VALUE**: Verifies the token value never leaks through formatting.
///
/// **WHY THIS MATTERS**: Tokens end up inside structs that get logged with `{:?}`.
///
/// **BUG THIS CATCHES**: Would catch a derived Debug replacing the manual impl.
#[test]
fn given_token_when_formatted_then_value_is_redacted() {
    let token = BearerToken::new("super-secret-value").unwrap();

    let debug = format!("{token:?}");
    let display = format!("{token}");

    assert!(!debug.contains("super-secret-value"));
    assert!(!display.contains("super-secret-value"));
    assert!(debug.contains("REDACTED"));
}

/// **VALUE**: Verifies that serialization is refused.
///
/// **BUG THIS CATCHES**: Would catch a token accidentally written into a config or
/// log payload through serde.
#[test]
fn given_token_when_serialized_then_returns_error() {
    let token = BearerToken::new("super-secret-value").unwrap();

    let result = serde_json::to_string(&token);

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("cannot be serialized"));
}
