//! Bearer credential with redacted Debug/Display output.

use crate::{ErrorLocation, RedactError};

use std::fmt;
use std::panic::Location;

use serde::ser::Error;
use zeroize::Zeroize;

/// An opaque bearer token for the answer service.
///
/// The value never appears in logs or debug output and is wiped on drop.
/// Surrounding whitespace is removed on construction.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken {
    inner: String,
}

impl BearerToken {
    /// Wrap a token value. Returns `None` when the value is blank, since an
    /// empty credential means an anonymous request.
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let mut raw: String = token.into();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            raw.zeroize();
            return None;
        }

        let inner = trimmed.to_string();
        raw.zeroize();
        Some(Self { inner })
    }

    /// The actual token value, for building the `Authorization` header.
    #[inline]
    pub fn expose(&self) -> &str {
        &self.inner
    }

    /// Token length (safe to log).
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BearerToken([REDACTED])")
    }
}

impl fmt::Display for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED TOKEN]")
    }
}

impl Drop for BearerToken {
    fn drop(&mut self) {
        self.inner.zeroize();
    }
}

// Never serialize implicitly; stores call expose() on purpose.
impl serde::Serialize for BearerToken {
    fn serialize<S>(&self, _serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        Err(S::Error::custom(RedactError::Serialization {
            message: String::from("BearerToken cannot be serialized - use expose() explicitly"),
            location: ErrorLocation::from(Location::caller()),
        }))
    }
}
