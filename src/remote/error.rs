//! Error type for the repository search path.
//!
//! Every failure between issuing a search request and holding a normalized
//! [`SearchPage`](super::SearchPage) is a [`FetchError`]. The error keeps the
//! upstream HTTP status (when there was one) and the upstream message so that
//! diagnostics can show exactly what GitHub said, while the browse view only
//! ever shows a fixed user-facing message.

use std::fmt;

/// Where in the request lifecycle a fetch failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    /// Connection, TLS, DNS or body read failure
    Transport,
    /// The endpoint answered with a non-success status
    Status,
    /// The body could not be decoded into the search schema
    Decode,
}

/// A failed search request.
#[derive(Debug, Clone)]
pub struct FetchError {
    /// Failure category
    pub kind: FetchErrorKind,
    /// HTTP status code, if the endpoint answered
    pub status: Option<reqwest::StatusCode>,
    /// Upstream or transport message
    pub message: String,
}

impl FetchError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            kind: FetchErrorKind::Transport,
            status: None,
            message: message.into(),
        }
    }

    pub fn with_status(status: reqwest::StatusCode, message: impl Into<String>) -> Self {
        Self {
            kind: FetchErrorKind::Status,
            status: Some(status),
            message: message.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self {
            kind: FetchErrorKind::Decode,
            status: None,
            message: message.into(),
        }
    }

    /// Build a status error from a non-success response body.
    ///
    /// GitHub error bodies look like `{"message": "...", "documentation_url": "..."}`.
    /// Anything else falls back to the canonical reason phrase.
    pub fn from_response_body(status: reqwest::StatusCode, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| {
                value
                    .get("message")
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            })
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown").to_string());

        Self::with_status(status, message)
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.kind, self.status) {
            (_, Some(status)) => write!(
                f,
                "GitHub search failed ({} {}): {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown"),
                self.message
            ),
            (FetchErrorKind::Decode, None) => {
                write!(f, "malformed search response: {}", self.message)
            }
            _ => write!(f, "search request failed: {}", self.message),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return Self::decode(err.to_string());
        }
        match err.status() {
            Some(status) => Self::with_status(status, err.to_string()),
            None => Self::transport(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        Self::decode(err.to_string())
    }
}
