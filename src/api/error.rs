//! Error types for dashboard API fetches.
//!
//! Every failure falls into one of two kinds: the request never produced a
//! usable body (transport), or the body did not match the expected shape
//! (parse).

use thiserror::Error;

/// Broad classification of a [`FetchError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    Transport,
    Parse,
}

/// Errors that can occur while fetching from the dashboard API.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Request failed before a complete body was received
    #[error("Request to '{endpoint}' failed: {source}")]
    Transport {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status
    #[error("Request to '{endpoint}' returned status {status}")]
    Status { endpoint: &'static str, status: u16 },

    /// Body is not valid JSON or does not match the expected shape
    #[error("Invalid response from '{endpoint}': {source}")]
    Parse {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::Client(_) => FetchErrorKind::Transport,
            FetchError::Transport { .. } => FetchErrorKind::Transport,
            FetchError::Status { .. } => FetchErrorKind::Transport,
            FetchError::Parse { .. } => FetchErrorKind::Parse,
        }
    }

    /// Stable tag for logs and machine-readable output.
    pub fn error_type(&self) -> &'static str {
        match self {
            FetchError::Client(_) => "client_error",
            FetchError::Transport { .. } => "transport_error",
            FetchError::Status { .. } => "status_error",
            FetchError::Parse { .. } => "parse_error",
        }
    }

    /// Endpoint path the failed request targeted, if any.
    pub fn endpoint(&self) -> Option<&'static str> {
        match self {
            FetchError::Client(_) => None,
            FetchError::Transport { endpoint, .. }
            | FetchError::Status { endpoint, .. }
            | FetchError::Parse { endpoint, .. } => Some(*endpoint),
        }
    }
}
