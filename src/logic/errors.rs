use std::time::Duration;

use thiserror::Error;

/// Why a page fetch failed
///
/// Kept `Clone` so the last failure can sit in the feed model next to the items.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("fetch timed out after {0:?}")]
    Timeout(Duration),

    #[error("connection failed: {0}")]
    Connection(String),

    #[error("server returned HTTP {code}")]
    Status { code: u16 },

    #[error("could not decode page: {0}")]
    Decode(String),

    #[error("{0}")]
    Provider(String),
}

impl FetchError {
    /// Classify a reqwest failure, walking its source chain for the root cause
    pub fn from_reqwest(error: reqwest::Error, timeout: Duration) -> Self {
        if error.is_timeout() {
            return FetchError::Timeout(timeout);
        }
        if let Some(status) = error.status() {
            return FetchError::Status {
                code: status.as_u16(),
            };
        }
        if error.is_decode() {
            return FetchError::Decode(root_cause(&error));
        }
        if error.is_connect() || error.is_request() {
            return FetchError::Connection(root_cause(&error));
        }

        let msg = error.to_string().to_lowercase();
        if msg.contains("timeout") || msg.contains("timed out") {
            return FetchError::Timeout(timeout);
        }
        FetchError::Provider(root_cause(&error))
    }

    /// Whether a later attempt could plausibly succeed
    pub fn is_transient(&self) -> bool {
        match self {
            FetchError::Timeout(_) | FetchError::Connection(_) => true,
            FetchError::Status { code } => *code >= 500,
            FetchError::Decode(_) | FetchError::Provider(_) => false,
        }
    }
}

/// Deepest message in an error's source chain
pub fn root_cause(error: &dyn std::error::Error) -> String {
    let mut deepest = error.to_string();
    let mut source = error.source();

    while let Some(err) = source {
        deepest = err.to_string();
        source = err.source();
    }

    deepest
}
