use reqwest::StatusCode;
use std::sync::Arc;

/// Why a page could not be fetched.
///
/// Cloneable so one failure can be handed to every caller that joined the
/// same in-flight request.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[source] Arc<reqwest::Error>),

    #[error("server answered {0}")]
    Status(StatusCode),

    #[error("malformed response body: {0}")]
    Decode(#[source] Arc<serde_json::Error>),

    #[error("invalid base url {0:?}")]
    InvalidBaseUrl(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Transport(Arc::new(err))
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(Arc::new(err))
    }
}
