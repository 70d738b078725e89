//! Error types for the AI provider boundary.

use thiserror::Error;

/// Result type alias for provider operations.
pub type AiResult<T> = Result<T, AiError>;

/// Errors from the AI provider collaborator.
#[derive(Error, Debug)]
pub enum AiError {
    #[error("AI provider is not configured: {0}")]
    NotConfigured(String),

    #[error("AI provider request timed out")]
    Timeout,

    #[error("AI provider network error: {0}")]
    Network(String),

    #[error("AI provider quota exhausted: {0}")]
    Quota(String),

    #[error("AI provider returned status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("AI provider returned an empty response")]
    EmptyResponse,
}

impl From<reqwest::Error> for AiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Network(err.to_string())
        }
    }
}
