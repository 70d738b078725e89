//! Error types for the Telegram front end.

use thiserror::Error;

/// Result type alias for bot operations.
pub type BotResult<T> = Result<T, BotError>;

/// Errors from the Telegram Bot API boundary.
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Telegram bot token is empty")]
    NotConfigured,

    #[error("Telegram API error: {0}")]
    Api(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
