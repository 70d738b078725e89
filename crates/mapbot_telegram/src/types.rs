//! Telegram Bot API wire types.
//!
//! Only the fields this bot reads are modelled; everything else in the
//! payloads is ignored.

use serde::Deserialize;

use crate::error::{BotError, BotResult};

/// Envelope every Bot API method responds with.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub result: Option<T>,
    pub description: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Unwrap the envelope, turning an API-level failure into an error.
    pub fn into_result(self, method: &str) -> BotResult<T> {
        if self.ok {
            self.result
                .ok_or_else(|| BotError::Api(format!("{}: missing result", method)))
        } else {
            Err(BotError::Api(format!(
                "{}: {}",
                method,
                self.description
                    .unwrap_or_else(|| "unknown error".to_string())
            )))
        }
    }
}

/// An incoming update from long polling.
#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    pub update_id: i64,
    pub message: Option<Message>,
}

/// A chat message.
#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub message_id: i64,
    pub chat: Chat,
    pub text: Option<String>,
}

/// The chat a message belongs to.
#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: i64,
}
