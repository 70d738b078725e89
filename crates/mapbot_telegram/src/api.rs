//! Minimal Telegram Bot API client.
//!
//! Covers the four methods the bot needs: `getUpdates` (long polling),
//! `sendMessage`, `sendDocument` (multipart upload) and
//! `deleteMessage`.

use std::time::Duration;

use reqwest::multipart;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::{BotError, BotResult};
use crate::types::{ApiResponse, Message, Update};

const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// Request timeout; must stay above the long-poll window.
const HTTP_TIMEOUT: Duration = Duration::from_secs(90);

/// Thin client over the Telegram Bot API.
pub struct TelegramApi {
    client: reqwest::Client,
    base_url: String,
}

impl TelegramApi {
    /// Create a client for the given bot token.
    pub fn new(token: &str) -> BotResult<Self> {
        if token.trim().is_empty() {
            return Err(BotError::NotConfigured);
        }

        let client = reqwest::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_url: format!("{}/bot{}", TELEGRAM_API_BASE, token),
        })
    }

    /// Fetch updates past `offset`, long-polling up to `timeout_secs`.
    pub async fn get_updates(&self, offset: i64, timeout_secs: u64) -> BotResult<Vec<Update>> {
        #[derive(Serialize)]
        struct Params {
            offset: i64,
            timeout: u64,
        }

        self.call(
            "getUpdates",
            &Params {
                offset,
                timeout: timeout_secs,
            },
        )
        .await
    }

    /// Send a plain text message.
    pub async fn send_message(&self, chat_id: i64, text: &str) -> BotResult<Message> {
        #[derive(Serialize)]
        struct Params<'a> {
            chat_id: i64,
            text: &'a str,
        }

        self.call("sendMessage", &Params { chat_id, text }).await
    }

    /// Upload a file to a chat.
    pub async fn send_document(
        &self,
        chat_id: i64,
        filename: &str,
        bytes: Vec<u8>,
        caption: Option<&str>,
    ) -> BotResult<Message> {
        let part = multipart::Part::bytes(bytes).file_name(filename.to_string());
        let mut form = multipart::Form::new()
            .text("chat_id", chat_id.to_string())
            .part("document", part);
        if let Some(caption) = caption {
            form = form.text("caption", caption.to_string());
        }

        debug!(chat_id, filename, "Uploading document");

        let response = self
            .client
            .post(format!("{}/sendDocument", self.base_url))
            .multipart(form)
            .send()
            .await?;

        let envelope: ApiResponse<Message> = response.json().await?;
        envelope.into_result("sendDocument")
    }

    /// Delete a message.
    pub async fn delete_message(&self, chat_id: i64, message_id: i64) -> BotResult<()> {
        #[derive(Serialize)]
        struct Params {
            chat_id: i64,
            message_id: i64,
        }

        let _: bool = self
            .call(
                "deleteMessage",
                &Params {
                    chat_id,
                    message_id,
                },
            )
            .await?;
        Ok(())
    }

    // JSON-in, JSON-out method call with envelope unwrapping.
    async fn call<T, P>(&self, method: &str, params: &P) -> BotResult<T>
    where
        T: DeserializeOwned,
        P: Serialize,
    {
        let response = self
            .client
            .post(format!("{}/{}", self.base_url, method))
            .json(params)
            .send()
            .await?;

        let envelope: ApiResponse<T> = response.json().await?;
        envelope.into_result(method)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_token_rejected() {
        assert!(matches!(
            TelegramApi::new("  "),
            Err(BotError::NotConfigured)
        ));
    }

    #[test]
    fn test_token_embedded_in_base_url() {
        let api = TelegramApi::new("123:abc").unwrap();
        assert!(api.base_url.ends_with("/bot123:abc"));
    }
}
