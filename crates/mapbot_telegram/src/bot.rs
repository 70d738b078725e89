//! The bot loop: long polling, command handling and topic dispatch.

use std::time::Duration;

use tracing::{debug, error, info, warn};

use mapbot_mindmap::MindmapError;
use mapbot_service::{MindmapRequest, MindmapService, ServiceError};

use crate::api::TelegramApi;
use crate::error::BotResult;
use crate::types::Update;

/// Long-poll window for `getUpdates`.
const POLL_TIMEOUT_SECS: u64 = 50;

/// Pause before retrying after a failed poll.
const RETRY_DELAY: Duration = Duration::from_secs(5);

const WELCOME_MESSAGE: &str = "Welcome to Mapbot!\n\n\
Send me any topic and I will turn it into a mindmap file you can \
import into EdrawMind, XMind, Obsidian and friends.\n\n\
Examples:\n\
- Vietnamese history\n\
- Python programming\n\
- Online marketing\n\n\
Use /help for details.";

const HELP_MESSAGE: &str = "How to use Mapbot:\n\n\
/start - welcome message\n\
/help - this text\n\n\
Anything else you send is treated as a topic. I will organise it \
into a hierarchy and reply with a Markdown mindmap file.";

const STATUS_MESSAGE: &str = "Working on your mindmap...";

/// The chat front end: receives messages, hands topics to the
/// orchestrator and sends the resulting file back.
pub struct MindmapBot {
    api: TelegramApi,
    service: MindmapService,
}

impl MindmapBot {
    /// Create a bot from an API client and an orchestrator.
    pub fn new(api: TelegramApi, service: MindmapService) -> Self {
        Self { api, service }
    }

    /// Poll for updates forever.
    ///
    /// Transport failures are logged and retried after a delay;
    /// per-update failures are logged and skipped. Nothing here stops
    /// the process.
    pub async fn run(&self) -> BotResult<()> {
        info!("Bot started, polling for updates");

        let mut offset = 0i64;
        loop {
            let updates = match self.api.get_updates(offset, POLL_TIMEOUT_SECS).await {
                Ok(updates) => updates,
                Err(e) => {
                    warn!("Failed to fetch updates: {}", e);
                    tokio::time::sleep(RETRY_DELAY).await;
                    continue;
                }
            };

            for update in updates {
                offset = offset.max(update.update_id + 1);
                if let Err(e) = self.handle_update(&update).await {
                    error!(update_id = update.update_id, "Failed to handle update: {}", e);
                }
            }
        }
    }

    async fn handle_update(&self, update: &Update) -> BotResult<()> {
        let Some(message) = &update.message else {
            return Ok(());
        };
        let Some(text) = message.text.as_deref() else {
            return Ok(());
        };

        let chat_id = message.chat.id;
        debug!(chat_id, text, "Received message");

        match text.trim() {
            "/start" => {
                self.api.send_message(chat_id, WELCOME_MESSAGE).await?;
            }
            "/help" => {
                self.api.send_message(chat_id, HELP_MESSAGE).await?;
            }
            topic => self.handle_topic(chat_id, topic).await?,
        }
        Ok(())
    }

    async fn handle_topic(&self, chat_id: i64, topic: &str) -> BotResult<()> {
        let status = self.api.send_message(chat_id, STATUS_MESSAGE).await?;

        let request = MindmapRequest::new(topic);
        match self.service.generate(&request).await {
            Ok(document) => {
                info!(chat_id, filename = %document.filename, "Sending mindmap");
                let filename = document.filename.clone();
                self.api
                    .send_document(
                        chat_id,
                        &filename,
                        document.into_bytes(),
                        Some("Your mindmap is ready."),
                    )
                    .await?;
            }
            Err(e) => {
                warn!(chat_id, "Mindmap generation failed: {}", e);
                self.api.send_message(chat_id, &user_reply(&e)).await?;
            }
        }

        // Best-effort cleanup of the status message.
        if let Err(e) = self.api.delete_message(chat_id, status.message_id).await {
            debug!(chat_id, "Failed to delete status message: {}", e);
        }

        Ok(())
    }
}

/// The reply a user sees for a failed request.
///
/// Provider and structure failures are reported generically; raw model
/// output never reaches the chat.
pub fn user_reply(error: &ServiceError) -> String {
    match error {
        ServiceError::InvalidTopic => error.to_string(),
        ServiceError::Provider(_) => {
            "The AI service is currently unavailable. Please try again later.".to_string()
        }
        ServiceError::Mindmap(MindmapError::UnsupportedDepth { .. }) => {
            "That topic produced a structure too deep to render. Try narrowing it down."
                .to_string()
        }
        ServiceError::Mindmap(_) => {
            "Something went wrong while generating the mindmap. Please try again.".to_string()
        }
    }
}
