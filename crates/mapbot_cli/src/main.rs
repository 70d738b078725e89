//! Mapbot - Telegram mindmap bot entry point.
//!
//! Configuration is read once at startup from flags or environment
//! variables and passed explicitly into the constructors; there is no
//! ambient global state.

use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use mapbot_ai::{GeminiClient, GeminiConfig, DEFAULT_GEMINI_MODEL};
use mapbot_service::MindmapService;
use mapbot_telegram::{MindmapBot, TelegramApi};

/// Mapbot - turns chat topics into mindmap files
#[derive(Parser)]
#[command(name = "mapbot")]
#[command(version, about = "Mapbot - turns chat topics into mindmap files")]
struct Cli {
    /// Telegram bot token
    #[arg(long, env = "TELEGRAM_BOT_TOKEN", hide_env_values = true)]
    telegram_token: String,

    /// Gemini API key
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    gemini_api_key: String,

    /// Gemini model identifier
    #[arg(long, env = "GEMINI_MODEL", default_value = DEFAULT_GEMINI_MODEL)]
    gemini_model: String,

    /// Timeout for a single AI request, in seconds
    #[arg(long, env = "AI_TIMEOUT_SECS", default_value_t = 60)]
    ai_timeout_secs: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let log_result = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(
            EnvFilter::from_default_env()
                .add_directive("mapbot=info".parse().unwrap())
                .add_directive("warn".parse().unwrap()),
        )
        .try_init();

    if log_result.is_err() {
        // Logging already initialized, continue
    }

    let cli = Cli::parse();

    info!("Starting Mapbot (model: {})", cli.gemini_model);

    let provider = GeminiClient::new(
        GeminiConfig::new(
            cli.gemini_api_key,
            Duration::from_secs(cli.ai_timeout_secs),
        )
        .with_model(cli.gemini_model),
    )
    .context("failed to configure the AI provider")?;

    let service = MindmapService::new(Box::new(provider));
    let api = TelegramApi::new(&cli.telegram_token)
        .context("failed to configure the Telegram client")?;

    MindmapBot::new(api, service).run().await?;
    Ok(())
}
