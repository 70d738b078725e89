//! Gemini client for topic structuring.
//!
//! Calls the `generateContent` REST endpoint with the JSON response
//! modality enabled, so the model answers with the raw structure text
//! instead of conversational prose.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AiError, AiResult};
use crate::provider::AiProvider;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Model used when none is configured.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";

/// Immutable Gemini connection settings, loaded once at startup.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key for the Generative Language API.
    pub api_key: String,
    /// Model identifier, e.g. `gemini-2.0-flash`.
    pub model: String,
    /// Bound on a single request, connection included.
    pub timeout: Duration,
}

impl GeminiConfig {
    /// Create a config with the default model and a timeout.
    pub fn new(api_key: impl Into<String>, timeout: Duration) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_GEMINI_MODEL.to_string(),
            timeout,
        }
    }

    /// Override the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

/// Gemini-backed [`AiProvider`].
pub struct GeminiClient {
    config: GeminiConfig,
    client: reqwest::Client,
}

impl GeminiClient {
    /// Create a new client with explicit configuration.
    pub fn new(config: GeminiConfig) -> AiResult<Self> {
        if config.api_key.trim().is_empty() {
            return Err(AiError::NotConfigured(
                "Gemini API key is empty".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AiError::Network(e.to_string()))?;

        Ok(Self { config, client })
    }

    /// The configured model identifier.
    pub fn model(&self) -> &str {
        &self.config.model
    }
}

#[async_trait]
impl AiProvider for GeminiClient {
    async fn generate_outline(&self, prompt: &str) -> AiResult<String> {
        let url = format!(
            "{}/models/{}:generateContent",
            GEMINI_API_BASE, self.config.model
        );

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: 0.7,
                response_mime_type: "application/json".to_string(),
            },
        };

        debug!(model = %self.config.model, "Sending structuring request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status.as_u16() == 429 {
            let body = response.text().await.unwrap_or_default();
            return Err(AiError::Quota(body));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AiError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let result: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AiError::Network(format!("failed to parse response: {}", e)))?;

        result
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .and_then(|p| p.text)
            .filter(|text| !text.trim().is_empty())
            .ok_or(AiError::EmptyResponse)
    }
}

// Gemini API types

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "responseMimeType")]
    response_mime_type: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}
