//! The mindmap orchestrator.

use tracing::{debug, info};

use mapbot_ai::{structuring_prompt, AiProvider};
use mapbot_mindmap::{filename_for, generator_for, MindmapDocument, OutputFormat};

use crate::error::{ServiceError, ServiceResult};
use crate::parse::parse_outline;

/// One mindmap request: a topic plus the desired output format.
#[derive(Debug, Clone)]
pub struct MindmapRequest {
    /// Free-text topic to decompose.
    pub topic: String,
    /// Output format, Markdown unless asked otherwise.
    pub format: OutputFormat,
}

impl MindmapRequest {
    /// Create a request for the default (Markdown) format.
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            format: OutputFormat::default(),
        }
    }

    /// Select a different output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}

/// Coordinates one topic-to-document request end to end.
///
/// Holds only the injected provider; every call is self-contained and
/// no state survives between requests.
pub struct MindmapService {
    provider: Box<dyn AiProvider>,
}

impl MindmapService {
    /// Create a service backed by the given provider.
    pub fn new(provider: Box<dyn AiProvider>) -> Self {
        Self { provider }
    }

    /// Turn a topic into a generated mindmap document.
    ///
    /// The provider is called exactly once; a failed call is surfaced
    /// as-is and retry policy is left to the caller.
    pub async fn generate(&self, request: &MindmapRequest) -> ServiceResult<MindmapDocument> {
        let topic = request.topic.trim();
        if topic.is_empty() {
            return Err(ServiceError::InvalidTopic);
        }

        debug!(topic, format = request.format.as_str(), "Generating mindmap");

        let prompt = structuring_prompt(topic);
        let raw = self.provider.generate_outline(&prompt).await?;

        let tree = parse_outline(&raw)?;
        let content = generator_for(request.format).generate(&tree)?;
        let filename = filename_for(tree.title(), request.format);

        info!(
            filename = %filename,
            bytes = content.len(),
            "Mindmap generated"
        );

        Ok(MindmapDocument {
            content,
            filename,
            format: request.format,
        })
    }
}
