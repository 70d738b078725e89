//! Error types for mindmap orchestration.

use thiserror::Error;

use mapbot_ai::AiError;
use mapbot_mindmap::MindmapError;

/// Result type alias for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors a mindmap request can end with.
///
/// Every variant is terminal for its request; none is fatal to the
/// process.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("topic must not be empty")]
    InvalidTopic,

    #[error("AI provider error: {0}")]
    Provider(#[from] AiError),

    #[error("mindmap error: {0}")]
    Mindmap(#[from] MindmapError),
}
