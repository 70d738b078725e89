//! Error types for the mindmap module.

use thiserror::Error;

/// Result type alias for mindmap operations.
pub type MindmapResult<T> = Result<T, MindmapError>;

/// Errors that can occur while building or rendering a mindmap tree.
#[derive(Error, Debug)]
pub enum MindmapError {
    #[error("malformed mindmap structure: {0}")]
    MalformedStructure(String),

    #[error("mindmap depth {depth} exceeds the supported maximum of {max}")]
    UnsupportedDepth { depth: usize, max: usize },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl MindmapError {
    /// Create a malformed structure error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedStructure(message.into())
    }
}
