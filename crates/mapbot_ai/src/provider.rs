//! The provider contract for topic structuring.

use async_trait::async_trait;

use crate::error::AiResult;

/// A remote language-model service that turns a structuring prompt into
/// raw structured text.
///
/// Implementations make a single attempt per call; retry policy belongs
/// to the caller. The returned string is untrusted model output and
/// must be validated downstream.
#[async_trait]
pub trait AiProvider: Send + Sync {
    /// Send the structuring prompt and return the raw model text.
    async fn generate_outline(&self, prompt: &str) -> AiResult<String>;
}
