// src/generate/mod.rs
// =============================================================================
// The text-generation capability: prompt in, text out.
//
// The audit only needs one thing from a language model, so it is hidden
// behind a small trait. That keeps the suggestion step testable with a stub
// and lets the binary run without an API key.
//
// Implementations:
// - AnthropicGenerator: calls the Anthropic Messages API over reqwest
// - DisabledGenerator: always fails, so suggestions fall back to defaults
// =============================================================================

mod anthropic;

pub use anthropic::AnthropicGenerator;

use async_trait::async_trait;

use crate::error::GenerationError;

#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Returns the model's reply to `prompt`, using at most `max_tokens`.
    async fn generate(&self, prompt: &str, max_tokens: u32) -> Result<String, GenerationError>;
}

/// Stands in when no API key is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledGenerator;

#[async_trait]
impl TextGenerator for DisabledGenerator {
    async fn generate(&self, _prompt: &str, _max_tokens: u32) -> Result<String, GenerationError> {
        Err(GenerationError::Disabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disabled_generator_always_fails() {
        let result = DisabledGenerator.generate("anything", 100).await;
        assert_eq!(result, Err(GenerationError::Disabled));
    }
}
