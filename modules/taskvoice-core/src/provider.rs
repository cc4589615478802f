use anyhow::Result;
use async_trait::async_trait;

/// Dyn-compatible completion capability.
///
/// The language model is the decision function of this service, so it sits
/// behind a trait seam: production wraps `ai_client::OpenAi`, tests supply
/// canned-JSON stubs without touching process environment.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Submit system instructions plus the raw user utterance and return the
    /// generated text, expected to be a single JSON object.
    async fn complete(&self, system_prompt: &str, user_text: &str) -> Result<String>;
}
