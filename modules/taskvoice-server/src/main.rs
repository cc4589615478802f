use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tracing_subscriber::EnvFilter;

use taskvoice_core::{AppConfig, CompletionProvider};
use taskvoice_server::routes;

/// Wrapper to make OpenAi implement our dyn-compatible CompletionProvider trait.
struct OpenAiCompletionProvider {
    ai: ai_client::OpenAi,
}

#[async_trait]
impl CompletionProvider for OpenAiCompletionProvider {
    async fn complete(&self, system_prompt: &str, user_text: &str) -> Result<String> {
        self.ai.json_completion(system_prompt, user_text).await
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Missing OPENAI_API_KEY fails here, before the listener binds.
    let config = AppConfig::from_env()?;

    let ai = ai_client::OpenAi::new(&config.openai_api_key, &config.openai_model);
    let provider: Arc<dyn CompletionProvider> = Arc::new(OpenAiCompletionProvider { ai });

    let app = routes::build_router(provider, &config.allowed_origins);

    let addr = format!("{}:{}", config.host, config.port);
    tracing::info!(model = %config.openai_model, "taskvoice server starting on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
