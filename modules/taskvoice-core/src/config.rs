use anyhow::Result;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    // Server
    pub host: String,
    pub port: u16,

    // AI / LLM
    pub openai_api_key: String,
    pub openai_model: String,

    // CORS
    pub allowed_origins: Vec<String>,
}

impl AppConfig {
    /// Load configuration from the environment (and `.env` if present).
    ///
    /// A missing `OPENAI_API_KEY` is a fatal startup error — the process must
    /// not come up able to accept requests it cannot serve.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()?,
            openai_api_key: std::env::var("OPENAI_API_KEY")?,
            openai_model: std::env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            allowed_origins: parse_allowed_origins(
                &std::env::var("ALLOWED_ORIGINS").unwrap_or_default(),
            ),
        })
    }
}

/// Parse a comma-separated origin list. An empty or whitespace-only value
/// yields an empty list, which the router treats as wildcard CORS.
fn parse_allowed_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}
