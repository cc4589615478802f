use chrono::Utc;
use tracing::debug;

use ai_client::strip_code_blocks;

use crate::error::IntentError;
use crate::intent::{Intent, Priority};
use crate::prompt::build_system_prompt;
use crate::provider::CompletionProvider;

/// Parse a free-form task command into a structured [`Intent`].
///
/// Builds the dated system prompt, forwards it with the trimmed user text to
/// the completion provider, and validates the response. Either a fully formed
/// Intent comes back or an error does; no fallback intent is ever fabricated.
pub async fn parse_intent(
    provider: &dyn CompletionProvider,
    text: &str,
) -> Result<Intent, IntentError> {
    let user_text = text.trim();
    let system_prompt = build_system_prompt(Utc::now().date_naive());

    let raw = provider
        .complete(&system_prompt, user_text)
        .await
        .map_err(|e| IntentError::Completion(e.to_string()))?;

    debug!(raw = %raw, "Raw model output");

    validate_intent(&raw)
}

/// Parse raw completion text as an Intent and apply defaults.
///
/// `priority` is filled with `low` when the model omits or nulls it — client
/// code depends on it never being null in a returned Intent.
pub fn validate_intent(raw: &str) -> Result<Intent, IntentError> {
    let mut intent: Intent =
        serde_json::from_str(strip_code_blocks(raw)).map_err(|e| IntentError::Parse {
            message: e.to_string(),
            raw: raw.to_string(),
        })?;

    intent.data.priority.get_or_insert(Priority::Low);

    Ok(intent)
}
