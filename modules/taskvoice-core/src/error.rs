use thiserror::Error;

#[derive(Debug, Error)]
pub enum IntentError {
    #[error("Completion request failed: {0}")]
    Completion(String),

    #[error("Model output is not a valid intent: {message}")]
    Parse {
        message: String,
        /// The offending model output, kept for operator logs. Never echoed
        /// to HTTP callers.
        raw: String,
    },
}
