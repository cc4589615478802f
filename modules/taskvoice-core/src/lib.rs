pub mod config;
pub mod error;
pub mod intent;
pub mod parse;
pub mod prompt;
pub mod provider;

pub use config::AppConfig;
pub use error::IntentError;
pub use intent::{Intent, IntentData, Operation, Priority, Status, Target, TargetMode};
pub use parse::parse_intent;
pub use provider::CompletionProvider;
