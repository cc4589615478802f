use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use taskvoice_core::{parse_intent, CompletionProvider, IntentError};

#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn CompletionProvider>,
}

pub fn build_router(provider: Arc<dyn CompletionProvider>, allowed_origins: &[String]) -> Router {
    let cors = if allowed_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/parse-intent", post(api_parse_intent))
        .layer(cors)
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .with_state(AppState { provider })
}

async fn root() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "message": "taskvoice intent service running"
    }))
}

async fn health() -> &'static str {
    "ok"
}

#[derive(Deserialize)]
struct ParseRequest {
    text: String,
}

/// Parse raw text from the frontend into a structured intent the frontend
/// uses to perform CRUD on its task list.
async fn api_parse_intent(
    State(state): State<AppState>,
    Json(body): Json<ParseRequest>,
) -> impl IntoResponse {
    info!(text = %body.text.trim(), "Received parse request");

    match parse_intent(state.provider.as_ref(), &body.text).await {
        Ok(intent) => (StatusCode::OK, Json(serde_json::json!({ "intent": intent }))).into_response(),
        Err(e) => {
            // Full detail stays in the logs; callers get a generic message.
            match &e {
                IntentError::Parse { raw, message } => {
                    warn!(error = %message, raw = %raw, "Model output failed intent parsing");
                }
                IntentError::Completion(detail) => {
                    warn!(error = %detail, "Completion call failed");
                }
            }
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({"detail": "LLM parsing failed"})),
            )
                .into_response()
        }
    }
}
