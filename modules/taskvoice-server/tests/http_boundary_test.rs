//! HTTP boundary tests: `build_router` driven through `tower::ServiceExt`
//! with stub completion providers, so no network or API key is involved.

use std::sync::Arc;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use tower::ServiceExt;

use taskvoice_core::CompletionProvider;
use taskvoice_server::routes::build_router;

struct CannedProvider {
    response: String,
}

#[async_trait]
impl CompletionProvider for CannedProvider {
    async fn complete(&self, _system_prompt: &str, _user_text: &str) -> Result<String> {
        Ok(self.response.clone())
    }
}

struct FailingProvider;

#[async_trait]
impl CompletionProvider for FailingProvider {
    async fn complete(&self, _system_prompt: &str, _user_text: &str) -> Result<String> {
        Err(anyhow!(
            "OpenAI API error (401): Incorrect API key provided: sk-test"
        ))
    }
}

fn parse_request(text: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/parse-intent")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::json!({ "text": text }).to_string(),
        ))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn parse_intent_returns_wrapped_intent() {
    let provider = Arc::new(CannedProvider {
        response: r#"{
            "operation": "delete",
            "target": {"mode": "by_index", "index": 2, "match_query": null},
            "data": {"title": null, "scheduledTime": null, "priority": null, "status": null}
        }"#
        .to_string(),
    });
    let app = build_router(provider, &[]);

    let response = app.oneshot(parse_request("delete task 2")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["intent"]["operation"], "delete");
    assert_eq!(body["intent"]["target"]["mode"], "by_index");
    assert_eq!(body["intent"]["target"]["index"], 2);
    assert!(body["intent"]["target"]["match_query"].is_null());
    // Defaulter ran: priority is never null in a returned intent.
    assert_eq!(body["intent"]["data"]["priority"], "low");
}

#[tokio::test]
async fn provider_failure_is_generic_500() {
    let app = build_router(Arc::new(FailingProvider), &[]);

    let response = app.oneshot(parse_request("delete task 2")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(response).await;
    assert_eq!(body["detail"], "LLM parsing failed");
    // No intent, and no upstream detail leaked.
    assert!(body.get("intent").is_none());
    assert!(!body.to_string().contains("API key"));
}

#[tokio::test]
async fn malformed_model_output_is_generic_500() {
    let provider = Arc::new(CannedProvider {
        response: "Sure! Here is the JSON: {operation: delete}".to_string(),
    });
    let app = build_router(provider, &[]);

    let response = app.oneshot(parse_request("delete task 2")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(response).await;
    assert_eq!(body["detail"], "LLM parsing failed");
    assert!(body.get("intent").is_none());
}

#[tokio::test]
async fn root_reports_liveness() {
    let provider = Arc::new(CannedProvider {
        response: String::new(),
    });
    let app = build_router(provider, &[]);

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn health_endpoint() {
    let provider = Arc::new(CannedProvider {
        response: String::new(),
    });
    let app = build_router(provider, &[]);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn cors_preflight_allowed_for_configured_origin() {
    let provider = Arc::new(CannedProvider {
        response: String::new(),
    });
    let origins = vec!["https://todo.example.com".to_string()];
    let app = build_router(provider, &origins);

    let response = app
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/parse-intent")
                .header("origin", "https://todo.example.com")
                .header("access-control-request-method", "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("https://todo.example.com")
    );
}
