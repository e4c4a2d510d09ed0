//! HTTP-level tests against the router with a stub generator.

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use landkit_api::{create_app, AppState};
use landkit_in::{GenerationError, GenerationRequest, GenerationSettings, Generator, TransformEngine};
use landkit_out::SiteRenderer;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

struct Stub(Result<String, GenerationError>);

#[async_trait]
impl Generator for Stub {
    async fn generate(&self, _request: &GenerationRequest) -> Result<String, GenerationError> {
        self.0.clone()
    }

    fn provider_name(&self) -> &'static str {
        "stub"
    }
}

fn app(reply: Result<String, GenerationError>) -> Router {
    create_app(AppState {
        engine: TransformEngine::new(Arc::new(Stub(reply)), GenerationSettings::default()),
        renderer: SiteRenderer::springleaf().unwrap(),
    })
}

fn offline_app() -> Router {
    app(Err(GenerationError::Transport("offline".to_string())))
}

async fn post(app: Router, uri: &str, body: Value) -> (StatusCode, String) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let (status, text) = post(app, uri, body).await;
    (status, serde_json::from_str(&text).unwrap())
}

fn campaign() -> Value {
    json!({
        "campaign": {
            "name": "Spring Launch",
            "details": {
                "business_details": {
                    "business_name": "Acme Homes",
                    "product_or_service_description": "Homes by the river"
                },
                "ad_copies": [{
                    "headline": "Riverside Living Starts Here",
                    "primary_text": "Homes by the river"
                }]
            }
        }
    })
}

fn schema() -> Value {
    json!({
        "business": { "name": "Acme Homes" },
        "contact": { "email": "hello@acme.example.com" },
        "hero": { "title": "Riverside Living Starts Here" }
    })
}

#[tokio::test]
async fn test_health() {
    let request = Request::builder().uri("/v1/health").body(Body::empty()).unwrap();
    let response = offline_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["provider"], "stub");
}

#[tokio::test]
async fn test_transform_falls_back_when_generator_fails() {
    let (status, body) = post_json(offline_app(), "/v1/transform", json!({ "campaignData": campaign() })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["source"]["kind"], "fallback");
    assert_eq!(body["data"]["business"]["name"], "Acme Homes");
    assert_eq!(body["data"]["contact"]["email"], "");
    assert_eq!(body["metadata"]["template"], "springleaf");
    assert!(body["findings"].as_array().unwrap().iter().any(|f| f["field"] == "contact.email"));
}

#[tokio::test]
async fn test_transform_uses_generated_schema() {
    let reply = format!("```json\n{}\n```", schema());
    let (status, body) = post_json(app(Ok(reply)), "/v1/transform", json!({ "campaignData": campaign() })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"]["kind"], "generated");
    assert_eq!(body["data"]["contact"]["email"], "hello@acme.example.com");
    assert_eq!(body["metadata"]["campaignName"], "Acme Homes");
}

#[tokio::test]
async fn test_transform_requires_campaign_data() {
    let (status, body) = post_json(offline_app(), "/v1/transform", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "campaignData is required");
}

#[tokio::test]
async fn test_transform_rejects_invalid_campaign() {
    let bad = json!({ "campaign": { "details": { "business_details": { "business_name": 42 } } } });
    let (status, body) = post_json(offline_app(), "/v1/transform", json!({ "campaignData": bad })).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let paths: Vec<&str> = body["validationErrors"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|issue| issue["path"].as_str())
        .collect();
    assert!(paths.contains(&"campaign.details.business_details.business_name"));
}

#[tokio::test]
async fn test_malformed_body_returns_json_error() {
    let request = Request::builder()
        .method("POST")
        .uri("/v1/transform")
        .header("content-type", "application/json")
        .body(Body::from("{\"campaignData\": "))
        .unwrap();
    let response = offline_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], "Invalid request body");
    assert!(body["details"].is_string());
}

#[tokio::test]
async fn test_missing_content_type_returns_json_error() {
    let request = Request::builder()
        .method("POST")
        .uri("/v1/audit")
        .body(Body::from(json!({ "internalSchemaData": schema() }).to_string()))
        .unwrap();
    let response = offline_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], "Invalid request body");
}

#[tokio::test]
async fn test_audit_returns_summary() {
    let (status, body) = post_json(offline_app(), "/v1/audit", json!({ "internalSchemaData": schema() })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["summary"]["missing"], 7);
    assert_eq!(body["summary"]["headline"], "Found 7 missing fields.");
}

#[tokio::test]
async fn test_invalid_schema_lists_validation_errors() {
    let bad = json!({ "business": {}, "contact": {}, "hero": { "title": "" } });
    let (status, body) = post_json(offline_app(), "/v1/view-model", json!({ "internalSchemaData": bad })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid internal schema data");
    let first = &body["validationErrors"][0];
    assert_eq!(first["path"], "business.name");
    assert!(first["code"].is_string());
}

#[tokio::test]
async fn test_view_model_defaults_navigation() {
    let (_, body) = post_json(offline_app(), "/v1/view-model", json!({ "internalSchemaData": schema() })).await;
    assert_eq!(body["data"]["header"]["navigation"].as_array().unwrap().len(), 7);
}

#[tokio::test]
async fn test_preview_renders_html() {
    let (status, html) = post(offline_app(), "/v1/preview", json!({ "internalSchemaData": schema() })).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<title>Acme Homes</title>"));
}

#[tokio::test]
async fn test_generate_bundle() {
    let (status, body) = post_json(offline_app(), "/v1/generate", json!({ "internalSchemaData": schema() })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["slug"], "acme-homes");
    assert!(body["data"]["files"]["index.html"].is_string());
    assert!(body["data"]["files"]["README.md"].is_string());
}
