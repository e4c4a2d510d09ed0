//! Gemini `generateContent` client.

use crate::error::GenerationError;
use crate::generator::{GenerationRequest, Generator};
use async_trait::async_trait;
use landkit_core::ConfigurationError;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
pub const MODEL_ENV: &str = "GEMINI_MODEL";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeminiSettings {
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: 60,
        }
    }
}

impl GeminiSettings {
    /// Overlay `GEMINI_API_KEY` and `GEMINI_MODEL` when they are set.
    pub fn with_env(mut self) -> Self {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            self.api_key = Some(key);
        }
        if let Ok(model) = std::env::var(MODEL_ENV) {
            if !model.trim().is_empty() {
                self.model = model;
            }
        }
        self
    }
}

#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    generation_config: GeminiGenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiGenerationConfig {
    temperature: f32,
    top_k: u32,
    top_p: f32,
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    error: Option<GeminiApiError>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContent>,
}

#[derive(Debug, Deserialize)]
struct GeminiApiError {
    #[serde(default)]
    code: Option<u16>,
    #[serde(default)]
    message: String,
}

impl GeminiClient {
    /// Build a client. Fails before any request when the key is missing.
    pub fn new(settings: GeminiSettings) -> Result<Self, ConfigurationError> {
        let api_key = settings
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ConfigurationError::MissingCredential(API_KEY_ENV.to_string()))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| ConfigurationError::Invalid(format!("http client: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            model: settings.model,
        })
    }

    pub fn from_env() -> Result<Self, ConfigurationError> {
        Self::new(GeminiSettings::default().with_env())
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

fn build_body(request: &GenerationRequest) -> GeminiRequest {
    GeminiRequest {
        contents: vec![GeminiContent {
            parts: vec![GeminiPart { text: Some(request.prompt.clone()) }],
        }],
        generation_config: GeminiGenerationConfig {
            temperature: request.temperature,
            top_k: request.top_k,
            top_p: request.top_p,
            max_output_tokens: request.max_tokens,
        },
    }
}

/// Concatenated text of every part of the first candidate.
fn extract_text(response: GeminiResponse) -> Result<String, GenerationError> {
    if let Some(error) = response.error {
        return Err(GenerationError::Api {
            status: error.code.unwrap_or(500),
            message: error.message,
        });
    }

    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or(GenerationError::NoCandidates)?;

    let text = candidate
        .content
        .map(|content| content.parts.into_iter().filter_map(|part| part.text).collect::<String>())
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(GenerationError::EmptyText);
    }
    Ok(text)
}

#[async_trait]
impl Generator for GeminiClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&build_body(request))
            .send()
            .await
            .map_err(|e| GenerationError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GenerationError::Api { status: status.as_u16(), message });
        }

        let body: GeminiResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::Transport(e.to_string()))?;
        extract_text(body)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::GenerationSettings;
    use serde_json::json;

    fn settings_with_key(key: &str) -> GeminiSettings {
        GeminiSettings { api_key: Some(key.to_string()), ..GeminiSettings::default() }
    }

    #[test]
    fn test_missing_key_is_configuration_error() {
        let err = GeminiClient::new(GeminiSettings::default()).unwrap_err();
        assert_eq!(err, ConfigurationError::MissingCredential("GEMINI_API_KEY".to_string()));

        let err = GeminiClient::new(settings_with_key("   ")).unwrap_err();
        assert!(matches!(err, ConfigurationError::MissingCredential(_)));
    }

    #[test]
    fn test_endpoint_uses_model() {
        let mut settings = settings_with_key("k");
        settings.base_url = "http://localhost:9000/v1beta/".to_string();
        let client = GeminiClient::new(settings).unwrap();
        assert_eq!(
            client.endpoint(),
            "http://localhost:9000/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }

    #[test]
    fn test_request_body_shape() {
        let request = GenerationSettings::default().request("prompt text");
        let body = serde_json::to_value(build_body(&request)).unwrap();
        assert_eq!(body["contents"][0]["parts"][0]["text"], "prompt text");
        assert_eq!(body["generationConfig"]["topK"], 40);
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 4000);
    }

    #[test]
    fn test_extract_text_from_candidate() {
        let response: GeminiResponse = serde_json::from_value(json!({
            "candidates": [{ "content": { "parts": [{ "text": "{\"a\":1}" }] }, "finishReason": "STOP" }]
        }))
        .unwrap();
        assert_eq!(extract_text(response).unwrap(), "{\"a\":1}");
    }

    #[test]
    fn test_extract_text_joins_all_parts() {
        let response: GeminiResponse = serde_json::from_value(json!({
            "candidates": [{ "content": { "parts": [
                { "text": "{\"business\":" },
                {},
                { "text": "{\"name\":\"Acme\"}}" }
            ] } }]
        }))
        .unwrap();
        assert_eq!(extract_text(response).unwrap(), "{\"business\":{\"name\":\"Acme\"}}");
    }

    #[test]
    fn test_extract_text_failures() {
        let api_error: GeminiResponse = serde_json::from_value(json!({
            "error": { "code": 429, "message": "quota exceeded" }
        }))
        .unwrap();
        assert_eq!(
            extract_text(api_error).unwrap_err(),
            GenerationError::Api { status: 429, message: "quota exceeded".to_string() }
        );

        let empty: GeminiResponse = serde_json::from_value(json!({ "candidates": [] })).unwrap();
        assert_eq!(extract_text(empty).unwrap_err(), GenerationError::NoCandidates);

        let blank: GeminiResponse = serde_json::from_value(json!({
            "candidates": [{ "content": { "parts": [] } }]
        }))
        .unwrap();
        assert_eq!(extract_text(blank).unwrap_err(), GenerationError::EmptyText);
    }
}
