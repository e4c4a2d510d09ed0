//! Text-generation capability used by the transformation engine.

use crate::error::GenerationError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Sampling parameters for one generation call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationSettings {
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub max_tokens: u32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            temperature: 0.1,
            top_k: 40,
            top_p: 0.95,
            max_tokens: 4000,
        }
    }
}

impl GenerationSettings {
    pub fn request(&self, prompt: impl Into<String>) -> GenerationRequest {
        GenerationRequest {
            prompt: prompt.into(),
            temperature: self.temperature,
            top_k: self.top_k,
            top_p: self.top_p,
            max_tokens: self.max_tokens,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub prompt: String,
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub max_tokens: u32,
}

/// A model that turns a prompt into text.
///
/// The engine makes at most one call per transform and never retries, so
/// implementations should apply their own transport timeouts.
#[async_trait]
pub trait Generator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError>;

    /// Returns the name of the provider for logging
    fn provider_name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_low_temperature() {
        let request = GenerationSettings::default().request("hello");
        assert_eq!(request.prompt, "hello");
        assert!((request.temperature - 0.1).abs() < f32::EPSILON);
        assert_eq!(request.top_k, 40);
        assert_eq!(request.max_tokens, 4000);
    }

    #[test]
    fn test_partial_settings_fill_defaults() {
        let settings: GenerationSettings = serde_json::from_str(r#"{"max_tokens": 2048}"#).unwrap();
        assert_eq!(settings.max_tokens, 2048);
        assert_eq!(settings.top_k, 40);
    }
}
