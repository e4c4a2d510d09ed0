//! Server configuration: optional YAML file, then environment overrides.

use landkit_core::ConfigurationError;
use landkit_in::{GeminiSettings, GenerationSettings};
use landkit_out::{RenderError, SiteRenderer};
use serde::{Deserialize, Serialize};

pub const CONFIG_ENV: &str = "LANDKIT_CONFIG";
pub const ADDR_ENV: &str = "LANDKIT_ADDR";
pub const DEFAULT_ADDR: &str = "0.0.0.0:8787";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub listen_addr: String,
    pub generation: GenerationSettings,
    pub gemini: GeminiSettings,
    /// Path to a templates YAML file; the built-in set when unset
    pub template: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_ADDR.to_string(),
            generation: GenerationSettings::default(),
            gemini: GeminiSettings::default(),
            template: None,
        }
    }
}

impl AppConfig {
    /// Read `LANDKIT_CONFIG` if set, then apply environment overrides.
    pub fn load() -> Result<Self, ConfigurationError> {
        let base = match std::env::var(CONFIG_ENV) {
            Ok(path) if !path.trim().is_empty() => Self::from_file(&path)?,
            _ => Self::default(),
        };
        Ok(base.with_env())
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigurationError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigurationError::Unreadable {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigurationError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigurationError::Invalid(format!("config: {}", e)))
    }

    fn with_env(mut self) -> Self {
        if let Ok(addr) = std::env::var(ADDR_ENV) {
            if !addr.trim().is_empty() {
                self.listen_addr = addr;
            }
        }
        self.gemini = self.gemini.with_env();
        self
    }

    pub fn renderer(&self) -> Result<SiteRenderer, RenderError> {
        match &self.template {
            Some(path) => SiteRenderer::load(path),
            None => SiteRenderer::springleaf(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.listen_addr, "0.0.0.0:8787");
        assert_eq!(config.generation.max_tokens, 4000);
        assert!(config.template.is_none());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = AppConfig::from_yaml(
            r#"
listen_addr: "127.0.0.1:9000"
generation:
  temperature: 0.3
gemini:
  model: gemini-1.5-pro
"#,
        )
        .unwrap();
        assert_eq!(config.listen_addr, "127.0.0.1:9000");
        assert_eq!(config.generation.temperature, 0.3);
        assert_eq!(config.generation.top_k, 40);
        assert_eq!(config.gemini.model, "gemini-1.5-pro");
        assert_eq!(config.gemini.timeout_secs, 60);
    }

    #[test]
    fn test_invalid_yaml() {
        let err = AppConfig::from_yaml("listen_addr: [1, 2").unwrap_err();
        assert!(err.to_string().starts_with("CONFIG/"));
    }

    #[test]
    fn test_unreadable_file() {
        let err = AppConfig::from_file("/nonexistent/landkit.yaml").unwrap_err();
        assert!(matches!(err, ConfigurationError::Unreadable { .. }));
    }

    #[test]
    fn test_builtin_renderer() {
        let renderer = AppConfig::default().renderer().unwrap();
        assert_eq!(renderer.template_set(), "springleaf");
    }
}
