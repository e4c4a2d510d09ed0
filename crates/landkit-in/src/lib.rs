//! Landkit-IN: campaign input to internal schema
//!
//! The engine asks a [`Generator`] for the schema once. When the call fails,
//! the text is not JSON, or the JSON does not validate, it synthesizes a
//! schema from the campaign instead. `transform` therefore never fails.
//!
//! # Example
//!
//! ```ignore
//! use landkit_in::{GeminiClient, GenerationSettings, TransformEngine};
//! use std::sync::Arc;
//!
//! let generator = Arc::new(GeminiClient::from_env()?);
//! let engine = TransformEngine::new(generator, GenerationSettings::default());
//! let schema = engine.transform(&campaign).await;
//! ```

pub mod error;
pub mod fallback;
pub mod gemini;
pub mod generator;
pub mod prompt;
pub mod response;

pub use error::{GenerationError, TransformationFailure};
pub use gemini::{GeminiClient, GeminiSettings};
pub use generator::{GenerationRequest, GenerationSettings, Generator};

use landkit_core::{CampaignInput, InternalSchema};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Which path produced a schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SchemaSource {
    Generated,
    Fallback { reason: String },
}

impl SchemaSource {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransformOutcome {
    pub schema: InternalSchema,
    pub source: SchemaSource,
}

/// Campaign to internal-schema transformer. Holds no mutable state, so one
/// engine serves concurrent requests.
#[derive(Clone)]
pub struct TransformEngine {
    generator: Arc<dyn Generator>,
    settings: GenerationSettings,
}

impl TransformEngine {
    pub fn new(generator: Arc<dyn Generator>, settings: GenerationSettings) -> Self {
        Self { generator, settings }
    }

    pub fn settings(&self) -> &GenerationSettings {
        &self.settings
    }

    pub fn provider_name(&self) -> &'static str {
        self.generator.provider_name()
    }

    pub async fn transform(&self, campaign: &CampaignInput) -> InternalSchema {
        self.transform_detailed(campaign).await.schema
    }

    pub async fn transform_detailed(&self, campaign: &CampaignInput) -> TransformOutcome {
        info!(
            provider = self.generator.provider_name(),
            campaign = campaign.name.as_deref().unwrap_or(""),
            "transforming campaign"
        );

        match self.generate_schema(campaign).await {
            Ok(schema) => {
                info!(business = %schema.business.name, "generated schema accepted");
                TransformOutcome { schema, source: SchemaSource::Generated }
            }
            Err(failure) => {
                warn!(
                    provider = self.generator.provider_name(),
                    error = %failure,
                    "generation rejected, synthesizing fallback schema"
                );
                TransformOutcome {
                    schema: fallback::synthesize(campaign),
                    source: SchemaSource::Fallback { reason: failure.to_string() },
                }
            }
        }
    }

    async fn generate_schema(
        &self,
        campaign: &CampaignInput,
    ) -> Result<InternalSchema, TransformationFailure> {
        let prompt = prompt::build_prompt(campaign);
        debug!(prompt_bytes = prompt.len(), "built transformation prompt");

        let request = self.settings.request(prompt);
        let text = self.generator.generate(&request).await?;
        debug!(response_bytes = text.len(), "generator responded");

        response::parse_schema(&text)
    }
}
