//! Spec Generator
//!
//! Turns a free-text idea into a `GameSpec`. With the LLM enabled it asks the
//! provider for a JSON spec and validates it; on any `SpecGenerationError` it
//! falls back to the keyword heuristics. The result is always a complete spec.

use std::sync::Arc;

use super::errors::SpecGenerationError;
use super::heuristic;
use super::model::GameSpec;
use super::prompt::build_prompt;
use crate::config::LlmConfig;
use crate::core::llm::{LLMProvider, OpenAIProvider, StructuredClient};

/// Where a spec came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecSource {
    Llm,
    Heuristic,
}

/// Produces specs from ideas, one request at a time.
pub struct SpecGenerator {
    config: LlmConfig,
    provider: Option<Arc<dyn LLMProvider>>,
}

impl SpecGenerator {
    /// The provider is built from `config` lazily, only when the LLM path runs.
    pub fn new(config: LlmConfig) -> Self {
        Self {
            config,
            provider: None,
        }
    }

    /// Use `provider` instead of building one from configuration.
    pub fn with_provider(mut self, provider: Arc<dyn LLMProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    fn client(&self) -> Result<StructuredClient, SpecGenerationError> {
        let provider: Arc<dyn LLMProvider> = match &self.provider {
            Some(provider) => Arc::clone(provider),
            None => Arc::new(OpenAIProvider::from_config(&self.config)?),
        };

        Ok(StructuredClient::new(provider)
            .with_temperature(self.config.temperature)
            .with_max_tokens(self.config.max_tokens))
    }

    /// LLM path only; every failure is returned to the caller.
    pub async fn generate_with_llm(&self, idea: &str) -> Result<GameSpec, SpecGenerationError> {
        let client = self.client()?;
        let prompt = build_prompt(idea);
        let raw = client.generate_json(&prompt).await?;
        Ok(GameSpec::from_mapping(raw, self.config.strict_enums)?)
    }

    /// Generate a spec and report which path produced it.
    pub async fn generate_with_source(&self, idea: &str, use_llm: bool) -> (GameSpec, SpecSource) {
        if !use_llm {
            log::info!("LLM disabled, using heuristic parser");
            return (heuristic::parse(idea), SpecSource::Heuristic);
        }

        match self.generate_with_llm(idea).await {
            Ok(spec) => {
                log::info!("spec generated by LLM: {:?} ({})", spec.title, spec.game_type);
                (spec, SpecSource::Llm)
            }
            Err(e) => {
                tracing::warn!(
                    kind = e.kind(),
                    error = %e,
                    "LLM path failed, falling back to heuristics"
                );
                (heuristic::parse(idea), SpecSource::Heuristic)
            }
        }
    }

    /// Generate a spec. Never fails.
    pub async fn generate(&self, idea: &str, use_llm: bool) -> GameSpec {
        self.generate_with_source(idea, use_llm).await.0
    }
}
