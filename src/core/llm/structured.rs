//! Structured JSON generation
//!
//! Wraps a provider with a JSON-only system prompt and coerces whatever text
//! comes back into a JSON object: code fences are stripped, and when strict
//! parsing fails the outermost `{...}` span is tried before giving up.

use super::errors::GenerationError;
use super::provider::LLMProvider;
use super::types::{ChatMessage, ChatRequest};
use serde_json::{Map, Value};
use std::sync::Arc;

pub const JSON_ONLY_SYSTEM_PROMPT: &str = "You are a JSON-only generator. Respond ONLY with valid JSON. \
Do not include any explanatory text, markdown, or surrounding backticks.";

pub const DEFAULT_TEMPERATURE: f32 = 0.2;
pub const DEFAULT_MAX_TOKENS: u32 = 800;

const FENCE: &str = "```";

/// Client that asks a provider for a JSON object and returns it parsed.
#[derive(Clone)]
pub struct StructuredClient {
    provider: Arc<dyn LLMProvider>,
    temperature: f32,
    max_tokens: u32,
}

impl StructuredClient {
    pub fn new(provider: Arc<dyn LLMProvider>) -> Self {
        Self {
            provider,
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Send `prompt` and return the response as a JSON object.
    pub async fn generate_json(&self, prompt: &str) -> Result<Map<String, Value>, GenerationError> {
        let request = ChatRequest::new(vec![ChatMessage::user(prompt)])
            .with_system(JSON_ONLY_SYSTEM_PROMPT)
            .with_temperature(self.temperature)
            .with_max_tokens(self.max_tokens);

        log::debug!(
            "requesting structured output from {} ({})",
            self.provider.name(),
            self.provider.model()
        );

        let response = self.provider.chat(request).await?;
        parse_json_object(&response.content)
    }
}

/// Remove a surrounding triple-backtick fence, if the whole trimmed text is
/// wrapped in one. The opening line (with any language tag) and the closing
/// line are dropped.
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    if trimmed.len() < FENCE.len() * 2 || !trimmed.starts_with(FENCE) || !trimmed.ends_with(FENCE) {
        return trimmed;
    }

    match (trimmed.find('\n'), trimmed.rfind('\n')) {
        (Some(first), Some(last)) if first < last => trimmed[first + 1..last].trim(),
        _ => trimmed[FENCE.len()..trimmed.len() - FENCE.len()].trim(),
    }
}

/// Parse model output into a JSON object.
pub fn parse_json_object(content: &str) -> Result<Map<String, Value>, GenerationError> {
    let raw = strip_code_fence(content);

    let value = match serde_json::from_str::<Value>(raw) {
        Ok(value) => value,
        Err(e) => {
            log::debug!("strict JSON parse failed ({e}), salvaging outermost object");
            salvage_object(raw).ok_or_else(|| GenerationError::invalid_json(raw))?
        }
    };

    match value {
        Value::Object(map) => Ok(map),
        other => Err(GenerationError::not_an_object(&other)),
    }
}

fn salvage_object(raw: &str) -> Option<Value> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end <= start {
        return None;
    }
    serde_json::from_str(&raw[start..=end]).ok()
}
