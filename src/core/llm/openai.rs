//! OpenAI-compatible Provider Implementation
//!
//! Talks to any endpoint exposing `POST {base_url}/chat/completions` with
//! bearer authentication.

use super::errors::{LLMError, Result};
use super::provider::LLMProvider;
use super::types::{ChatRequest, ChatResponse, TokenUsage};
use crate::config::LlmConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// OpenAI chat-completions provider
pub struct OpenAIProvider {
    api_key: String,
    model: String,
    max_tokens: u32,
    base_url: String,
    client: Client,
}

impl std::fmt::Debug for OpenAIProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAIProvider")
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl OpenAIProvider {
    pub fn new(
        api_key: String,
        model: String,
        max_tokens: u32,
        base_url: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| LLMError::ClientBuild(e.to_string()))?;

        Ok(Self {
            api_key,
            model,
            max_tokens,
            base_url: base_url
                .unwrap_or_else(|| OPENAI_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            client,
        })
    }

    /// Build a provider from configuration, reading the API key from the
    /// environment variable named by `config.api_key_env`.
    pub fn from_config(config: &LlmConfig) -> Result<Self> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| LLMError::missing_api_key(&config.api_key_env))?;

        Self::new(
            api_key,
            config.model.clone(),
            config.max_tokens,
            Some(config.base_url.clone()),
            config.timeout_secs.map(Duration::from_secs),
        )
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    fn build_body(&self, request: &ChatRequest) -> Value {
        let mut body = serde_json::json!({
            "model": self.model,
            "messages": request.wire_messages(),
            "max_tokens": request.max_tokens.unwrap_or(self.max_tokens),
        });

        if let Some(temp) = request.temperature {
            body["temperature"] = serde_json::json!(temp);
        }

        body
    }
}

/// Pull the generated text out of a response body.
///
/// Accepts the chat envelope (`choices[0].message.content`), the legacy
/// completions envelope (`choices[0].text`) and a flat `output_text` field.
pub fn extract_content(json: &Value) -> Option<&str> {
    let choice = &json["choices"][0];
    choice["message"]["content"]
        .as_str()
        .or_else(|| choice["text"].as_str())
        .or_else(|| json["output_text"].as_str())
}

/// Token counts from the `usage` object, if the provider sent one.
fn parse_usage(json: &Value) -> Option<TokenUsage> {
    let usage = json["usage"].as_object()?;
    let count = |key: &str| usage.get(key).and_then(Value::as_u64).unwrap_or(0);
    Some(TokenUsage::from_counts(
        count("prompt_tokens"),
        count("completion_tokens"),
    ))
}

#[async_trait]
impl LLMProvider for OpenAIProvider {
    fn id(&self) -> &str {
        "openai"
    }

    fn name(&self) -> &str {
        "OpenAI"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse> {
        let body = self.build_body(&request);

        let start = std::time::Instant::now();
        let resp = self
            .client
            .post(self.completions_url())
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        let latency = start.elapsed().as_millis() as u64;

        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(LLMError::ApiError {
                status: status.as_u16(),
                message: text,
            });
        }

        let json: Value = resp.json().await?;

        let content = extract_content(&json)
            .ok_or_else(|| {
                let shape: String = json.to_string().chars().take(200).collect();
                LLMError::InvalidResponse(format!("Unexpected response shape: {shape}"))
            })?
            .to_string();

        let usage = parse_usage(&json);

        log::debug!(
            "openai chat completed in {}ms ({} tokens)",
            latency,
            usage.as_ref().map(TokenUsage::total).unwrap_or(0)
        );

        Ok(ChatResponse {
            content,
            model: json["model"].as_str().unwrap_or(self.model.as_str()).to_string(),
            provider: "openai".to_string(),
            usage,
            finish_reason: json["choices"][0]["finish_reason"]
                .as_str()
                .map(|s| s.to_string()),
            latency_ms: latency,
        })
    }
}
