//! LLM Provider Trait

use super::errors::Result;
use super::types::{ChatRequest, ChatResponse};
use async_trait::async_trait;

/// A chat-completion backend.
#[async_trait]
pub trait LLMProvider: Send + Sync {
    /// Stable identifier, e.g. `"openai"`.
    fn id(&self) -> &str;

    /// Human readable provider name.
    fn name(&self) -> &str;

    /// Model the provider sends requests to.
    fn model(&self) -> &str;

    /// Send a single, non-streaming chat request.
    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse>;
}
