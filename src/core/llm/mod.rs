//! LLM Client Module
//!
//! Provides the pieces needed to ask a text-generation service for a
//! structured JSON answer:
//!
//! - `types`: chat messages, requests and responses
//! - `provider`: the `LLMProvider` trait
//! - `openai`: OpenAI-compatible chat-completions provider
//! - `structured`: JSON-only prompting, fence stripping and salvage parsing
//! - `errors`: `LLMError` and `GenerationError`

pub mod errors;
pub mod openai;
pub mod provider;
pub mod structured;
pub mod types;

pub use errors::{GenerationError, LLMError, Result};
pub use openai::OpenAIProvider;
pub use provider::LLMProvider;
pub use structured::{parse_json_object, strip_code_fence, StructuredClient};
pub use types::{ChatMessage, ChatRequest, ChatResponse, MessageRole, TokenUsage};
