//! LLM Error Types
//!
//! Two layers of failure live here: `LLMError` covers talking to the provider
//! (credentials, transport, HTTP status, response envelope) and
//! `GenerationError` covers turning the returned text into a JSON object.

use thiserror::Error;

/// Maximum number of characters of offending model output kept in an error.
pub const PREVIEW_LIMIT: usize = 400;

// ============================================================================
// Provider Errors
// ============================================================================

/// Errors raised while constructing or calling a provider.
#[derive(Error, Debug)]
pub enum LLMError {
    /// The credential variable is unset or empty.
    #[error("{env_var} not found. Set it in the environment or disable the LLM with --no-llm")]
    MissingApiKey { env_var: String },

    /// The HTTP client could not be built.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    /// Network or protocol failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider answered with a non-success status.
    #[error("API error ({status}): {message}")]
    ApiError { status: u16, message: String },

    /// Response body did not match any known envelope.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl LLMError {
    pub fn missing_api_key(env_var: impl Into<String>) -> Self {
        Self::MissingApiKey {
            env_var: env_var.into(),
        }
    }

    /// Configuration problems are detected before any request is sent.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::MissingApiKey { .. } | Self::ClientBuild(_))
    }
}

pub type Result<T> = std::result::Result<T, LLMError>;

// ============================================================================
// Structured Output Errors
// ============================================================================

/// Errors raised while coercing model output into a JSON object.
#[derive(Error, Debug)]
pub enum GenerationError {
    /// The provider call itself failed.
    #[error(transparent)]
    Provider(LLMError),

    /// The provider answered, but no text could be found in the envelope.
    #[error("Unexpected LLM response shape: {0}")]
    Envelope(String),

    /// Neither the full text nor the outermost `{...}` span parsed as JSON.
    #[error("LLM returned invalid JSON: {preview}...")]
    InvalidJson { preview: String },

    /// Parsed JSON was valid but not an object.
    #[error("LLM returned non-object JSON ({found})")]
    NotAnObject { found: &'static str },
}

impl From<LLMError> for GenerationError {
    fn from(err: LLMError) -> Self {
        match err {
            LLMError::InvalidResponse(shape) => Self::Envelope(shape),
            other => Self::Provider(other),
        }
    }
}

impl GenerationError {
    /// Build an `InvalidJson` error keeping at most `PREVIEW_LIMIT` characters.
    pub fn invalid_json(raw: &str) -> Self {
        Self::InvalidJson {
            preview: raw.chars().take(PREVIEW_LIMIT).collect(),
        }
    }

    pub fn not_an_object(value: &serde_json::Value) -> Self {
        let found = match value {
            serde_json::Value::Null => "null",
            serde_json::Value::Bool(_) => "boolean",
            serde_json::Value::Number(_) => "number",
            serde_json::Value::String(_) => "string",
            serde_json::Value::Array(_) => "array",
            serde_json::Value::Object(_) => "object",
        };
        Self::NotAnObject { found }
    }
}
