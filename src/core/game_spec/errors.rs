//! Spec Generation Error Types
//!
//! The complete set of failures the LLM path can produce. The generator
//! catches exactly this type and substitutes the heuristic parser; anything
//! outside it is not swallowed.

use thiserror::Error;

use super::model::ValidationError;
use crate::core::llm::{GenerationError, LLMError};

/// Recoverable failure on the LLM path of spec generation.
#[derive(Error, Debug)]
pub enum SpecGenerationError {
    /// Missing credential or unusable client settings.
    #[error("Configuration error: {0}")]
    Configuration(LLMError),

    /// Network failure or non-success HTTP status.
    #[error("Transport error: {0}")]
    Transport(LLMError),

    /// Unparseable or wrongly shaped service response.
    #[error("Generation error: {0}")]
    Generation(GenerationError),

    /// Service response does not satisfy the spec schema.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl SpecGenerationError {
    /// Short label used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "configuration",
            Self::Transport(_) => "transport",
            Self::Generation(_) => "generation",
            Self::Validation(_) => "validation",
        }
    }
}

impl From<LLMError> for SpecGenerationError {
    fn from(err: LLMError) -> Self {
        match err {
            e if e.is_configuration() => Self::Configuration(e),
            LLMError::InvalidResponse(shape) => {
                Self::Generation(GenerationError::Envelope(shape))
            }
            e => Self::Transport(e),
        }
    }
}

impl From<GenerationError> for SpecGenerationError {
    fn from(err: GenerationError) -> Self {
        match err {
            GenerationError::Provider(e) => e.into(),
            other => Self::Generation(other),
        }
    }
}
