//! Application Configuration
//!
//! Layered with figment, lowest precedence first:
//! compiled defaults, an optional TOML file, then `GAMESHAPER_*` environment
//! variables (nested keys separated by `__`, e.g. `GAMESHAPER_LLM__MODEL`).

use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::core::llm::openai::OPENAI_BASE_URL;
use crate::core::llm::structured::{DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "gameshaper.toml";

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "GAMESHAPER_";

// ============================================================================
// Configuration Types
// ============================================================================

/// Settings for the text-generation service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Name of the environment variable holding the API key
    pub api_key_env: String,
    /// Base URL of the OpenAI-compatible endpoint
    pub base_url: String,
    /// Model identifier
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    /// Request timeout; `None` keeps the HTTP client default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    /// Reject engines other than unity, unreal and godot
    pub strict_enums: bool,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key_env: "OPENAI_API_KEY".to_string(),
            base_url: OPENAI_BASE_URL.to_string(),
            model: "gpt-4o-mini".to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout_secs: None,
            strict_enums: false,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory scaffolds are written to; a relative path is resolved
    /// against the working directory, not the executable's location
    pub output_dir: PathBuf,
    pub llm: LlmConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("outputs"),
            llm: LlmConfig::default(),
        }
    }
}

impl AppConfig {
    /// Build the figment for `config_file`, or `gameshaper.toml` when `None`.
    ///
    /// A missing file is not an error; a malformed one is reported on extract.
    pub fn figment(config_file: Option<&Path>) -> Figment {
        let file = config_file
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file(file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load the layered configuration.
    pub fn load(config_file: Option<&Path>) -> Result<Self, figment::Error> {
        let config: AppConfig = Self::figment(config_file).extract()?;
        log::debug!("configuration loaded: {:?}", config);
        Ok(config)
    }
}
