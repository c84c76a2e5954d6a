//! Game Specification Model
//!
//! The fixed-schema record every idea is reduced to, plus the validation that
//! turns an untrusted JSON object into one.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

// ============================================================================
// Enums
// ============================================================================

/// Dimensionality of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameType {
    #[serde(rename = "2D")]
    TwoD,
    #[serde(rename = "3D")]
    ThreeD,
}

impl GameType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameType::TwoD => "2D",
            GameType::ThreeD => "3D",
        }
    }
}

impl std::fmt::Display for GameType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Engines the tool knows about. `GameSpec::engine` stays free text; this
/// enum is what the heuristic parser picks from and what strict validation
/// checks against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Engine {
    #[default]
    Unity,
    Unreal,
    Godot,
}

impl Engine {
    pub const ALL: [Engine; 3] = [Engine::Unity, Engine::Unreal, Engine::Godot];

    pub fn as_str(&self) -> &'static str {
        match self {
            Engine::Unity => "unity",
            Engine::Unreal => "unreal",
            Engine::Godot => "godot",
        }
    }

    /// Case-insensitive lookup.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|e| e.as_str().eq_ignore_ascii_case(name))
    }
}

// ============================================================================
// Validation Errors
// ============================================================================

/// A JSON object failed to validate as a `GameSpec`.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Missing field or wrong field type.
    #[error("Spec does not match schema: {0}")]
    Schema(#[from] serde_json::Error),

    /// Required text field is blank.
    #[error("Spec field '{field}' must not be empty")]
    EmptyField { field: &'static str },

    /// Engine outside the known set (strict mode only).
    #[error("Unknown engine '{engine}' (expected unity, unreal or godot)")]
    UnknownEngine { engine: String },
}

// ============================================================================
// GameSpec
// ============================================================================

/// Validated description of a game idea.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSpec {
    /// Working title
    pub title: String,
    pub game_type: GameType,
    pub genre: String,
    /// Full description; may be empty
    pub description: String,
    #[serde(default)]
    pub key_features: Vec<String>,
    /// "unity", "unreal" or "godot" by convention, not enforced unless strict
    pub engine: String,
    #[serde(default)]
    pub art_style: Option<String>,
    #[serde(default)]
    pub audio_style: Option<String>,
}

impl GameSpec {
    /// Validate an untrusted JSON object.
    ///
    /// Unknown keys are ignored. With `strict` set the engine must be one of
    /// `Engine::ALL`.
    pub fn from_mapping(map: Map<String, Value>, strict: bool) -> Result<Self, ValidationError> {
        let spec: GameSpec = serde_json::from_value(Value::Object(map))?;
        spec.validate(strict)?;
        Ok(spec)
    }

    pub fn validate(&self, strict: bool) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyField { field: "title" });
        }
        if self.genre.trim().is_empty() {
            return Err(ValidationError::EmptyField { field: "genre" });
        }
        if strict && Engine::from_name(&self.engine).is_none() {
            return Err(ValidationError::UnknownEngine {
                engine: self.engine.clone(),
            });
        }
        Ok(())
    }

    /// Plain mapping form handed to the scaffold builders.
    pub fn to_mapping(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            // A struct of strings always serializes to an object.
            _ => Map::new(),
        }
    }
}
