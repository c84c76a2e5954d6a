//! Keyword heuristics
//!
//! Offline parser used when the LLM is disabled or unusable. Total and
//! deterministic: every input yields a valid `GameSpec`.

use super::model::{Engine, GameSpec, GameType};

pub const PLACEHOLDER_TITLE: &str = "Untitled Game";

/// Genre rules in priority order; the first rule with a matching keyword wins.
const GENRE_RULES: &[(&[&str], &str)] = &[
    (&["shooter"], "shooter"),
    (&["rpg", "role"], "rpg"),
    (&["platform"], "platformer"),
];

const DEFAULT_GENRE: &str = "adventure";

/// Build a spec from free text using case-insensitive keyword matching.
pub fn parse(text: &str) -> GameSpec {
    let lowered = text.to_lowercase();

    GameSpec {
        title: PLACEHOLDER_TITLE.to_string(),
        game_type: detect_game_type(&lowered),
        genre: detect_genre(&lowered).to_string(),
        description: text.trim().to_string(),
        key_features: Vec::new(),
        engine: detect_engine(&lowered).as_str().to_string(),
        art_style: None,
        audio_style: None,
    }
}

fn detect_game_type(lowered: &str) -> GameType {
    if lowered.contains("3d") {
        GameType::ThreeD
    } else {
        GameType::TwoD
    }
}

fn detect_engine(lowered: &str) -> Engine {
    if lowered.contains("unreal") {
        Engine::Unreal
    } else if lowered.contains("godot") {
        Engine::Godot
    } else {
        Engine::default()
    }
}

fn detect_genre(lowered: &str) -> &'static str {
    GENRE_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lowered.contains(k)))
        .map(|(_, genre)| *genre)
        .unwrap_or(DEFAULT_GENRE)
}
