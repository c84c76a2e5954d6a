//! Prompt for turning a game idea into a spec object

/// Build the user prompt asking for a JSON spec of `idea`.
pub fn build_prompt(idea: &str) -> String {
    format!(
        r#"Convert the following game idea into a strict JSON object with these fields:
{{
  "title": "...",
  "game_type": "2D" or "3D",
  "genre": "...",
  "description": "...",
  "key_features": ["...", "..."],
  "engine": "unity" or "unreal" or "godot",
  "art_style": "... or null",
  "audio_style": "... or null"
}}

Game idea:
{idea}

Respond ONLY with valid JSON."#
    )
}
