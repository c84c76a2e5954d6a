//! Core functionality: spec generation, scaffolds, persistence and logging.

pub mod game_spec;
pub mod llm;
pub mod logging;
pub mod output;
pub mod scaffold;
