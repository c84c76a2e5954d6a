//! Game Specification
//!
//! Everything between a free-text idea and a validated `GameSpec`:
//!
//! - `model`: the spec record and its validation
//! - `heuristic`: offline keyword parser
//! - `prompt`: the LLM prompt
//! - `generator`: LLM-first generation with heuristic fallback
//! - `errors`: recoverable failure kinds of the LLM path

pub mod errors;
pub mod generator;
pub mod heuristic;
pub mod model;
pub mod prompt;

pub use errors::SpecGenerationError;
pub use generator::{SpecGenerator, SpecSource};
pub use model::{Engine, GameSpec, GameType, ValidationError};
