//! GameShaper - game idea to project scaffold
//!
//! Converts a free-text game idea into a validated `GameSpec` (via an LLM,
//! with a keyword-heuristic fallback) and writes a stub 2D or 3D project
//! scaffold as JSON.

pub mod cli;
pub mod config;
pub mod core;


pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
