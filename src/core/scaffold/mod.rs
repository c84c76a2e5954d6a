//! Project Scaffolds
//!
//! Builders map a spec (in plain mapping form) to a fixed-shape project
//! scaffold. The scene content is builder-determined; only the title, engine
//! and description come from the spec.

mod builder_2d;
mod builder_3d;

pub use builder_2d::Builder2D;
pub use builder_3d::Builder3D;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::game_spec::GameType;
use super::output::{OutputStore, PersistResult};

pub const DEFAULT_ENGINE: &str = "unity";

// ============================================================================
// Scaffold Types
// ============================================================================

/// A scene entity, e.g. the player and a platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    #[serde(rename = "type")]
    pub kind: String,
    pub prefab: String,
}

impl Entity {
    pub fn new(kind: impl Into<String>, prefab: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            prefab: prefab.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    pub name: String,
    pub entities: Vec<Entity>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaffoldMetadata {
    /// Identifier of the builder that produced the scaffold
    pub created_by: String,
    pub description: String,
}

/// Stub project description written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectScaffold {
    pub project_type: GameType,
    pub title: String,
    pub engine: String,
    pub scene: Scene,
    pub metadata: ScaffoldMetadata,
    /// Set after the scaffold has been written; never part of the file itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_to: Option<String>,
}

// ============================================================================
// Builders
// ============================================================================

/// A scaffold shape for one kind of project.
pub trait ScaffoldBuilder: Sync {
    fn project_type(&self) -> GameType;

    /// Value of `metadata.created_by`.
    fn builder_id(&self) -> &'static str;

    /// Title used when the spec has none.
    fn default_title(&self) -> &'static str;

    /// Output file name prefix.
    fn file_prefix(&self) -> &'static str;

    fn scene(&self) -> Scene;

    /// Pure scaffold construction.
    fn scaffold(&self, spec: &Map<String, Value>) -> ProjectScaffold {
        ProjectScaffold {
            project_type: self.project_type(),
            title: text_field(spec, "title").unwrap_or(self.default_title()).to_string(),
            engine: text_field(spec, "engine").unwrap_or(DEFAULT_ENGINE).to_string(),
            scene: self.scene(),
            metadata: ScaffoldMetadata {
                created_by: self.builder_id().to_string(),
                description: text_field(spec, "description").unwrap_or_default().to_string(),
            },
            saved_to: None,
        }
    }
}

fn text_field<'a>(spec: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    spec.get(key).and_then(Value::as_str)
}

/// 3D when `game_type` is exactly `"3D"`, 2D for anything else.
pub fn select_builder(spec: &Map<String, Value>) -> &'static dyn ScaffoldBuilder {
    match text_field(spec, "game_type") {
        Some("3D") => &Builder3D,
        _ => &Builder2D,
    }
}

/// Build a scaffold, save it once, and return it with `saved_to` filled in.
pub async fn build_project(
    builder: &dyn ScaffoldBuilder,
    spec: &Map<String, Value>,
    store: &OutputStore,
) -> PersistResult<ProjectScaffold> {
    let mut project = builder.scaffold(spec);
    let saved_to = store.save_json(&project, builder.file_prefix()).await?;
    project.saved_to = Some(saved_to);
    Ok(project)
}
