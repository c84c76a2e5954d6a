//! 3D project scaffold

use super::{Entity, ScaffoldBuilder, Scene};
use crate::core::game_spec::GameType;

/// Player standing on flat terrain.
#[derive(Debug, Clone, Copy, Default)]
pub struct Builder3D;

impl ScaffoldBuilder for Builder3D {
    fn project_type(&self) -> GameType {
        GameType::ThreeD
    }

    fn builder_id(&self) -> &'static str {
        "builder_3d"
    }

    fn default_title(&self) -> &'static str {
        "Untitled 3D Game"
    }

    fn file_prefix(&self) -> &'static str {
        "game_3d"
    }

    fn scene(&self) -> Scene {
        Scene {
            name: "MainScene3D".to_string(),
            entities: vec![
                Entity::new("player", "player_3d"),
                Entity::new("terrain", "flat_terrain"),
            ],
        }
    }
}
