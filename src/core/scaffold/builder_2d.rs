//! 2D project scaffold

use super::{Entity, ScaffoldBuilder, Scene};
use crate::core::game_spec::GameType;

/// Side-on scene with a player and a single platform.
#[derive(Debug, Clone, Copy, Default)]
pub struct Builder2D;

impl ScaffoldBuilder for Builder2D {
    fn project_type(&self) -> GameType {
        GameType::TwoD
    }

    fn builder_id(&self) -> &'static str {
        "builder_2d"
    }

    fn default_title(&self) -> &'static str {
        "Untitled 2D Game"
    }

    fn file_prefix(&self) -> &'static str {
        "game_2d"
    }

    fn scene(&self) -> Scene {
        Scene {
            name: "MainScene".to_string(),
            entities: vec![
                Entity::new("player", "player_2d"),
                Entity::new("platform", "basic_platform"),
            ],
        }
    }
}
