// educe_core/src/npc.rs
use crate::{config::EngineConfig, geom::Aabb, player::PlayerKind};
use glam::{Vec2, vec2};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Spawn-time NPC data as stored in the world file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct NpcSpawn {
    pub row: usize,
    pub col: usize,
    pub id: String,
    pub label: String,
}

impl Default for NpcSpawn {
    fn default() -> Self {
        Self {
            row: 0,
            col: 0,
            id: "default".to_string(),
            label: "NPC Spawn".to_string(),
        }
    }
}

impl NpcSpawn {
    pub fn at(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            ..Default::default()
        }
    }

    /// Evolution form encoded in the spawn id. Unknown ids are blobs.
    pub fn kind(&self) -> PlayerKind {
        PlayerKind::from_str(&self.id).unwrap_or_default()
    }
}

/// A live NPC instance in the active room.
#[derive(Debug, Clone, PartialEq)]
pub struct Npc {
    /// Sprite top-left in room pixels.
    pub position: Vec2,
    pub width: f32,
    pub height: f32,
    pub kind: PlayerKind,
    pub frame_time: f32,
    pub current_frame: u32,
    /// The spawn record this instance came from, kept so consumed NPCs can
    /// be restored exactly.
    pub spawn: NpcSpawn,
}

impl Npc {
    pub fn from_spawn(spawn: NpcSpawn, config: &EngineConfig) -> Self {
        Self {
            position: vec2(
                spawn.col as f32 * config.tile_width,
                spawn.row as f32 * config.tile_height,
            ),
            width: config.player_width,
            height: config.player_height,
            kind: spawn.kind(),
            frame_time: 0.0,
            current_frame: 0,
            spawn,
        }
    }

    pub fn sprite_rect(&self) -> Aabb {
        Aabb::from_origin_size(self.position, vec2(self.width, self.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_kind_defaults_to_blob() {
        assert_eq!(NpcSpawn::at(1, 2).kind(), PlayerKind::Blob);
        let walker = NpcSpawn {
            id: "walker".to_string(),
            ..NpcSpawn::at(1, 2)
        };
        assert_eq!(walker.kind(), PlayerKind::Walker);
    }

    #[test]
    fn instance_lands_on_its_grid_cell() {
        let config = EngineConfig::default();
        let npc = Npc::from_spawn(NpcSpawn::at(3, 5), &config);
        assert_eq!(npc.position, vec2(5.0 * config.tile_width, 3.0 * config.tile_height));
    }
}
