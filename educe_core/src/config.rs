// educe_core/src/config.rs
use serde::{Deserialize, Serialize};

/// Everything the engine used to hard-code, as injected configuration.
/// Distances are pixels, velocities pixels per second.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    pub room_cols: usize,
    pub room_rows: usize,
    pub tile_width: f32,
    pub tile_height: f32,
    pub gravity: f32,
    pub max_fall_speed: f32,
    pub player_width: f32,
    pub player_height: f32,
    /// Collider size as a fraction of the sprite size.
    pub collider_ratio: f32,
    /// Lower bound on either collider dimension.
    pub min_collider_size: f32,
    pub walk_speed: f32,
    pub jump_velocity: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            room_cols: 10,
            room_rows: 8,
            tile_width: 32.0,
            tile_height: 32.0,
            gravity: 900.0,
            max_fall_speed: 900.0,
            player_width: 32.0,
            player_height: 32.0,
            collider_ratio: 0.25,
            min_collider_size: 6.0,
            walk_speed: 120.0,
            jump_velocity: -300.0,
        }
    }
}

impl EngineConfig {
    /// Room width in pixels.
    pub fn room_width(&self) -> f32 {
        self.room_cols as f32 * self.tile_width
    }

    /// Room height in pixels.
    pub fn room_height(&self) -> f32 {
        self.room_rows as f32 * self.tile_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn room_dimensions_follow_grid() {
        let config = EngineConfig {
            room_cols: 40,
            room_rows: 22,
            tile_width: 8.0,
            tile_height: 8.0,
            ..Default::default()
        };
        assert_eq!(config.room_width(), 320.0);
        assert_eq!(config.room_height(), 176.0);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: EngineConfig = serde_json::from_str(r#"{ "gravity": 600.0 }"#).unwrap();
        assert_eq!(config.gravity, 600.0);
        assert_eq!(config.room_cols, 10);
        assert_eq!(config.collider_ratio, 0.25);
    }
}
