// educe_core/src/assets/atlas.rs
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One sprite frame inside the atlas image, in pixels.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(default)]
pub struct FrameRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Where a tile id's artwork lives in the atlas image.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct TileArt {
    pub id: i32,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub name: String,
}

/// The atlas index: animation names to frame lists, plus the tile table.
/// Unknown top-level keys are animations; `tiles` is the one reserved key.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Atlas {
    #[serde(default)]
    pub tiles: Vec<TileArt>,
    #[serde(flatten)]
    animations: HashMap<String, Vec<FrameRect>>,
}

impl Atlas {
    pub fn animation(&self, name: &str) -> Option<&[FrameRect]> {
        self.animations.get(name).map(|frames| frames.as_slice())
    }

    /// A frame of an animation, wrapping the index so malformed or short
    /// frame lists degrade instead of failing.
    pub fn frame(&self, name: &str, index: usize) -> Option<&FrameRect> {
        let frames = self.animations.get(name)?;
        if frames.is_empty() {
            return None;
        }
        frames.get(index % frames.len())
    }

    pub fn tile_art(&self, tile_id: i32) -> Option<&TileArt> {
        self.tiles.iter().find(|tile| tile.id == tile_id)
    }

    pub fn animation_names(&self) -> impl Iterator<Item = &str> {
        self.animations.keys().map(|name| name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ATLAS_JSON: &str = r#"{
        "player_walk_left": [
            {"x": 0, "y": 0, "width": 32, "height": 32},
            {"x": 32, "y": 0, "width": 32, "height": 32}
        ],
        "tiles": [
            {"id": 1, "x": 0, "y": 64, "width": 8, "height": 8, "name": "dirt"},
            {"id": 250, "x": 8, "y": 64, "width": 8, "height": 8, "name": "exit"}
        ]
    }"#;

    #[test]
    fn animations_and_tiles_parse_side_by_side() {
        let atlas: Atlas = serde_json::from_str(ATLAS_JSON).unwrap();
        assert_eq!(atlas.animation("player_walk_left").unwrap().len(), 2);
        assert_eq!(atlas.tile_art(250).unwrap().name, "exit");
        assert!(atlas.animation("tiles").is_none());
    }

    #[test]
    fn frame_lookup_wraps_out_of_range_indices() {
        let atlas: Atlas = serde_json::from_str(ATLAS_JSON).unwrap();
        let a = atlas.frame("player_walk_left", 0).copied();
        let b = atlas.frame("player_walk_left", 2).copied();
        assert_eq!(a, b);
        assert!(atlas.frame("missing", 0).is_none());
    }
}
