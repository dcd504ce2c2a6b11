// educe_core/src/player.rs
use crate::{config::EngineConfig, geom::Aabb};
use glam::{IVec2, Vec2, vec2};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, FromRepr};

/// The player's evolution form. Ordering is declaration order.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumIter,
    EnumString,
    FromRepr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[repr(i32)]
pub enum PlayerKind {
    #[default]
    Blob = 0,
    Walker = 1,
    Mouse = 2,
}

/// Per-frame player state. Mutated every frame by the physics step and
/// recreated wholesale on level or room reset.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Sprite top-left in room pixels.
    pub position: Vec2,
    /// Pixels per second.
    pub velocity: Vec2,
    /// Which room of the world grid the player occupies.
    pub room: IVec2,
    /// Sprite size in pixels.
    pub width: f32,
    pub height: f32,
    /// Collider sub-rect, bottom-aligned within the sprite.
    pub collider_width: f32,
    pub collider_height: f32,
    pub collider_offset: Vec2,
    /// +1 facing left, -1 facing right.
    pub facing: i32,
    pub kind: PlayerKind,
    pub on_ground: bool,
    pub frame_time: f32,
    pub current_frame: u32,
    collider_ratio: f32,
    min_collider_size: f32,
}

impl Player {
    pub fn new(config: &EngineConfig) -> Self {
        let mut player = Self {
            position: vec2(16.0, 16.0),
            velocity: Vec2::ZERO,
            room: IVec2::ZERO,
            width: config.player_width,
            height: config.player_height,
            collider_width: 0.0,
            collider_height: 0.0,
            collider_offset: Vec2::ZERO,
            facing: 1,
            kind: PlayerKind::default(),
            on_ground: false,
            frame_time: 0.0,
            current_frame: 0,
            collider_ratio: config.collider_ratio.max(f32::EPSILON),
            min_collider_size: config.min_collider_size.max(1.0),
        };
        player.sync_collider_to_sprite();
        player
    }

    /// Derive the collider from the sprite: ratio-scaled, clamped to the
    /// minimum size, horizontally centered, bottom-aligned.
    pub fn sync_collider_to_sprite(&mut self) {
        let target_width = (self.width * self.collider_ratio).round().max(self.min_collider_size);
        let target_height = (self.height * self.collider_ratio).round().max(self.min_collider_size);
        self.collider_width = target_width;
        self.collider_height = target_height;
        self.collider_offset = vec2(((self.width - target_width) * 0.5).round(), 0.0);
    }

    /// Resize the sprite, keeping the bottom edge where it was so the player
    /// does not sink into the floor.
    pub fn set_sprite_size(&mut self, width: f32, height: f32) {
        let prev_bottom = self.position.y + self.height;
        if width > 0.0 {
            self.width = width;
        }
        if height > 0.0 {
            self.height = height;
        }
        self.sync_collider_to_sprite();
        self.position.y = prev_bottom - self.height;
    }

    pub fn set_kind(&mut self, kind: PlayerKind) {
        self.kind = kind;
        self.sync_collider_to_sprite();
    }

    /// Explicit collider override for callers that do not want the
    /// ratio-derived geometry.
    pub fn set_collider(&mut self, width: f32, height: f32, offset_x: f32, offset_y: f32) {
        if width > 0.0 {
            self.collider_width = width.round();
        }
        if height > 0.0 {
            self.collider_height = height.round();
        }
        self.collider_offset = vec2(offset_x.round(), offset_y.round());
    }

    /// The collider rect in room pixels.
    pub fn collider_rect(&self) -> Aabb {
        let origin = vec2(
            self.position.x + self.collider_offset.x,
            self.position.y + self.height - self.collider_height + self.collider_offset.y,
        );
        Aabb::from_origin_size(origin, vec2(self.collider_width, self.collider_height))
    }

    /// The sprite rect in room pixels.
    pub fn sprite_rect(&self) -> Aabb {
        Aabb::from_origin_size(self.position, vec2(self.width, self.height))
    }

    /// Wholesale respawn at a room-local position.
    pub fn reset(&mut self, room_x: i32, room_y: i32, x: f32, y: f32) {
        self.room = IVec2::new(room_x, room_y);
        self.position = vec2(x, y);
        self.velocity = Vec2::ZERO;
        self.on_ground = false;
        self.current_frame = 0;
        self.frame_time = 0.0;
    }
}
