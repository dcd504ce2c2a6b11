// mousey/src/constants.rs
use educe_core::config::EngineConfig;

/// Virtual resolution.
pub const GAME_WIDTH: f32 = 320.0;
pub const GAME_HEIGHT: f32 = 180.0;

/// Room shape in tiles.
pub const ROOM_TILE_COLS: usize = 40;
pub const ROOM_TILE_ROWS: usize = 22;

/// Tile shape in pixels.
pub const TILE_PIXEL_WIDTH: f32 = 8.0;
pub const TILE_PIXEL_HEIGHT: f32 = 8.0;

/// Default world shape in rooms.
pub const WORLD_WIDTH: usize = 2;
pub const WORLD_HEIGHT: usize = 2;

/// Every evolution form uses the same sprite footprint.
pub const PLAYER_SPRITE_SIZE: f32 = 24.0;

/// The engine tuned for this game's room and tile shape.
pub fn game_config() -> EngineConfig {
    EngineConfig {
        room_cols: ROOM_TILE_COLS,
        room_rows: ROOM_TILE_ROWS,
        tile_width: TILE_PIXEL_WIDTH,
        tile_height: TILE_PIXEL_HEIGHT,
        player_width: PLAYER_SPRITE_SIZE,
        player_height: PLAYER_SPRITE_SIZE,
        ..Default::default()
    }
}
