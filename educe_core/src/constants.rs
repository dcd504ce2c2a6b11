// educe_core/src/constants.rs

/// 60Hz physics.
pub const FIXED_DT: f32 = 1.0 / 60.0;
/// Protects against long freezes.
pub const MAX_ACCUM: f32 = 0.5;

/// Displacement smaller than this is treated as consumed by the sub-stepper.
pub const MOVE_EPSILON: f32 = 0.0001;

/// Seconds per player walk-cycle frame.
pub const PLAYER_FRAME_TIME: f32 = 0.12;
/// Seconds per NPC idle-cycle frame.
pub const NPC_FRAME_TIME: f32 = 0.15;
/// Frames in a walk/idle cycle.
pub const ANIMATION_FRAMES: u32 = 4;

/// Hard cap on NPC spawns in a single room.
pub const MAX_NPCS_PER_ROOM: usize = 16;

/// Tile id for empty space.
pub const EMPTY_TILE_ID: i32 = 0;
/// Tile id for level exits. Exits are walkable.
pub const EXIT_TILE_ID: i32 = 250;

/// Most probe samples kept per collision query.
pub const PROBE_SAMPLE_CAP: usize = 256;

/// Name of the fallback file written when a world save fails.
pub const WORLD_EXPORT_NAME: &str = "world.json";
