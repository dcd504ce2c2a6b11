// educe_core/src/engine.rs
use crate::{
    config::EngineConfig,
    constants::{ANIMATION_FRAMES, NPC_FRAME_TIME, PLAYER_FRAME_TIME},
    geom::Aabb,
    input::InputState,
    npc::Npc,
    physics::{collision::move_player_with_collision, probes::CollisionProbes},
    player::Player,
    tiles::{grid::TileGrid, rules::TileRules},
    world::transitions::handle_room_transition,
};

/// The platformer core: one player against the active room's tiles, with
/// room transitions against the world grid. Rendering, audio, and game
/// rules all live upstream of this type.
#[derive(Debug, Clone)]
pub struct Engine {
    pub config: EngineConfig,
    pub rules: TileRules,
    pub player: Player,
    pub input: InputState,
    grid: TileGrid,
    npcs: Vec<Npc>,
    world_width_rooms: i32,
    world_height_rooms: i32,
    probes: CollisionProbes,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        let player = Player::new(&config);
        let grid = TileGrid::new(config.room_cols, config.room_rows);
        Self {
            config,
            rules: TileRules::default(),
            player,
            input: InputState::default(),
            grid,
            npcs: Vec::new(),
            world_width_rooms: 1,
            world_height_rooms: 1,
            probes: CollisionProbes::default(),
        }
    }

    pub fn set_world_bounds(&mut self, width_rooms: i32, height_rooms: i32) {
        self.world_width_rooms = width_rooms.max(1);
        self.world_height_rooms = height_rooms.max(1);
    }

    pub fn world_bounds(&self) -> (i32, i32) {
        (self.world_width_rooms, self.world_height_rooms)
    }

    /// Swap in the active room's tiles.
    pub fn set_tile_grid(&mut self, grid: TileGrid) {
        self.grid = grid;
    }

    pub fn tile_grid(&self) -> &TileGrid {
        &self.grid
    }

    pub fn tile_at(&self, col: i32, row: i32) -> i32 {
        self.grid.tile_at(col, row)
    }

    /// Swap in the active room's NPCs, resetting their animation state.
    pub fn set_npcs(&mut self, mut npcs: Vec<Npc>) {
        for npc in npcs.iter_mut() {
            npc.frame_time = 0.0;
            npc.current_frame = 0;
        }
        self.npcs = npcs;
    }

    pub fn npcs(&self) -> &[Npc] {
        &self.npcs
    }

    pub fn npc_count(&self) -> usize {
        self.npcs.len()
    }

    pub fn remove_npc(&mut self, index: usize) -> Option<Npc> {
        if index < self.npcs.len() {
            Some(self.npcs.remove(index))
        } else {
            None
        }
    }

    pub fn add_npc(&mut self, npc: Npc) {
        self.npcs.push(npc);
    }

    /// Displace the player with tile collision, without touching velocity
    /// integration. Axes resolve independently.
    pub fn move_and_collide(&mut self, dx: f32, dy: f32) {
        move_player_with_collision(
            &mut self.player,
            &self.grid,
            &self.rules,
            &self.config,
            &mut self.probes,
            dx,
            dy,
        );
    }

    /// Wrap or clamp the player at room edges. True when the room changed.
    pub fn handle_room_transition(&mut self) -> bool {
        handle_room_transition(
            &mut self.player,
            &self.config,
            self.world_width_rooms,
            self.world_height_rooms,
        )
    }

    /// One fixed step of the frame loop. Returns whether the player crossed
    /// into another room so callers can rebuild room-local state.
    pub fn update(&mut self, dt: f32) -> bool {
        let config = &self.config;

        let target_vx = self.input.horizontal() * config.walk_speed;
        self.player.velocity.x = target_vx;

        if self.player.velocity.x < 0.0 {
            self.player.facing = 1;
        } else if self.player.velocity.x > 0.0 {
            self.player.facing = -1;
        }

        if self.input.jump && self.player.on_ground {
            self.player.velocity.y = config.jump_velocity;
            self.player.on_ground = false;
        }

        if self.player.on_ground && self.player.velocity.y >= 0.0 {
            self.player.velocity.y = 0.0;
        } else {
            self.player.velocity.y =
                (self.player.velocity.y + config.gravity * dt).min(config.max_fall_speed);
        }

        let dx = self.player.velocity.x * dt;
        let dy = self.player.velocity.y * dt;
        self.move_and_collide(dx, 0.0);
        self.move_and_collide(0.0, dy);

        let room_changed = self.handle_room_transition();

        self.player.frame_time += dt;
        if self.player.frame_time >= PLAYER_FRAME_TIME {
            self.player.frame_time = 0.0;
            self.player.current_frame = (self.player.current_frame + 1) % ANIMATION_FRAMES;
        }

        for npc in self.npcs.iter_mut() {
            npc.frame_time += dt;
            if npc.frame_time >= NPC_FRAME_TIME {
                npc.frame_time = 0.0;
                npc.current_frame = (npc.current_frame + 1) % ANIMATION_FRAMES;
            }
        }

        room_changed
    }

    pub fn reset_player(&mut self, room_x: i32, room_y: i32, x: f32, y: f32) {
        self.player.reset(room_x, room_y, x, y);
    }

    /// Override the ratio-derived collider geometry.
    pub fn set_player_collider(&mut self, width: f32, height: f32, offset_x: f32, offset_y: f32) {
        self.player.set_collider(width, height, offset_x, offset_y);
    }

    pub fn player_collider_rect(&self) -> Aabb {
        self.player.collider_rect()
    }

    pub fn debug_probes(&self) -> &CollisionProbes {
        &self.probes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::FIXED_DT;

    fn engine_with_floor() -> Engine {
        let mut engine = Engine::new(EngineConfig::default());
        let mut grid = TileGrid::new(10, 8);
        for col in 0..10 {
            grid.set_tile(col, 7, 1);
        }
        engine.set_tile_grid(grid);
        engine.reset_player(0, 0, 16.0, 100.0);
        engine
    }

    #[test]
    fn gravity_settles_the_player_on_the_floor() {
        let mut engine = engine_with_floor();
        for _ in 0..120 {
            engine.update(FIXED_DT);
        }
        assert!(engine.player.on_ground);
        // Floor top is at 7 * 32; collider bottom rests there.
        assert_eq!(engine.player_collider_rect().max.y, 224.0);
        assert_eq!(engine.player.velocity.y, 0.0);
    }

    #[test]
    fn jump_only_works_from_the_ground() {
        let mut engine = engine_with_floor();
        for _ in 0..120 {
            engine.update(FIXED_DT);
        }
        engine.input.jump = true;
        engine.update(FIXED_DT);
        assert!(!engine.player.on_ground);
        assert!(engine.player.velocity.y < 0.0);

        // Holding jump in the air does not add impulses.
        let rising = engine.player.velocity.y;
        engine.update(FIXED_DT);
        assert!(engine.player.velocity.y > rising);
    }

    #[test]
    fn walking_updates_facing() {
        let mut engine = engine_with_floor();
        engine.input.right = true;
        engine.update(FIXED_DT);
        assert_eq!(engine.player.facing, -1);
        engine.input.right = false;
        engine.input.left = true;
        engine.update(FIXED_DT);
        assert_eq!(engine.player.facing, 1);
    }

    #[test]
    fn walking_off_the_room_edge_changes_rooms() {
        let mut engine = engine_with_floor();
        engine.set_world_bounds(2, 1);
        engine.reset_player(0, 0, 300.0, 100.0);
        engine.input.right = true;

        let mut changed = false;
        for _ in 0..240 {
            if engine.update(FIXED_DT) {
                changed = true;
                break;
            }
        }
        assert!(changed);
        assert_eq!(engine.player.room.x, 1);
    }

    #[test]
    fn at_the_world_edge_the_player_clamps() {
        let mut engine = engine_with_floor();
        engine.set_world_bounds(1, 1);
        engine.reset_player(0, 0, 300.0, 100.0);
        engine.input.right = true;

        for _ in 0..240 {
            assert!(!engine.update(FIXED_DT));
        }
        assert_eq!(engine.player.room.x, 0);
        assert_eq!(
            engine.player.position.x,
            engine.config.room_width() - engine.player.width
        );
    }

    #[test]
    fn animation_frames_cycle() {
        let mut engine = engine_with_floor();
        let start = engine.player.current_frame;
        for _ in 0..30 {
            engine.update(FIXED_DT);
        }
        assert_ne!(engine.player.current_frame, start);
        assert!(engine.player.current_frame < ANIMATION_FRAMES);
    }
}
