// mousey/src/game.rs
use crate::{
    constants::{PLAYER_SPRITE_SIZE, game_config},
    evolution::{can_evolve, next_kind},
};
use educe_core::{
    engine::Engine,
    npc::Npc,
    player::PlayerKind,
    world::{map::MapManager, world_data::WorldData},
};
use log::debug;

/// Things the frame loop reacts to: rebuild buffers, play a sound, advance
/// the hub. Drained once per frame.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    RoomChanged { room_x: i32, room_y: i32 },
    Merged { from: PlayerKind, to: PlayerKind },
    Split { from: PlayerKind, to: PlayerKind },
    LevelComplete,
}

/// One consumed NPC, remembered so a split can undo the merge exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeRecord {
    pub previous_kind: PlayerKind,
    pub npc: Npc,
}

/// The evolution platformer built on the engine: merge with NPCs of your
/// own form to advance, split to walk it back, reach an exit tile to
/// finish the level.
pub struct MouseyMerge {
    pub engine: Engine,
    pub map: MapManager,
    merge_history: Vec<MergeRecord>,
    events: Vec<GameEvent>,
    completed: bool,
}

impl MouseyMerge {
    pub fn new(world: WorldData) -> Self {
        let mut game = Self {
            engine: Engine::new(game_config()),
            map: MapManager::new(world),
            merge_history: Vec::new(),
            events: Vec::new(),
            completed: false,
        };
        game.engine.set_world_bounds(
            game.map.world.world_width as i32,
            game.map.world.world_height as i32,
        );
        game.reset();
        game
    }

    /// Respawn into the start room, dropping the merge history. The
    /// history is in-memory only and never survives a reload.
    pub fn reset(&mut self) {
        let spawn = self.map.world.player_spawn;
        self.map.enter_room(spawn.room_x, spawn.room_y);
        self.engine
            .reset_player(spawn.room_x as i32, spawn.room_y as i32, spawn.x, spawn.y);
        self.set_player_kind(PlayerKind::Blob);
        self.merge_history.clear();
        self.events.clear();
        self.completed = false;
        self.sync_room();
    }

    /// Rebuild engine-side room state from the map cursor.
    fn sync_room(&mut self) {
        self.engine.set_tile_grid(self.map.current_grid());
        let config = self.engine.config.clone();
        let npcs = self
            .map
            .current_npcs()
            .into_iter()
            .map(|spawn| Npc::from_spawn(spawn, &config))
            .collect();
        self.engine.set_npcs(npcs);
    }

    pub fn set_player_kind(&mut self, kind: PlayerKind) {
        self.engine.player.set_kind(kind);
        self.engine
            .player
            .set_sprite_size(PLAYER_SPRITE_SIZE, PLAYER_SPRITE_SIZE);
    }

    /// One fixed step: physics, transitions, merges, exit check.
    pub fn update(&mut self, dt: f32) {
        let room_changed = self.engine.update(dt);

        if room_changed {
            let room = self.engine.player.room;
            self.map.enter_room(room.x as usize, room.y as usize);
            self.sync_room();
            self.events.push(GameEvent::RoomChanged {
                room_x: room.x,
                room_y: room.y,
            });
        }

        if let Some(index) = self.check_npc_merge() {
            self.merge(index);
        }

        if self.is_on_exit_tile() && !self.completed {
            self.completed = true;
            self.events.push(GameEvent::LevelComplete);
        }
    }

    /// Index of an NPC of the player's current form whose sprite overlaps
    /// the player's, if evolving is still possible.
    pub fn check_npc_merge(&self) -> Option<usize> {
        if !can_evolve(self.engine.player.kind) {
            return None;
        }
        let player_rect = self.engine.player.sprite_rect();
        self.engine
            .npcs()
            .iter()
            .position(|npc| npc.kind == self.engine.player.kind && player_rect.intersects(&npc.sprite_rect()))
    }

    /// Consume an NPC and advance one form, remembering how to undo it.
    pub fn merge(&mut self, npc_index: usize) {
        let Some(npc) = self.engine.remove_npc(npc_index) else {
            return;
        };
        let from = self.engine.player.kind;
        let to = next_kind(from);

        // Keep the map in step so re-entering the room does not resurrect
        // the consumed spawn.
        let spawn = npc.spawn.clone();
        if let Some(index) = self
            .map
            .current_npcs()
            .iter()
            .position(|s| s.row == spawn.row && s.col == spawn.col)
        {
            self.map.remove_npc(index);
        }

        self.merge_history.push(MergeRecord {
            previous_kind: from,
            npc,
        });
        self.set_player_kind(to);
        debug!("merged {from} -> {to}");
        self.events.push(GameEvent::Merged { from, to });
    }

    /// Undo the most recent merge: drop back a form and respawn the
    /// consumed NPC where it was recorded.
    pub fn split(&mut self) -> Option<MergeRecord> {
        if self.engine.player.kind == PlayerKind::Blob {
            return None;
        }
        let record = self.merge_history.pop()?;
        let from = self.engine.player.kind;
        let to = record.previous_kind;

        self.set_player_kind(to);
        self.engine.add_npc(record.npc.clone());
        let (room_x, room_y) = self.map.current_room();
        self.map
            .world
            .npc_list_mut(room_x, room_y)
            .push(record.npc.spawn.clone());

        debug!("split {from} -> {to}");
        self.events.push(GameEvent::Split { from, to });
        Some(record)
    }

    /// Whether the player's sprite box covers an exit tile.
    pub fn is_on_exit_tile(&self) -> bool {
        let config = &self.engine.config;
        let player = &self.engine.player;
        let left = (player.position.x / config.tile_width).floor() as i32;
        let right = ((player.position.x + player.width - 1.0) / config.tile_width).floor() as i32;
        let top = (player.position.y / config.tile_height).floor() as i32;
        let bottom = ((player.position.y + player.height - 1.0) / config.tile_height).floor() as i32;

        for row in top..=bottom {
            for col in left..=right {
                if self.engine.rules.is_exit(self.engine.tile_at(col, row)) {
                    return true;
                }
            }
        }
        false
    }

    pub fn merge_depth(&self) -> usize {
        self.merge_history.len()
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Hand the frame's events to the caller.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
