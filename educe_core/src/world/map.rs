// educe_core/src/world/map.rs
use crate::{
    npc::NpcSpawn,
    tiles::grid::TileGrid,
    world::world_data::{NpcToggle, WorldData},
};

/// A cursor over the world: which room is active, plus the operations the
/// game and editor perform on it.
#[derive(Debug, Clone)]
pub struct MapManager {
    pub world: WorldData,
    current_room_x: usize,
    current_room_y: usize,
}

impl MapManager {
    pub fn new(mut world: WorldData) -> Self {
        world.normalize();
        let current_room_x = world.start_room_x.min(world.world_width.saturating_sub(1));
        let current_room_y = world.start_room_y.min(world.world_height.saturating_sub(1));
        Self {
            world,
            current_room_x,
            current_room_y,
        }
    }

    pub fn current_room(&self) -> (usize, usize) {
        (self.current_room_x, self.current_room_y)
    }

    /// Move the cursor; out-of-world targets are refused.
    pub fn enter_room(&mut self, room_x: usize, room_y: usize) -> bool {
        if !self.world.in_bounds(room_x, room_y) {
            return false;
        }
        self.current_room_x = room_x;
        self.current_room_y = room_y;
        true
    }

    /// The active room flattened for the engine.
    pub fn current_grid(&self) -> TileGrid {
        self.world.room_grid(self.current_room_x, self.current_room_y)
    }

    pub fn current_npcs(&self) -> Vec<NpcSpawn> {
        self.world
            .npc_list(self.current_room_x, self.current_room_y)
            .to_vec()
    }

    pub fn npc_count(&self) -> usize {
        self.world.npc_list(self.current_room_x, self.current_room_y).len()
    }

    pub fn tile_at(&self, row: usize, col: usize) -> Option<i32> {
        self.world
            .tile_at(self.current_room_x, self.current_room_y, row, col)
    }

    pub fn set_tile(&mut self, row: usize, col: usize, tile_id: i32) -> bool {
        self.world
            .set_tile(self.current_room_x, self.current_room_y, row, col, tile_id)
    }

    pub fn toggle_npc(&mut self, row: usize, col: usize) -> NpcToggle {
        self.world
            .toggle_npc(self.current_room_x, self.current_room_y, row, col)
    }

    /// Remove one spawn from the active room by list index.
    pub fn remove_npc(&mut self, index: usize) -> bool {
        let list = self
            .world
            .npc_list_mut(self.current_room_x, self.current_room_y);
        if index >= list.len() {
            return false;
        }
        list.remove(index);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_starts_at_the_start_room_clamped() {
        let mut world = WorldData::new(2, 2, 4, 4);
        world.start_room_x = 1;
        world.start_room_y = 5; // out of range, clamps
        let map = MapManager::new(world);
        assert_eq!(map.current_room(), (1, 1));
    }

    #[test]
    fn entering_an_outside_room_is_refused() {
        let mut map = MapManager::new(WorldData::new(2, 1, 4, 4));
        assert!(map.enter_room(1, 0));
        assert!(!map.enter_room(2, 0));
        assert_eq!(map.current_room(), (1, 0));
    }

    #[test]
    fn edits_land_in_the_active_room() {
        let mut map = MapManager::new(WorldData::new(2, 1, 4, 4));
        map.enter_room(1, 0);
        assert!(map.set_tile(2, 2, 7));
        assert_eq!(map.world.tile_at(1, 0, 2, 2), Some(7));
        assert_eq!(map.world.tile_at(0, 0, 2, 2), Some(0));

        assert_eq!(map.toggle_npc(1, 1), NpcToggle::Added);
        assert_eq!(map.npc_count(), 1);
        assert!(map.remove_npc(0));
        assert!(!map.remove_npc(0));
    }
}
