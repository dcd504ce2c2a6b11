// educe_core/src/world/world_data.rs
use crate::{constants::MAX_NPCS_PER_ROOM, npc::NpcSpawn, tiles::grid::TileGrid};
use serde::{Deserialize, Serialize};

/// Rows of tile ids for one room.
pub type RoomTiles = Vec<Vec<i32>>;

/// Where the player appears when a level starts.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct PlayerSpawn {
    pub room_x: usize,
    pub room_y: usize,
    pub x: f32,
    pub y: f32,
}

/// Result of toggling an NPC spawn on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NpcToggle {
    Added,
    Removed,
    /// The room already holds the maximum number of spawns.
    Limit,
    /// The cell is outside the room.
    Ignored,
}

/// The whole level as stored on disk. Every field is defaulted so partial
/// or hand-edited files still load; `normalize` patches the rest up.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct WorldData {
    /// World size in rooms.
    pub world_width: usize,
    pub world_height: usize,
    /// Room size in tiles.
    pub room_width: usize,
    pub room_height: usize,
    pub start_room_x: usize,
    pub start_room_y: usize,
    /// rooms[room_y][room_x] -> rows of tile ids.
    pub rooms: Vec<Vec<RoomTiles>>,
    /// npcs[room_y][room_x] -> spawn list.
    pub npcs: Vec<Vec<Vec<NpcSpawn>>>,
    pub player_spawn: PlayerSpawn,
}

impl WorldData {
    /// A world of empty rooms.
    pub fn new(world_width: usize, world_height: usize, room_width: usize, room_height: usize) -> Self {
        let empty_room = vec![vec![0; room_width]; room_height];
        let mut world = Self {
            world_width,
            world_height,
            room_width,
            room_height,
            rooms: vec![vec![empty_room; world_width]; world_height],
            ..Default::default()
        };
        world.ensure_npc_grid();
        world
    }

    /// Patch up a freshly deserialized world: infer missing dimensions from
    /// the room grid and reshape the NPC grid to match.
    pub fn normalize(&mut self) {
        if self.world_height == 0 {
            self.world_height = self.rooms.len();
        }
        if self.world_width == 0 {
            self.world_width = self.rooms.first().map_or(0, |row| row.len());
        }
        if self.room_height == 0 {
            self.room_height = self
                .rooms
                .first()
                .and_then(|row| row.first())
                .map_or(0, |room| room.len());
        }
        if self.room_width == 0 {
            self.room_width = self
                .rooms
                .first()
                .and_then(|row| row.first())
                .and_then(|room| room.first())
                .map_or(0, |tiles| tiles.len());
        }
        self.ensure_npc_grid();
    }

    /// Grow the NPC grid to one spawn list per room.
    pub fn ensure_npc_grid(&mut self) {
        let height = self.world_height.max(self.rooms.len());
        let width = self
            .world_width
            .max(self.rooms.first().map_or(0, |row| row.len()));

        if self.npcs.len() < height {
            self.npcs.resize_with(height, Vec::new);
        }
        for row in self.npcs.iter_mut() {
            if row.len() < width {
                row.resize_with(width, Vec::new);
            }
        }
    }

    pub fn in_bounds(&self, room_x: usize, room_y: usize) -> bool {
        room_x < self.world_width && room_y < self.world_height
    }

    pub fn room(&self, room_x: usize, room_y: usize) -> Option<&RoomTiles> {
        if !self.in_bounds(room_x, room_y) {
            return None;
        }
        self.rooms.get(room_y)?.get(room_x)
    }

    pub fn room_mut(&mut self, room_x: usize, room_y: usize) -> Option<&mut RoomTiles> {
        if !self.in_bounds(room_x, room_y) {
            return None;
        }
        self.rooms.get_mut(room_y)?.get_mut(room_x)
    }

    /// Flatten one room for the engine.
    pub fn room_grid(&self, room_x: usize, room_y: usize) -> TileGrid {
        match self.room(room_x, room_y) {
            Some(rows) => TileGrid::from_rows(rows, self.room_width, self.room_height),
            None => TileGrid::new(self.room_width, self.room_height),
        }
    }

    /// The spawn list of a room, clamping out-of-range indices to the edge
    /// like the rest of the loader's lenient coercion.
    pub fn npc_list_mut(&mut self, room_x: usize, room_y: usize) -> &mut Vec<NpcSpawn> {
        self.ensure_npc_grid();
        if self.npcs.is_empty() {
            self.npcs.push(Vec::new());
        }
        let row_index = room_y.min(self.npcs.len() - 1);
        let row = &mut self.npcs[row_index];
        if row.is_empty() {
            row.push(Vec::new());
        }
        let col_index = room_x.min(row.len() - 1);
        &mut row[col_index]
    }

    pub fn npc_list(&self, room_x: usize, room_y: usize) -> &[NpcSpawn] {
        self.npcs
            .get(room_y)
            .and_then(|row| row.get(room_x))
            .map_or(&[], |list| list.as_slice())
    }

    /// Write a tile id into a room, bounds-checked against both the stored
    /// rows and the configured room shape.
    pub fn set_tile(&mut self, room_x: usize, room_y: usize, row: usize, col: usize, tile_id: i32) -> bool {
        let (room_width, room_height) = (self.room_width, self.room_height);
        let Some(room) = self.room_mut(room_x, room_y) else {
            return false;
        };
        if row >= room.len() || row >= room_height {
            return false;
        }
        let tiles = &mut room[row];
        if col >= tiles.len() || col >= room_width {
            return false;
        }
        tiles[col] = tile_id;
        true
    }

    pub fn tile_at(&self, room_x: usize, room_y: usize, row: usize, col: usize) -> Option<i32> {
        self.room(room_x, room_y)?.get(row)?.get(col).copied()
    }

    /// Add or remove an NPC spawn on a cell, enforcing the per-room cap.
    pub fn toggle_npc(&mut self, room_x: usize, room_y: usize, row: usize, col: usize) -> NpcToggle {
        if row >= self.room_height || col >= self.room_width {
            return NpcToggle::Ignored;
        }
        let list = self.npc_list_mut(room_x, room_y);
        if let Some(index) = list.iter().position(|npc| npc.row == row && npc.col == col) {
            list.remove(index);
            return NpcToggle::Removed;
        }
        if list.len() >= MAX_NPCS_PER_ROOM {
            return NpcToggle::Limit;
        }
        list.push(NpcSpawn::at(row, col));
        NpcToggle::Added
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_json_loads_with_defaults() {
        let json = r#"{
            "roomWidth": 4, "roomHeight": 2,
            "rooms": [[ [[0,0,1,0],[1,1,1,1]] ]]
        }"#;
        let mut world: WorldData = serde_json::from_str(json).unwrap();
        world.normalize();
        assert_eq!(world.world_width, 1);
        assert_eq!(world.world_height, 1);
        assert_eq!(world.npcs.len(), 1);
        assert_eq!(world.npcs[0].len(), 1);
        assert_eq!(world.tile_at(0, 0, 1, 0), Some(1));
    }

    #[test]
    fn room_lookup_is_bounds_checked() {
        let world = WorldData::new(2, 2, 4, 4);
        assert!(world.room(1, 1).is_some());
        assert!(world.room(2, 0).is_none());
        assert!(world.room(0, 2).is_none());
    }

    #[test]
    fn npc_cap_is_enforced() {
        let mut world = WorldData::new(1, 1, 8, 8);
        for i in 0..MAX_NPCS_PER_ROOM {
            assert_eq!(world.toggle_npc(0, 0, i / 8, i % 8), NpcToggle::Added);
        }
        assert_eq!(world.toggle_npc(0, 0, 7, 7), NpcToggle::Limit);
        // Removing one makes room again.
        assert_eq!(world.toggle_npc(0, 0, 0, 0), NpcToggle::Removed);
        assert_eq!(world.toggle_npc(0, 0, 7, 7), NpcToggle::Added);
    }

    #[test]
    fn toggle_outside_the_room_is_ignored() {
        let mut world = WorldData::new(1, 1, 4, 4);
        assert_eq!(world.toggle_npc(0, 0, 4, 0), NpcToggle::Ignored);
        assert_eq!(world.toggle_npc(0, 0, 0, 9), NpcToggle::Ignored);
    }

    #[test]
    fn set_tile_respects_room_shape() {
        let mut world = WorldData::new(1, 1, 4, 2);
        assert!(world.set_tile(0, 0, 1, 3, 9));
        assert_eq!(world.tile_at(0, 0, 1, 3), Some(9));
        assert!(!world.set_tile(0, 0, 2, 0, 9));
        assert!(!world.set_tile(0, 0, 0, 4, 9));
        assert!(!world.set_tile(1, 0, 0, 0, 9));
    }

    #[test]
    fn json_round_trips_camel_case() {
        let mut world = WorldData::new(2, 1, 4, 4);
        world.toggle_npc(1, 0, 2, 3);
        world.player_spawn = PlayerSpawn {
            room_x: 1,
            room_y: 0,
            x: 16.0,
            y: 24.0,
        };
        let json = serde_json::to_string(&world).unwrap();
        assert!(json.contains("\"worldWidth\""));
        assert!(json.contains("\"playerSpawn\""));
        let back: WorldData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, world);
    }
}
