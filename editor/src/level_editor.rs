// editor/src/level_editor.rs
use crate::selection::{CellRect, Selection};
use educe_core::world::{map::MapManager, world_data::NpcToggle};
use log::debug;

const DEFAULT_NPC_ID: &str = "default";
const DEFAULT_NPC_LABEL: &str = "NPC Spawn";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    Tiles,
    Npcs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Paint,
    Select,
}

/// A pointer position snapped to a room cell by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

/// Modifier state at pointer-down; any of alt/meta/ctrl means duplicate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub duplicate: bool,
}

/// Keys the editor reacts to, already decoded by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorKey {
    Digit(u8),
    ToggleTool,
    ToggleMode,
    Escape,
    Save,
}

/// What an input caused, so the host can rebuild buffers or save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEvent {
    TilesEdited,
    SelectionChanged,
    NpcToggled(NpcToggle),
    TileSelected(i32),
    ModeChanged(EditMode),
    ToolChanged(Tool),
    SaveRequested,
}

/// Interaction snapshot for a status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorStatus {
    pub mode: EditMode,
    pub tool: Tool,
    pub tile_id: i32,
    pub selection: Option<(usize, usize)>,
    pub npc_id: String,
    pub npc_label: String,
}

/// Mouse-driven tile painting, rectangular selection move/duplicate, and
/// NPC placement over a `MapManager`. A set of interaction-mode flags
/// switched by pointer and keyboard events; no undo, no versioning.
#[derive(Debug, Clone)]
pub struct LevelEditor {
    enabled: bool,
    mode: EditMode,
    tool: Tool,
    selected_tile_id: i32,
    selected_npc_id: String,
    selected_npc_label: String,

    mouse_down: bool,
    selecting: bool,
    moving: bool,
    duplicate: bool,
    selection_start: Option<Cell>,
    preview: Option<CellRect>,
    selection: Option<Selection>,
    move_start: Option<Cell>,
    move_target: Option<(usize, usize)>,
}

impl Default for LevelEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl LevelEditor {
    pub fn new() -> Self {
        Self {
            enabled: false,
            mode: EditMode::Tiles,
            tool: Tool::Paint,
            selected_tile_id: 1,
            selected_npc_id: DEFAULT_NPC_ID.to_string(),
            selected_npc_label: DEFAULT_NPC_LABEL.to_string(),
            mouse_down: false,
            selecting: false,
            moving: false,
            duplicate: false,
            selection_start: None,
            preview: None,
            selection: None,
            move_start: None,
            move_target: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn toggle_enabled(&mut self) {
        self.enabled = !self.enabled;
        if !self.enabled {
            self.clear_selection();
        }
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn preview(&self) -> Option<CellRect> {
        self.preview
    }

    pub fn set_selected_tile(&mut self, tile_id: i32) -> Option<EditorEvent> {
        if self.selected_tile_id == tile_id {
            return None;
        }
        self.selected_tile_id = tile_id;
        Some(EditorEvent::TileSelected(tile_id))
    }

    pub fn set_selected_npc(&mut self, id: &str, label: Option<&str>) {
        self.selected_npc_id = id.to_string();
        if let Some(label) = label {
            self.selected_npc_label = label.to_string();
        }
    }

    pub fn set_mode(&mut self, mode: EditMode) -> Option<EditorEvent> {
        if !self.enabled || self.mode == mode {
            return None;
        }
        self.mode = mode;
        if mode != EditMode::Tiles {
            self.tool = Tool::Paint;
            self.clear_selection();
        }
        Some(EditorEvent::ModeChanged(mode))
    }

    pub fn set_tool(&mut self, tool: Tool) -> Option<EditorEvent> {
        if self.mode != EditMode::Tiles || self.tool == tool {
            return None;
        }
        self.tool = tool;
        if tool != Tool::Select {
            self.clear_selection();
        }
        Some(EditorEvent::ToolChanged(tool))
    }

    pub fn handle_key(&mut self, key: EditorKey) -> Option<EditorEvent> {
        if !self.enabled {
            return None;
        }
        match key {
            EditorKey::Save => Some(EditorEvent::SaveRequested),
            EditorKey::ToggleMode => {
                let next = match self.mode {
                    EditMode::Tiles => EditMode::Npcs,
                    EditMode::Npcs => EditMode::Tiles,
                };
                self.set_mode(next)
            }
            EditorKey::Escape => {
                if self.tool == Tool::Select && self.selection.is_some() {
                    self.clear_selection();
                    Some(EditorEvent::SelectionChanged)
                } else {
                    None
                }
            }
            EditorKey::Digit(digit) => {
                if self.mode == EditMode::Tiles && digit <= 9 {
                    self.set_selected_tile(digit as i32)
                } else {
                    None
                }
            }
            EditorKey::ToggleTool => {
                if self.mode == EditMode::Tiles {
                    let next = match self.tool {
                        Tool::Paint => Tool::Select,
                        Tool::Select => Tool::Paint,
                    };
                    self.set_tool(next)
                } else {
                    None
                }
            }
        }
    }

    pub fn pointer_down(
        &mut self,
        map: &mut MapManager,
        cell: Cell,
        mods: Modifiers,
    ) -> Option<EditorEvent> {
        if !self.enabled {
            return None;
        }
        self.mouse_down = true;

        match self.mode {
            EditMode::Tiles => match self.tool {
                Tool::Select => {
                    let inside = self
                        .selection
                        .as_ref()
                        .is_some_and(|s| s.rect().contains(cell.row, cell.col));
                    if inside {
                        self.begin_selection_move(cell, mods);
                        None
                    } else {
                        self.begin_selection(cell);
                        None
                    }
                }
                Tool::Paint => self.paint_tile(map, cell),
            },
            EditMode::Npcs => {
                let result = map.toggle_npc(cell.row, cell.col);
                if result == NpcToggle::Limit {
                    debug!("npc cap reached in room {:?}", map.current_room());
                }
                Some(EditorEvent::NpcToggled(result))
            }
        }
    }

    pub fn pointer_move(&mut self, map: &mut MapManager, cell: Cell) -> Option<EditorEvent> {
        if !self.enabled || !self.mouse_down || self.mode != EditMode::Tiles {
            return None;
        }
        match self.tool {
            Tool::Select => {
                if self.selecting {
                    self.update_selection_preview(cell);
                } else if self.moving {
                    self.update_selection_move(map, cell);
                }
                None
            }
            Tool::Paint => self.paint_tile(map, cell),
        }
    }

    pub fn pointer_up(&mut self, map: &mut MapManager) -> Option<EditorEvent> {
        if !self.mouse_down {
            return None;
        }
        self.mouse_down = false;
        if !self.enabled || self.mode != EditMode::Tiles || self.tool != Tool::Select {
            return None;
        }
        if self.selecting {
            self.finalize_selection(map)
        } else if self.moving {
            self.finalize_selection_move(map)
        } else {
            None
        }
    }

    fn paint_tile(&mut self, map: &mut MapManager, cell: Cell) -> Option<EditorEvent> {
        // Re-writing the same id is a no-op so drags do not spam rebuilds.
        if map.tile_at(cell.row, cell.col) == Some(self.selected_tile_id) {
            return None;
        }
        if map.set_tile(cell.row, cell.col, self.selected_tile_id) {
            Some(EditorEvent::TilesEdited)
        } else {
            None
        }
    }

    fn begin_selection(&mut self, cell: Cell) {
        self.selecting = true;
        self.selection_start = Some(cell);
        self.preview = Some(CellRect {
            row: cell.row,
            col: cell.col,
            rows: 1,
            cols: 1,
        });
    }

    fn update_selection_preview(&mut self, cell: Cell) {
        let Some(start) = self.selection_start else {
            return;
        };
        self.preview = Some(CellRect::from_corners(start.row, start.col, cell.row, cell.col));
    }

    fn finalize_selection(&mut self, map: &MapManager) -> Option<EditorEvent> {
        self.selecting = false;
        let rect = self.preview.take()?;

        let tiles: Vec<Vec<i32>> = (0..rect.rows)
            .map(|r| {
                (0..rect.cols)
                    .map(|c| map.tile_at(rect.row + r, rect.col + c).unwrap_or(0))
                    .collect()
            })
            .collect();

        self.selection = Some(Selection {
            origin_row: rect.row,
            origin_col: rect.col,
            rows: rect.rows,
            cols: rect.cols,
            tiles,
        });
        Some(EditorEvent::SelectionChanged)
    }

    fn begin_selection_move(&mut self, cell: Cell, mods: Modifiers) {
        let Some(selection) = self.selection.as_ref() else {
            return;
        };
        self.moving = true;
        self.move_start = Some(cell);
        self.move_target = Some((selection.origin_row, selection.origin_col));
        self.duplicate = mods.duplicate;
        self.preview = Some(selection.rect());
    }

    fn update_selection_move(&mut self, map: &MapManager, cell: Cell) {
        let (Some(selection), Some(start)) = (self.selection.as_ref(), self.move_start) else {
            return;
        };
        let delta_row = cell.row as isize - start.row as isize;
        let delta_col = cell.col as isize - start.col as isize;
        let target = selection.clamp_target(
            selection.origin_row as isize + delta_row,
            selection.origin_col as isize + delta_col,
            map.world.room_height,
            map.world.room_width,
        );
        self.move_target = Some(target);
        self.preview = Some(CellRect {
            row: target.0,
            col: target.1,
            rows: selection.rows,
            cols: selection.cols,
        });
    }

    fn finalize_selection_move(&mut self, map: &mut MapManager) -> Option<EditorEvent> {
        self.moving = false;
        self.move_start = None;
        self.preview = None;
        let duplicate = self.duplicate;
        self.duplicate = false;

        let target = self.move_target.take()?;
        let selection = self.selection.as_mut()?;
        if target == (selection.origin_row, selection.origin_col) {
            return None;
        }

        if !duplicate {
            // Clear the source block first so overlapping moves behave.
            for r in 0..selection.rows {
                for c in 0..selection.cols {
                    map.set_tile(selection.origin_row + r, selection.origin_col + c, 0);
                }
            }
        }
        for r in 0..selection.rows {
            for c in 0..selection.cols {
                map.set_tile(target.0 + r, target.1 + c, selection.tiles[r][c]);
            }
        }

        selection.origin_row = target.0;
        selection.origin_col = target.1;
        Some(EditorEvent::TilesEdited)
    }

    fn clear_selection(&mut self) {
        self.selection = None;
        self.selection_start = None;
        self.selecting = false;
        self.moving = false;
        self.duplicate = false;
        self.preview = None;
        self.move_start = None;
        self.move_target = None;
    }

    pub fn status(&self) -> EditorStatus {
        EditorStatus {
            mode: self.mode,
            tool: self.tool,
            tile_id: self.selected_tile_id,
            selection: self.selection.as_ref().map(|s| (s.rows, s.cols)),
            npc_id: self.selected_npc_id.clone(),
            npc_label: self.selected_npc_label.clone(),
        }
    }
}
