// mousey/src/hub.rs
use educe_core::{
    assets::manifest::{LevelEntry, LevelManifest},
    storage::world_storage::load_world,
    world::world_data::WorldData,
};
use log::info;
use std::{io, path::Path};

/// Manifest-driven level progression. Worlds load lazily when a level is
/// entered; completion unlocks the next manifest entry. In-memory only.
#[derive(Debug, Clone)]
pub struct Hub {
    levels: Vec<LevelEntry>,
    completed: Vec<bool>,
    selected: usize,
}

impl Hub {
    pub fn from_manifest(manifest: LevelManifest) -> Self {
        let count = manifest.levels.len();
        Self {
            levels: manifest.levels,
            completed: vec![false; count],
            selected: 0,
        }
    }

    pub fn levels(&self) -> &[LevelEntry] {
        &self.levels
    }

    pub fn selected(&self) -> Option<&LevelEntry> {
        self.levels.get(self.selected)
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// The first level is always open; later ones need the previous one
    /// finished.
    pub fn is_unlocked(&self, index: usize) -> bool {
        index < self.levels.len() && (index == 0 || self.completed[index - 1])
    }

    pub fn is_completed(&self, index: usize) -> bool {
        self.completed.get(index).copied().unwrap_or(false)
    }

    /// Move the selection; locked and out-of-range levels are refused.
    pub fn select(&mut self, index: usize) -> bool {
        if !self.is_unlocked(index) {
            return false;
        }
        self.selected = index;
        true
    }

    /// Finish the selected level, unlocking the next manifest entry.
    pub fn mark_selected_completed(&mut self) {
        if let Some(flag) = self.completed.get_mut(self.selected) {
            if !*flag {
                *flag = true;
                if let Some(level) = self.levels.get(self.selected) {
                    info!("level {} completed", level.id);
                }
            }
        }
    }

    /// Step into the next level if it is unlocked.
    pub fn advance(&mut self) -> bool {
        self.select(self.selected + 1)
    }

    /// Load the selected level's world file, relative to the manifest.
    pub fn load_selected(&self, base_dir: &Path) -> io::Result<WorldData> {
        let level = self.selected().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "the manifest lists no levels")
        })?;
        load_world(&base_dir.join(&level.path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use educe_core::assets::manifest::LevelMeta;

    fn three_levels() -> Hub {
        let manifest = LevelManifest {
            levels: (0..3)
                .map(|i| LevelEntry {
                    id: format!("level{i}"),
                    path: format!("levels/level{i}.json"),
                    meta: LevelMeta::default(),
                })
                .collect(),
        };
        Hub::from_manifest(manifest)
    }

    #[test]
    fn only_the_first_level_starts_unlocked() {
        let hub = three_levels();
        assert!(hub.is_unlocked(0));
        assert!(!hub.is_unlocked(1));
        assert!(!hub.is_unlocked(2));
    }

    #[test]
    fn completion_unlocks_in_manifest_order() {
        let mut hub = three_levels();
        assert!(!hub.select(1));

        hub.mark_selected_completed();
        assert!(hub.is_completed(0));
        assert!(hub.advance());
        assert_eq!(hub.selected().unwrap().id, "level1");

        assert!(!hub.select(2));
        hub.mark_selected_completed();
        assert!(hub.select(2));
    }

    #[test]
    fn empty_manifest_loads_nothing() {
        let hub = Hub::from_manifest(LevelManifest::default());
        assert!(hub.selected().is_none());
        let err = hub.load_selected(Path::new(".")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
