// editor/src/storage.rs
use educe_core::{
    onscreen_info, onscreen_warn,
    storage::{
        paths::{app_dir, export_dir},
        world_storage::{SaveOutcome, save_world_with_fallback},
    },
    world::map::MapManager,
};
use serde::{Deserialize, Serialize};
use std::{fs, io, path::{Path, PathBuf}};

/// Editor preferences, persisted between sessions.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EditorPrefs {
    /// Pixel size tiles are displayed at.
    pub tile_display_size: f32,
    /// The world file the editor had open last.
    pub last_world: Option<PathBuf>,
}

impl Default for EditorPrefs {
    fn default() -> Self {
        Self {
            tile_display_size: 32.0,
            last_world: None,
        }
    }
}

fn prefs_path() -> PathBuf {
    app_dir().join("editor.ron")
}

/// Load preferences; a missing file is a default, not an error.
pub fn load_prefs() -> io::Result<EditorPrefs> {
    load_prefs_from(&prefs_path())
}

pub fn load_prefs_from(path: &Path) -> io::Result<EditorPrefs> {
    if !path.exists() {
        return Ok(EditorPrefs::default());
    }
    let data = fs::read_to_string(path)?;
    ron::from_str(&data).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

pub fn save_prefs(prefs: &EditorPrefs) -> io::Result<()> {
    save_prefs_to(&prefs_path(), prefs)
}

pub fn save_prefs_to(path: &Path, prefs: &EditorPrefs) -> io::Result<()> {
    let data = ron::ser::to_string_pretty(prefs, ron::ser::PrettyConfig::default())
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, data)
}

/// Write the edited world back to the file it came from, degrading to the
/// export directory when that fails. The editor never loses an edit
/// session over a save error; both failing is the only error path.
pub fn save_world_now(map: &MapManager, world_path: &Path) -> io::Result<SaveOutcome> {
    let outcome = save_world_with_fallback(world_path, &export_dir(), &map.world)?;
    match &outcome {
        SaveOutcome::Primary(path) => onscreen_info!("World saved to {}.", path.display()),
        SaveOutcome::Fallback(path) => {
            onscreen_warn!("World save fell back to {}.", path.display())
        }
    }
    Ok(outcome)
}
