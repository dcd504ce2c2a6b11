// educe_core/src/storage/world_storage.rs
use crate::{
    assets::{atlas::Atlas, manifest::LevelManifest},
    constants::WORLD_EXPORT_NAME,
    world::world_data::WorldData,
};
use log::warn;
use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// Where a save actually landed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Written to the path the world was loaded from.
    Primary(PathBuf),
    /// The primary path failed; written to the export directory instead.
    Fallback(PathBuf),
}

impl SaveOutcome {
    pub fn path(&self) -> &Path {
        match self {
            SaveOutcome::Primary(path) | SaveOutcome::Fallback(path) => path,
        }
    }
}

/// Load a world file and coerce it into shape.
pub fn load_world(path: &Path) -> io::Result<WorldData> {
    let data = fs::read_to_string(path)?;
    let mut world: WorldData = serde_json::from_str(&data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    world.normalize();
    Ok(world)
}

/// Write a world as pretty JSON.
pub fn save_world(path: &Path, world: &WorldData) -> io::Result<()> {
    let json = serde_json::to_string_pretty(world)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, json)
}

/// Save to the primary path; if that fails, degrade to a file in the
/// fallback directory so the edit session is never lost. Only when both
/// writes fail does the error surface.
pub fn save_world_with_fallback(
    primary: &Path,
    fallback_dir: &Path,
    world: &WorldData,
) -> io::Result<SaveOutcome> {
    match save_world(primary, world) {
        Ok(()) => Ok(SaveOutcome::Primary(primary.to_path_buf())),
        Err(e) => {
            warn!(
                "Could not save world to {}: {e}. Falling back to export.",
                primary.display()
            );
            fs::create_dir_all(fallback_dir)?;
            let fallback = fallback_dir.join(WORLD_EXPORT_NAME);
            save_world(&fallback, world)?;
            Ok(SaveOutcome::Fallback(fallback))
        }
    }
}

/// Load the level manifest the hub is built from.
pub fn load_manifest(path: &Path) -> io::Result<LevelManifest> {
    let data = fs::read_to_string(path)?;
    serde_json::from_str(&data).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Load the sprite/tile atlas index.
pub fn load_atlas(path: &Path) -> io::Result<Atlas> {
    let data = fs::read_to_string(path)?;
    serde_json::from_str(&data).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
