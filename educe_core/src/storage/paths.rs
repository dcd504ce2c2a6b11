// educe_core/src/storage/paths.rs
use directories_next::ProjectDirs;
use std::path::PathBuf;

/// Per-user application data directory, falling back to the working
/// directory on platforms without one.
pub fn app_dir() -> PathBuf {
    ProjectDirs::from("com", "educe", "educe")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Where worlds land when their primary save path cannot be written.
pub fn export_dir() -> PathBuf {
    app_dir().join("exports")
}

/// Where rotating log files are written.
pub fn log_dir() -> PathBuf {
    app_dir().join("logs")
}
