// Cache path utilities.
// Resolves the per-user cache directory that holds log files.

use std::path::PathBuf;

use directories::ProjectDirs;

/// Get the base cache directory (~/.cache/coursenav on Linux).
pub fn cache_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "coursenav").map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Directory for rolling log files.
pub fn log_dir() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join("logs"))
}
