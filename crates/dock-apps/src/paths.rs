//! Path helpers for application directories and config files.

use std::path::{Path, PathBuf};

/// Subdirectory of the user config dir holding dock state.
pub const CONFIG_DIR_NAME: &str = "dock";
pub const FAVORITES_FILE_NAME: &str = "favorites.conf";
pub const CONFIG_FILE_NAME: &str = "dock.json";

/// System-wide .desktop directories, scanned before the user's own.
const SYSTEM_APPLICATION_DIRS: [&str; 2] =
    ["/usr/share/applications", "/usr/local/share/applications"];

fn home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_default()
}

/// Get the ordered list of .desktop directories.
///
/// Order matters: it is the display order of the catalog.
pub fn get_application_directories() -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = SYSTEM_APPLICATION_DIRS
        .iter()
        .map(PathBuf::from)
        .collect();

    dirs.push(home_dir().join(".local/share/applications"));

    dirs
}

/// Get the dock config directory, e.g. ~/.config/dock.
pub fn get_config_directory() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| home_dir().join(".config"))
        .join(CONFIG_DIR_NAME)
}

/// Favorites file inside a config directory.
pub fn favorites_path_in(config_dir: &Path) -> PathBuf {
    config_dir.join(FAVORITES_FILE_NAME)
}

/// Dock settings file inside a config directory.
pub fn config_path_in(config_dir: &Path) -> PathBuf {
    config_dir.join(CONFIG_FILE_NAME)
}

/// Resolve the current desktop environment identifier.
///
/// `XDG_CURRENT_DESKTOP` wins over `DESKTOP_SESSION`; neither set yields "".
pub fn current_desktop() -> String {
    std::env::var("XDG_CURRENT_DESKTOP")
        .or_else(|_| std::env::var("DESKTOP_SESSION"))
        .unwrap_or_default()
}
