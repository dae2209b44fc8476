//! Dock settings stored as JSON next to the favorites.

use crate::error::DockError;
use crate::favorites::FavoriteApp;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_FALLBACK_ICON: &str = "application-x-executable";

/// User-editable dock settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DockConfig {
    /// Quick-launch buttons shown before the favorites.
    pub builtin_launchers: Vec<FavoriteApp>,
    /// Icon used for apps without one.
    pub fallback_icon: String,
}

impl Default for DockConfig {
    fn default() -> Self {
        let builtin = |exec: &str, icon: &str| {
            FavoriteApp::new(None, exec, Some(icon.to_string()))
        };

        Self {
            builtin_launchers: vec![
                builtin("firefox", "firefox"),
                builtin("gnome-terminal", "org.gnome.Terminal"),
                builtin("nautilus", "org.gnome.Nautilus"),
            ],
            fallback_icon: DEFAULT_FALLBACK_ICON.to_string(),
        }
    }
}

impl DockConfig {
    /// Load from config file, or return default if not found or invalid.
    pub fn load(path: &Path) -> Self {
        let Ok(content) = fs::read_to_string(path) else {
            return Self::default();
        };

        serde_json::from_str(&content).unwrap_or_else(|e| {
            warn!("Ignoring invalid dock config {}: {}", path.display(), e);
            Self::default()
        })
    }

    /// Save to config file
    pub fn save(&self, path: &Path) -> Result<(), DockError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = DockConfig::load(Path::new("/nonexistent/dock.json"));
        assert_eq!(config, DockConfig::default());

        let execs: Vec<_> = config.builtin_launchers.iter().map(|a| a.exec.as_str()).collect();
        assert_eq!(execs, ["firefox", "gnome-terminal", "nautilus"]);
        assert_eq!(config.fallback_icon, "application-x-executable");
    }

    #[test]
    fn test_invalid_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dock.json");
        fs::write(&path, "{ not json").unwrap();

        assert_eq!(DockConfig::load(&path), DockConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dock.json");
        fs::write(&path, r#"{ "builtin_launchers": [{ "exec": "kitty" }] }"#).unwrap();

        let config = DockConfig::load(&path);
        assert_eq!(config.builtin_launchers, [FavoriteApp::new(None, "kitty", None)]);
        assert_eq!(config.fallback_icon, DEFAULT_FALLBACK_ICON);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("dock.json");

        let config = DockConfig {
            builtin_launchers: Vec::new(),
            fallback_icon: "unknown".to_string(),
        };
        config.save(&path).unwrap();

        assert_eq!(DockConfig::load(&path), config);
    }
}
