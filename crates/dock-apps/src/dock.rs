//! Dock context: owns the catalog, the favorites and the launcher.
//!
//! The presentation layer holds one of these and calls into it from its event loop.

use crate::catalog::AppCatalog;
use crate::config::DockConfig;
use crate::desktop_entry::DesktopEntry;
use crate::error::DockError;
use crate::favorites::{FavoriteApp, FavoritesStore};
use crate::launcher::Launcher;
use crate::paths::{config_path_in, favorites_path_in, get_config_directory};
use log::info;
use serde::Serialize;
use std::path::Path;

/// One button of the dock bar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BarItem {
    pub name: Option<String>,
    pub exec: String,
    /// Resolved icon name, never empty.
    pub icon: String,
    /// Built-in buttons can't be unpinned.
    pub pinned: bool,
}

pub struct Dock<L: Launcher> {
    config: DockConfig,
    catalog: AppCatalog,
    favorites: FavoritesStore,
    launcher: L,
}

impl<L: Launcher> Dock<L> {
    pub fn new(
        config: DockConfig,
        catalog: AppCatalog,
        favorites: FavoritesStore,
        launcher: L,
    ) -> Self {
        Self {
            config,
            catalog,
            favorites,
            launcher,
        }
    }

    /// Open the dock with settings and favorites from `config_dir`.
    pub fn open_in(config_dir: &Path, catalog: AppCatalog, launcher: L) -> Self {
        info!("Opening dock state in {}", config_dir.display());
        let config = DockConfig::load(&config_path_in(config_dir));
        let favorites = FavoritesStore::load(favorites_path_in(config_dir));
        Self::new(config, catalog, favorites, launcher)
    }

    /// Open the dock from the user's config directory and the standard app directories.
    pub fn open(launcher: L) -> Self {
        Self::open_in(&get_config_directory(), AppCatalog::new(), launcher)
    }

    pub fn config(&self) -> &DockConfig {
        &self.config
    }

    pub fn catalog(&self) -> &AppCatalog {
        &self.catalog
    }

    pub fn favorites(&self) -> &FavoritesStore {
        &self.favorites
    }

    /// All visible applications, scanning on first use.
    pub fn applications(&self) -> &[DesktopEntry] {
        self.catalog.load()
    }

    pub fn search(&self, query: &str) -> Vec<&DesktopEntry> {
        self.catalog.search(query)
    }

    /// Built-in launchers followed by the favorites.
    pub fn bar_items(&self) -> Vec<BarItem> {
        let builtin = self
            .config
            .builtin_launchers
            .iter()
            .map(|app| (app, false));
        let pinned = self.favorites.apps().iter().map(|app| (app, true));

        builtin
            .chain(pinned)
            .map(|(app, pinned)| BarItem {
                name: app.name.clone(),
                exec: app.exec.clone(),
                icon: app
                    .icon
                    .clone()
                    .filter(|icon| !icon.is_empty())
                    .unwrap_or_else(|| self.config.fallback_icon.clone()),
                pinned,
            })
            .collect()
    }

    pub fn launch(&self, command: &str) {
        self.launcher.launch(command);
    }

    /// Pin a catalog entry. Returns `Ok(false)` if its command is already pinned.
    pub fn pin(&mut self, entry: &DesktopEntry) -> Result<bool, DockError> {
        self.favorites.add(FavoriteApp::from(entry))
    }

    /// Pin the catalog entry that launches `exec`.
    pub fn pin_exec(&mut self, exec: &str) -> Result<bool, DockError> {
        let app = self
            .catalog
            .find_by_exec(exec)
            .map(FavoriteApp::from)
            .ok_or_else(|| DockError::UnknownApp(exec.to_string()))?;

        self.favorites.add(app)
    }

    pub fn unpin(&mut self, exec: &str) -> Result<bool, DockError> {
        self.favorites.remove(exec)
    }
}
