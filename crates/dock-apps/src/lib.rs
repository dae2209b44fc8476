//! dock-apps: application catalog, favorites and search for a minimal dock.
//!
//! Provides the non-visual core of the dock:
//! - Desktop application catalog parsed from .desktop files, filtered for the current desktop
//! - Favorites persisted to a flat `favorites.conf` file
//! - Substring / word-prefix search over application labels
//! - Fire-and-forget launching of shell commands
//!
//! All state is owned by a [`Dock`] context; nothing here is global.

mod catalog;
mod config;
mod desktop_entry;
mod dock;
mod error;
mod favorites;
mod launcher;
pub mod paths;
pub mod search;

pub use catalog::AppCatalog;
pub use config::DockConfig;
pub use desktop_entry::{DesktopEntry, parse_desktop_entry, parse_desktop_file};
pub use dock::{BarItem, Dock};
pub use error::DockError;
pub use favorites::{
    FavoriteApp, FavoritesEvent, FavoritesStore, parse_favorites, serialize_favorites,
};
pub use launcher::{Launcher, ShellLauncher};
pub use search::matches;
