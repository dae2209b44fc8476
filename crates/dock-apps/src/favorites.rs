//! Favorites persistence.
//!
//! File format, one record per favorite, records separated by a blank line:
//!
//! ```text
//! Name=Firefox
//! Exec=firefox
//! Icon=firefox
//!
//! ```

use crate::desktop_entry::DesktopEntry;
use crate::error::DockError;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::broadcast;

/// Events emitted when the favorites change, after they were persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FavoritesEvent {
    Added(String),
    Removed(String),
}

/// A pinned application. `exec` is the identity.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteApp {
    #[serde(default)]
    pub name: Option<String>,
    pub exec: String,
    #[serde(default)]
    pub icon: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

impl FavoriteApp {
    pub fn new(name: Option<String>, exec: impl Into<String>, icon: Option<String>) -> Self {
        Self {
            name: non_empty(name),
            exec: exec.into(),
            icon: non_empty(icon),
        }
    }
}

impl From<&DesktopEntry> for FavoriteApp {
    fn from(entry: &DesktopEntry) -> Self {
        Self::new(
            Some(entry.label()),
            entry.exec.clone().unwrap_or_default(),
            entry.icon.clone(),
        )
    }
}

/// Keep a value on one line so it cannot split a record.
fn single_line(value: &str) -> String {
    value.replace(['\r', '\n'], " ")
}

/// Serialize favorites to the on-disk format.
pub fn serialize_favorites(apps: &[FavoriteApp]) -> String {
    let mut out = String::new();
    for app in apps {
        out.push_str(&format!(
            "Name={}\nExec={}\nIcon={}\n\n",
            single_line(app.name.as_deref().unwrap_or_default()),
            single_line(&app.exec),
            single_line(app.icon.as_deref().unwrap_or_default()),
        ));
    }
    out
}

/// Parse the on-disk format. Partial records are kept; stray blank lines are harmless.
pub fn parse_favorites(content: &str) -> Vec<FavoriteApp> {
    let mut apps = Vec::new();
    let mut current: Option<FavoriteApp> = None;

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            if let Some(app) = current.take() {
                apps.push(app);
            }
            continue;
        }

        let app = current.get_or_insert_with(FavoriteApp::default);
        if let Some(v) = line.strip_prefix("Name=") {
            app.name = non_empty(Some(v.to_string()));
        } else if let Some(v) = line.strip_prefix("Exec=") {
            app.exec = v.to_string();
        } else if let Some(v) = line.strip_prefix("Icon=") {
            app.icon = non_empty(Some(v.to_string()));
        }
    }

    if let Some(app) = current {
        apps.push(app);
    }

    apps
}

/// The user's pinned applications, backed by a file.
pub struct FavoritesStore {
    path: PathBuf,
    apps: Vec<FavoriteApp>,
    /// Set when an existing file could not be read; saving would lose its contents.
    read_failed: bool,
    event_tx: broadcast::Sender<FavoritesEvent>,
}

impl FavoritesStore {
    /// Empty store that will persist to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let (tx, _) = broadcast::channel(16);

        Self {
            path: path.into(),
            apps: Vec::new(),
            read_failed: false,
            event_tx: tx,
        }
    }

    /// Load from file, or return an empty store if it cannot be read.
    ///
    /// Invalid UTF-8 is replaced rather than rejected. If the file exists but
    /// can't be read, the store refuses to overwrite it.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let mut store = Self::new(path);
        match fs::read(&store.path) {
            Ok(bytes) => {
                store.apps = parse_favorites(&String::from_utf8_lossy(&bytes));
                info!(
                    "Loaded {} favorites from {}",
                    store.apps.len(),
                    store.path.display()
                );
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No favorites at {}", store.path.display());
            }
            Err(e) => {
                warn!("Cannot read favorites {}: {}", store.path.display(), e);
                store.read_failed = true;
            }
        }
        store
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn apps(&self) -> &[FavoriteApp] {
        &self.apps
    }

    pub fn contains(&self, exec: &str) -> bool {
        self.apps.iter().any(|app| app.exec == exec)
    }

    /// Subscribe to favorites changes.
    pub fn subscribe(&self) -> broadcast::Receiver<FavoritesEvent> {
        self.event_tx.subscribe()
    }

    /// Pin an app. Returns `Ok(false)` without touching the file if `exec` is already pinned.
    pub fn add(&mut self, app: FavoriteApp) -> Result<bool, DockError> {
        if self.contains(&app.exec) {
            return Ok(false);
        }

        let exec = app.exec.clone();
        self.apps.push(app);
        self.save()?;

        let _ = self.event_tx.send(FavoritesEvent::Added(exec));
        Ok(true)
    }

    /// Unpin the first app with `exec`. The file is rewritten even if nothing matched.
    pub fn remove(&mut self, exec: &str) -> Result<bool, DockError> {
        let removed = match self.apps.iter().position(|app| app.exec == exec) {
            Some(index) => {
                self.apps.remove(index);
                true
            }
            None => false,
        };

        self.save()?;

        let _ = self.event_tx.send(FavoritesEvent::Removed(exec.to_string()));
        Ok(removed)
    }

    /// Overwrite the file with the current favorites.
    /// Writes a sibling temp file first, then renames it over the target.
    pub fn save(&self) -> Result<(), DockError> {
        if self.read_failed {
            return Err(DockError::WouldOverwrite(self.path.clone()));
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, serialize_favorites(&self.apps))?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }

        debug!(
            "Saved {} favorites to {}",
            self.apps.len(),
            self.path.display()
        );
        Ok(())
    }
}
