//! App Catalog implementation.

use crate::desktop_entry::{DesktopEntry, parse_desktop_file};
use crate::paths::{current_desktop, get_application_directories};
use crate::search::matches;
use log::{debug, info};

use std::path::PathBuf;
use std::sync::OnceLock;

const DESKTOP_SUFFIX: &str = ".desktop";

/// The launchable application catalog.
///
/// Scanned once on first [`AppCatalog::load`]; there is no refresh.
pub struct AppCatalog {
    /// Directories scanned in order.
    directories: Vec<PathBuf>,
    /// Desktop identifier used for OnlyShowIn / NotShowIn.
    current_desktop: String,
    /// Visible entries in display order.
    entries: OnceLock<Vec<DesktopEntry>>,
}

impl AppCatalog {
    /// Catalog over the standard directories for the running desktop.
    pub fn new() -> Self {
        Self::with_directories(get_application_directories(), current_desktop())
    }

    pub fn with_directories(directories: Vec<PathBuf>, current_desktop: impl Into<String>) -> Self {
        Self {
            directories,
            current_desktop: current_desktop.into(),
            entries: OnceLock::new(),
        }
    }

    /// Scan on the first call, return the cached entries afterwards.
    pub fn load(&self) -> &[DesktopEntry] {
        self.entries.get_or_init(|| self.scan_desktop_files())
    }

    pub fn is_loaded(&self) -> bool {
        self.entries.get().is_some()
    }

    pub fn current_desktop(&self) -> &str {
        &self.current_desktop
    }

    pub fn len(&self) -> usize {
        self.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.load().is_empty()
    }

    /// Entries whose label matches `query`, in catalog order.
    pub fn search(&self, query: &str) -> Vec<&DesktopEntry> {
        self.load()
            .iter()
            .filter(|entry| matches(&entry.label(), query))
            .collect()
    }

    /// First entry launching exactly `exec`.
    pub fn find_by_exec(&self, exec: &str) -> Option<&DesktopEntry> {
        self.load()
            .iter()
            .find(|entry| entry.exec.as_deref() == Some(exec))
    }

    fn scan_desktop_files(&self) -> Vec<DesktopEntry> {
        info!(
            "Scanning app catalog (desktop: {:?})...",
            self.current_desktop
        );
        let mut entries = Vec::new();

        for dir in &self.directories {
            if !dir.is_dir() {
                continue;
            }

            let walker = walkdir::WalkDir::new(dir)
                .follow_links(true)
                .min_depth(1)
                .max_depth(1)
                .sort_by_file_name();

            for entry in walker.into_iter().filter_map(|e| e.ok()) {
                let is_desktop_file = entry
                    .file_name()
                    .as_encoded_bytes()
                    .ends_with(DESKTOP_SUFFIX.as_bytes());
                if !is_desktop_file {
                    continue;
                }

                let Some(app) = parse_desktop_file(entry.path()) else {
                    continue;
                };

                if app.is_visible(&self.current_desktop) {
                    entries.push(app);
                } else {
                    debug!("Filtered out {}", entry.path().display());
                }
            }
        }

        info!("App catalog loaded {} entries.", entries.len());
        entries
    }
}

impl Default for AppCatalog {
    fn default() -> Self {
        Self::new()
    }
}
