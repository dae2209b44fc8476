//! Desktop entry parsing.

use log::debug;
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Keys the dock understands. Everything else is ignored.
const KNOWN_KEYS: [&str; 7] = [
    "Name",
    "Exec",
    "Icon",
    "NoDisplay",
    "Hidden",
    "OnlyShowIn",
    "NotShowIn",
];

/// Parsed from .desktop files.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DesktopEntry {
    pub name: Option<String>,
    /// Command with field codes (`%U`, `%f`, ...) and anything after them removed.
    pub exec: Option<String>,
    pub icon: Option<String>,
    pub path: PathBuf,
    pub no_display: bool,
    pub hidden: bool,
    /// Raw `;`-separated desktop list, split only when filtering.
    pub only_show_in: Option<String>,
    pub not_show_in: Option<String>,
}

impl DesktopEntry {
    /// Label shown in the launcher grid and used for searching.
    pub fn label(&self) -> String {
        self.name
            .clone()
            .or_else(|| self.exec.clone())
            .unwrap_or_else(|| self.path.to_string_lossy().into_owned())
    }

    /// Icon name, or `fallback` when the entry has none.
    pub fn icon_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self.icon.as_deref() {
            Some(icon) if !icon.is_empty() => icon,
            _ => fallback,
        }
    }

    /// Apply the NoDisplay / Hidden / OnlyShowIn / NotShowIn rules.
    pub fn is_visible(&self, current_desktop: &str) -> bool {
        if self.no_display || self.hidden {
            return false;
        }

        let listed = |list: &str| {
            desktop_tokens(list).any(|t| t.eq_ignore_ascii_case(current_desktop))
        };

        if let Some(only) = self.only_show_in.as_deref().filter(|s| !s.is_empty())
            && !listed(only)
        {
            return false;
        }

        let excluded = self
            .not_show_in
            .as_deref()
            .filter(|s| !s.is_empty())
            .is_some_and(listed);

        !excluded
    }
}

fn desktop_tokens(list: &str) -> impl Iterator<Item = &str> {
    list.split(';').map(str::trim).filter(|t| !t.is_empty())
}

fn is_true(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}

/// Parse the text of a .desktop file.
///
/// Section headers are not interpreted, so the last assignment of a key anywhere wins.
pub fn parse_desktop_entry(content: &str, path: &Path) -> Option<DesktopEntry> {
    let mut entries: HashMap<&str, &str> = HashMap::new();

    for line in content.lines() {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some((key, value)) = line.split_once('=')
            && KNOWN_KEYS.contains(&key)
        {
            entries.insert(key, value);
        }
    }

    let exec = entries.get("Exec").map(|raw| {
        let code_free = raw.split('%').next().unwrap_or_default();
        code_free.trim().to_string()
    });

    let entry = DesktopEntry {
        name: entries.get("Name").map(|s| s.to_string()),
        exec,
        icon: entries.get("Icon").map(|s| s.to_string()),
        path: path.to_path_buf(),
        no_display: entries.get("NoDisplay").is_some_and(|v| is_true(v)),
        hidden: entries.get("Hidden").is_some_and(|v| is_true(v)),
        only_show_in: entries.get("OnlyShowIn").map(|s| s.to_string()),
        not_show_in: entries.get("NotShowIn").map(|s| s.to_string()),
    };

    let empty = entry.name.is_none()
        && entry.exec.is_none()
        && entry.icon.is_none()
        && entry.only_show_in.is_none()
        && entry.not_show_in.is_none();

    if empty { None } else { Some(entry) }
}

/// Parse a .desktop file into a DesktopEntry struct.
pub fn parse_desktop_file(path: &Path) -> Option<DesktopEntry> {
    // Bad bytes on one line must not hide the whole entry.
    match fs::read(path) {
        Ok(bytes) => parse_desktop_entry(&String::from_utf8_lossy(&bytes), path),
        Err(e) => {
            debug!("Skipping unreadable {}: {}", path.display(), e);
            None
        }
    }
}
