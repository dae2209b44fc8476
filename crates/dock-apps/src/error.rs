//! Error types for dock-apps

/// Errors surfaced by the dock core.
///
/// Missing or unreadable inputs are not errors; they degrade to empty results.
#[derive(Debug, thiserror::Error)]
pub enum DockError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No application with command '{0}'")]
    UnknownApp(String),

    #[error("Refusing to overwrite unreadable {}", .0.display())]
    WouldOverwrite(std::path::PathBuf),
}
