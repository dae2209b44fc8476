//! Fire-and-forget process launching.

use log::{debug, warn};
use std::process::{Command, Stdio};

/// Something that can start an application from its command line.
///
/// Implementations must not block the caller and never report failure.
pub trait Launcher {
    fn launch(&self, command: &str);
}

/// Runs commands through `sh -c`, detached from the dock.
#[derive(Clone, Copy, Debug, Default)]
pub struct ShellLauncher;

impl Launcher for ShellLauncher {
    fn launch(&self, command: &str) {
        let command = command.trim();
        if command.is_empty() {
            return;
        }

        let spawned = Command::new("sh")
            .args(["-c", command])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        match spawned {
            Ok(mut child) => {
                debug!("Launched '{}' (pid {})", command, child.id());
                // Reap in the background so exited children don't linger as zombies.
                std::thread::spawn(move || {
                    let _ = child.wait();
                });
            }
            Err(e) => warn!("Failed to launch '{}': {}", command, e),
        }
    }
}
