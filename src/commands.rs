//! Headless front-end commands.
//!
//! Each command drives the dock context the same way the bar and the
//! launcher overlay do, and prints the result as text or JSON.

use dock_apps::{Dock, Launcher};
use serde::Serialize;
use std::error::Error;
use std::io::Write;

/// One row of the launcher grid.
#[derive(Serialize)]
struct AppRow<'a> {
    label: String,
    exec: Option<&'a str>,
    icon: &'a str,
}

/// `dock apps [QUERY]`
pub fn list_apps<L: Launcher>(
    dock: &Dock<L>,
    query: &str,
    json: bool,
    out: &mut impl Write,
) -> Result<(), Box<dyn Error>> {
    let fallback = dock.config().fallback_icon.as_str();
    let rows: Vec<AppRow> = dock
        .search(query)
        .into_iter()
        .map(|entry| AppRow {
            label: entry.label(),
            exec: entry.exec.as_deref(),
            icon: entry.icon_or(fallback),
        })
        .collect();

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&rows)?)?;
        return Ok(());
    }

    for row in &rows {
        writeln!(out, "{}\t{}", row.label, row.exec.unwrap_or_default())?;
    }
    Ok(())
}

/// `dock bar`
pub fn show_bar<L: Launcher>(
    dock: &Dock<L>,
    json: bool,
    out: &mut impl Write,
) -> Result<(), Box<dyn Error>> {
    let items = dock.bar_items();

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&items)?)?;
        return Ok(());
    }

    for item in &items {
        let marker = if item.pinned { "*" } else { " " };
        writeln!(
            out,
            "{} {}\t{}\t{}",
            marker,
            item.name.as_deref().unwrap_or(&item.exec),
            item.exec,
            item.icon
        )?;
    }
    Ok(())
}

/// `dock pin <EXEC>`
pub fn pin<L: Launcher>(
    dock: &mut Dock<L>,
    exec: &str,
    out: &mut impl Write,
) -> Result<(), Box<dyn Error>> {
    if dock.pin_exec(exec)? {
        writeln!(out, "Pinned {}", exec)?;
    } else {
        writeln!(out, "{} is already pinned", exec)?;
    }
    Ok(())
}

/// `dock unpin <EXEC>`
pub fn unpin<L: Launcher>(
    dock: &mut Dock<L>,
    exec: &str,
    out: &mut impl Write,
) -> Result<(), Box<dyn Error>> {
    if dock.unpin(exec)? {
        writeln!(out, "Unpinned {}", exec)?;
    } else {
        writeln!(out, "{} was not pinned", exec)?;
    }
    Ok(())
}

/// `dock launch <COMMAND>`
pub fn launch<L: Launcher>(dock: &Dock<L>, command: &str) {
    dock.launch(command);
}

#[cfg(test)]
mod tests {
    use super::*;
    use dock_apps::AppCatalog;
    use std::cell::RefCell;
    use std::fs;
    use std::rc::Rc;
    use tempfile::{TempDir, tempdir};

    #[derive(Clone, Default)]
    struct RecordingLauncher(Rc<RefCell<Vec<String>>>);

    impl Launcher for RecordingLauncher {
        fn launch(&self, command: &str) {
            self.0.borrow_mut().push(command.to_string());
        }
    }

    fn setup() -> (TempDir, TempDir) {
        let apps = tempdir().unwrap();
        fs::write(
            apps.path().join("code.desktop"),
            "Name=Visual Studio Code\nExec=code %F\nIcon=vscode\n",
        )
        .unwrap();
        fs::write(apps.path().join("xterm.desktop"), "Exec=xterm\n").unwrap();
        (apps, tempdir().unwrap())
    }

    fn dock_with(
        apps: &TempDir,
        config: &TempDir,
        launcher: RecordingLauncher,
    ) -> Dock<RecordingLauncher> {
        fs::write(
            config.path().join("dock.json"),
            r#"{ "builtin_launchers": [] }"#,
        )
        .unwrap();
        let catalog = AppCatalog::with_directories(vec![apps.path().to_path_buf()], "");
        Dock::open_in(config.path(), catalog, launcher)
    }

    fn dock(apps: &TempDir, config: &TempDir) -> Dock<RecordingLauncher> {
        dock_with(apps, config, RecordingLauncher::default())
    }

    fn output(run: impl FnOnce(&mut Vec<u8>) -> Result<(), Box<dyn Error>>) -> String {
        let mut buf = Vec::new();
        run(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_apps_lists_filtered_entries() {
        let (apps, config) = setup();
        let dock = dock(&apps, &config);

        let all = output(|out| list_apps(&dock, "", false, out));
        assert_eq!(all, "Visual Studio Code\tcode\nxterm\txterm\n");

        let code = output(|out| list_apps(&dock, "stud", false, out));
        assert_eq!(code, "Visual Studio Code\tcode\n");

        assert!(output(|out| list_apps(&dock, "vs", false, out)).is_empty());
    }

    #[test]
    fn test_apps_json_uses_fallback_icon() {
        let (apps, config) = setup();
        let dock = dock(&apps, &config);

        let json = output(|out| list_apps(&dock, "xterm", true, out));
        let rows: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(rows[0]["label"], "xterm");
        assert_eq!(rows[0]["icon"], "application-x-executable");
    }

    #[test]
    fn test_pin_then_bar_then_unpin() {
        let (apps, config) = setup();
        let mut dock = dock(&apps, &config);

        assert_eq!(output(|out| pin(&mut dock, "code", out)), "Pinned code\n");
        assert_eq!(
            output(|out| pin(&mut dock, "code", out)),
            "code is already pinned\n"
        );
        assert_eq!(
            output(|out| show_bar(&dock, false, out)),
            "* Visual Studio Code\tcode\tvscode\n"
        );
        assert_eq!(output(|out| unpin(&mut dock, "code", out)), "Unpinned code\n");
        assert_eq!(
            output(|out| unpin(&mut dock, "code", out)),
            "code was not pinned\n"
        );
        assert!(output(|out| show_bar(&dock, false, out)).is_empty());
    }

    #[test]
    fn test_pin_unknown_is_an_error() {
        let (apps, config) = setup();
        let mut dock = dock(&apps, &config);

        let mut buf = Vec::new();
        assert!(pin(&mut dock, "emacs", &mut buf).is_err());
    }

    #[test]
    fn test_launch_goes_through_launcher() {
        let (apps, config) = setup();
        let launcher = RecordingLauncher::default();
        let dock = dock_with(&apps, &config, launcher.clone());

        launch(&dock, "xterm");
        assert_eq!(*launcher.0.borrow(), ["xterm"]);
    }
}
