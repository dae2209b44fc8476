//! dock - headless front-end for the dock core
//!
//! Lists and searches installed applications, manages the favorites shown in
//! the bar and launches commands, using the same state the GUI shell uses.

mod commands;

use clap::{Parser, Subcommand};
use dock_apps::{AppCatalog, Dock, ShellLauncher};
use log::debug;
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dock")]
#[command(about = "Favorites, app catalog and launcher for the dock")]
struct Args {
    /// Directory holding favorites.conf and dock.json
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List visible applications, optionally filtered
    Apps {
        #[arg(default_value = "")]
        query: String,
    },
    /// Show the dock bar: built-in launchers, then favorites
    Bar,
    /// Pin the application launched by EXEC
    Pin { exec: String },
    /// Unpin EXEC
    Unpin { exec: String },
    /// Launch a command and return immediately
    Launch { command: String },
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    debug!("Running {:?}", args.command);

    let mut dock = match &args.config_dir {
        Some(dir) => Dock::open_in(dir, AppCatalog::new(), ShellLauncher),
        None => Dock::open(ShellLauncher),
    };
    let mut out = std::io::stdout().lock();

    match args.command {
        Command::Apps { query } => commands::list_apps(&dock, &query, args.json, &mut out)?,
        Command::Bar => commands::show_bar(&dock, args.json, &mut out)?,
        Command::Pin { exec } => commands::pin(&mut dock, &exec, &mut out)?,
        Command::Unpin { exec } => commands::unpin(&mut dock, &exec, &mut out)?,
        Command::Launch { command } => commands::launch(&dock, &command),
    }

    Ok(())
}
