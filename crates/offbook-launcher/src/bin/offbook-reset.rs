//! Reset Scene Partner application data.
//!
//! Clears application configuration, library data (database, voice
//! presets, models), or both. Project files are never touched.

use anyhow::{bail, Result};
use clap::Parser;
use offbook_library::{reset, Settings};
use std::path::PathBuf;
use tracing::{warn, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "offbook-reset")]
#[command(about = "Reset Scene Partner application data")]
struct Args {
    /// Reset application configuration files only
    #[arg(long)]
    config: bool,

    /// Reset library data only (database, voice presets, models)
    #[arg(long)]
    library: bool,

    /// Reset all application data
    #[arg(long)]
    all: bool,

    /// Library directory (defaults to the path saved in the app settings)
    library_path: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .init();

    if !(args.config || args.library || args.all) {
        bail!("No action specified; use --config, --library, or --all");
    }

    // An explicit path wins; otherwise fall back to the library the app
    // last used.
    let library_path = args.library_path.or_else(|| {
        Settings::load()
            .map(|s| s.library_path)
            .unwrap_or_default()
    });

    let removed = if args.all {
        if library_path.is_none() {
            warn!("No library path known; resetting configuration only");
        }
        reset::reset_all(library_path.as_deref())?
    } else if args.library {
        let Some(root) = library_path.as_deref() else {
            bail!("No library path known; pass one as an argument");
        };
        reset::reset_library_data(root)?
    } else {
        reset::reset_app_config()?
    };

    if removed.is_empty() {
        println!("Nothing to remove.");
    } else {
        for path in &removed {
            println!("Removed {}", path.display());
        }
        println!("Reset complete ({} item(s) removed).", removed.len());
    }

    Ok(())
}
