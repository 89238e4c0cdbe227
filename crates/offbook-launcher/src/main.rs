//! Scene Partner launcher.
//!
//! Native replacement for the per-platform launcher scripts: resolves its
//! own directory, prefers the project-local venv interpreter, and hands
//! control to the application's entry point. By default the launcher
//! replaces itself with the app; `--attach` keeps it around to report
//! failures to double-click users.

use anyhow::Result;
use clap::Parser;
use offbook_library::launcher::{self, LaunchSpec, ProcessLauncher};
use std::path::PathBuf;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "offbook-launch")]
#[command(about = "Launcher for Scene Partner")]
struct Args {
    /// Launcher root directory (defaults to the executable's directory)
    #[arg(long)]
    root: Option<PathBuf>,

    /// Run the app as a child process and keep the terminal open on failure
    #[arg(long)]
    attach: bool,

    /// Process display name for the replacing launch (Unix only)
    #[arg(long, default_value = "Scene Partner")]
    title: String,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Arguments forwarded verbatim to the application
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Quiet by default: the launcher's own chatter would precede every app
    // start in the user's terminal.
    let log_level = if args.debug { Level::DEBUG } else { Level::WARN };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .init();

    let root = launcher::resolve_root(args.root)?;
    debug!("Launcher root: {}", root.display());

    let interpreter = launcher::locate_interpreter(&root)?;
    debug!(
        "Interpreter: {} (venv: {})",
        interpreter.path().display(),
        interpreter.is_venv()
    );

    let spec = LaunchSpec::new(&root, interpreter.into_path())
        .with_args(args.args)
        .with_title(Some(args.title));

    if args.attach {
        // The child owns Ctrl-C; the launcher stays alive to report the
        // outcome instead of dying with the signal.
        ctrlc::set_handler(|| {})?;

        let status = ProcessLauncher::run(&spec)?;
        if launcher::should_pause(status.success(), launcher::stdin_is_interactive()) {
            launcher::report_failure(&status);
        }
        std::process::exit(launcher::exit_code(&status));
    }

    // Replacing launch: only ever returns on failure.
    match ProcessLauncher::exec(&spec) {
        Ok(never) => match never {},
        Err(e) => Err(e.into()),
    }
}
