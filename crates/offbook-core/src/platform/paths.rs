//! Platform-specific path utilities.
//!
//! This module provides functions to get platform-specific paths for:
//! - The project-local virtual-environment interpreter
//! - A system-wide Python interpreter on the search path
//! - The per-user app-support directory

use crate::config::{AppConfig, PathsConfig};
use crate::error::{OffBookError, Result};
use std::path::{Path, PathBuf};

/// Get the path to the Python executable within the project-local venv.
///
/// # Platform Behavior
/// - **Linux/macOS**: `{base}/.venv/bin/python`
/// - **Windows**: `{base}/.venv/Scripts/python.exe`
pub fn venv_python(base: &Path) -> PathBuf {
    #[cfg(unix)]
    {
        base.join(PathsConfig::VENV_DIR_NAME)
            .join("bin")
            .join("python")
    }
    #[cfg(windows)]
    {
        base.join(PathsConfig::VENV_DIR_NAME)
            .join("Scripts")
            .join("python.exe")
    }
}

/// Locate a command on the system search path.
///
/// # Platform Behavior
/// - **Linux/macOS**: Uses the `which` command
/// - **Windows**: Uses the `where` command
///
/// Returns the first matching path, or `None` if the command is not found.
pub fn command_on_path(cmd: &str) -> Option<PathBuf> {
    #[cfg(unix)]
    let output = std::process::Command::new("which").arg(cmd).output();

    #[cfg(windows)]
    let output = std::process::Command::new("where").arg(cmd).output();

    let output = output.ok()?;
    if !output.status.success() {
        return None;
    }

    // `where` may print several matches; the first line is the one the shell
    // would run.
    let stdout = String::from_utf8_lossy(&output.stdout);
    let first = stdout.lines().next()?.trim();
    if first.is_empty() {
        None
    } else {
        Some(PathBuf::from(first))
    }
}

/// Find a system-wide Python interpreter on the search path.
///
/// # Platform Behavior
/// - **Linux/macOS**: tries `python3`, then `python`
/// - **Windows**: tries `python`, then `python3`
pub fn system_python() -> Option<PathBuf> {
    #[cfg(unix)]
    const CANDIDATES: [&str; 2] = ["python3", "python"];

    #[cfg(windows)]
    const CANDIDATES: [&str; 2] = ["python", "python3"];

    CANDIDATES.iter().find_map(|cmd| command_on_path(cmd))
}

/// Get the per-user app-support directory for Scene Partner.
///
/// This is the well-known location shared with the application itself for
/// `config.json` and `ui_config.json`.
///
/// # Platform Behavior
/// - **Linux**: `~/.config/ActorRehearsal`
/// - **Windows**: `%APPDATA%\ActorRehearsal`
/// - **macOS**: `~/Library/Application Support/ActorRehearsal`
pub fn app_support_dir() -> Result<PathBuf> {
    let config_dir = dirs::config_dir().ok_or_else(|| OffBookError::Config {
        message: "Could not determine platform config directory".to_string(),
    })?;
    Ok(config_dir.join(AppConfig::SUPPORT_DIR_NAME))
}
