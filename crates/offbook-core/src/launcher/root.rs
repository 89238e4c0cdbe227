//! Launcher root resolution.
//!
//! Everything the launcher touches (venv, entry point) is addressed relative
//! to its own on-disk location, never the caller's working directory — a
//! double-clicked launcher inherits whatever CWD the desktop shell felt like.

use crate::error::{OffBookError, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Directory containing the current executable, canonicalized.
pub fn launcher_root() -> Result<PathBuf> {
    let exe = std::env::current_exe().map_err(|e| OffBookError::Io {
        message: format!("Failed to locate current executable: {}", e),
        path: None,
        source: Some(e),
    })?;

    // Resolve symlinked launchers (e.g. one installed into ~/bin) back to
    // the real install directory.
    let exe = exe.canonicalize().unwrap_or(exe);

    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| OffBookError::Other("Executable has no parent directory".to_string()))
}

/// Resolve the launcher root, preferring an explicit override.
///
/// The override must name an existing directory; it is canonicalized so
/// relative paths behave the same from any CWD once resolved.
pub fn resolve_root(overridden: Option<PathBuf>) -> Result<PathBuf> {
    match overridden {
        Some(path) => {
            if !path.exists() {
                return Err(OffBookError::FileNotFound(path));
            }
            if !path.is_dir() {
                return Err(OffBookError::NotADirectory(path));
            }
            let canonical = path.canonicalize().unwrap_or(path);
            debug!("Using root override: {}", canonical.display());
            Ok(canonical)
        }
        None => launcher_root(),
    }
}
