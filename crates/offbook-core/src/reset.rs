//! App-data reset operations.
//!
//! Three scopes, matching what support asks users to clear: configuration
//! files in the app support directory, library data (database, voice
//! presets, models), or everything. Missing pieces are skipped, not errors
//! — reset must work on half-broken installs.

use crate::config::PathsConfig;
use crate::error::{OffBookError, Result};
use crate::platform;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Remove the application configuration files from the app support
/// directory. Returns the paths that were actually removed.
pub fn reset_app_config() -> Result<Vec<PathBuf>> {
    reset_app_config_in(&platform::app_support_dir()?)
}

/// Remove configuration files from an explicit support directory.
pub fn reset_app_config_in(support_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut removed = Vec::new();

    for filename in [PathsConfig::CONFIG_FILENAME, PathsConfig::UI_CONFIG_FILENAME] {
        let path = support_dir.join(filename);
        if path.exists() {
            fs::remove_file(&path).map_err(|e| OffBookError::io_with_path(e, &path))?;
            info!("Removed {}", path.display());
            removed.push(path);
        }
    }

    Ok(removed)
}

/// Remove library data: the project database, attachments, voice presets,
/// and voice models. Project files themselves are never touched.
///
/// Returns the paths that were actually removed.
pub fn reset_library_data(library_root: &Path) -> Result<Vec<PathBuf>> {
    if !library_root.exists() {
        return Err(OffBookError::LibraryMissing(library_root.to_path_buf()));
    }

    let mut removed = Vec::new();
    let metadata_dir = library_root.join(PathsConfig::METADATA_DIR_NAME);

    let db_file = metadata_dir.join(PathsConfig::DB_FILENAME);
    if db_file.exists() {
        fs::remove_file(&db_file).map_err(|e| OffBookError::io_with_path(e, &db_file))?;
        info!("Removed database {}", db_file.display());
        removed.push(db_file);
    }

    let attachments = metadata_dir.join(PathsConfig::ATTACHMENTS_DIR_NAME);
    if attachments.exists() {
        fs::remove_dir_all(&attachments)
            .map_err(|e| OffBookError::io_with_path(e, &attachments))?;
        info!("Removed attachments {}", attachments.display());
        removed.push(attachments);
    }

    let customizations = library_root.join(PathsConfig::CUSTOMIZATIONS_DIR_NAME);
    for name in [
        PathsConfig::VOICE_PRESETS_DIR_NAME,
        PathsConfig::MODELS_DIR_NAME,
    ] {
        let dir = customizations.join(name);
        if dir.exists() {
            fs::remove_dir_all(&dir).map_err(|e| OffBookError::io_with_path(e, &dir))?;
            info!("Removed {}", dir.display());
            removed.push(dir);
        }
    }

    Ok(removed)
}

/// Remove all application data: configuration plus library data when a
/// library root is known.
pub fn reset_all(library_root: Option<&Path>) -> Result<Vec<PathBuf>> {
    let mut removed = reset_app_config()?;
    if let Some(root) = library_root {
        removed.extend(reset_library_data(root)?);
    }
    Ok(removed)
}
