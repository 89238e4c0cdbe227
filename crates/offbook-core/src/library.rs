//! Library root layout and resolution.
//!
//! A library is a user-selected folder. Inside it the app keeps:
//!
//! ```text
//! <LIBRARY_ROOT>/
//!   projects/                # project files (any file = a project)
//!   customizations/          # user modifications shared across projects
//!     models/                # downloaded voice model assets
//!     voice_presets/         # saved voice-preset configurations
//!     resources/             # shared links and resources
//!   .rehearsal/              # app metadata
//!     projects.db
//!     attachments/
//! ```
//!
//! The launcher only scaffolds this layout; the database and its contents
//! belong to the application.

use crate::config::PathsConfig;
use crate::error::{OffBookError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// An opened library root with its conventional layout in place.
#[derive(Debug, Clone)]
pub struct LibraryRoot {
    root: PathBuf,
}

impl LibraryRoot {
    /// Open a library root, creating the conventional layout on first use.
    ///
    /// The root itself must already exist — the user picked it — but every
    /// subdirectory is created if missing, so opening is idempotent.
    pub fn open(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        if !root.exists() {
            return Err(OffBookError::LibraryMissing(root.to_path_buf()));
        }
        if !root.is_dir() {
            return Err(OffBookError::NotADirectory(root.to_path_buf()));
        }

        let root = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());
        let lib = Self { root };
        lib.ensure_layout()?;
        Ok(lib)
    }

    fn ensure_layout(&self) -> Result<()> {
        for dir in [
            self.projects_dir(),
            self.models_dir(),
            self.voice_presets_dir(),
            self.resources_dir(),
            self.attachments_dir(),
        ] {
            fs::create_dir_all(&dir).map_err(|e| OffBookError::io_with_path(e, &dir))?;
        }
        debug!("Library layout ready at {}", self.root.display());
        Ok(())
    }

    /// Whether a path already carries the app metadata marker.
    pub fn is_initialized(path: &Path) -> bool {
        path.join(PathsConfig::METADATA_DIR_NAME).exists()
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn projects_dir(&self) -> PathBuf {
        self.root.join(PathsConfig::PROJECTS_DIR_NAME)
    }

    pub fn customizations_dir(&self) -> PathBuf {
        self.root.join(PathsConfig::CUSTOMIZATIONS_DIR_NAME)
    }

    /// Downloaded voice model assets.
    pub fn models_dir(&self) -> PathBuf {
        self.customizations_dir().join(PathsConfig::MODELS_DIR_NAME)
    }

    /// Saved voice-preset configurations.
    pub fn voice_presets_dir(&self) -> PathBuf {
        self.customizations_dir()
            .join(PathsConfig::VOICE_PRESETS_DIR_NAME)
    }

    pub fn resources_dir(&self) -> PathBuf {
        self.customizations_dir()
            .join(PathsConfig::RESOURCES_DIR_NAME)
    }

    pub fn metadata_dir(&self) -> PathBuf {
        self.root.join(PathsConfig::METADATA_DIR_NAME)
    }

    pub fn attachments_dir(&self) -> PathBuf {
        self.metadata_dir().join(PathsConfig::ATTACHMENTS_DIR_NAME)
    }

    pub fn database_path(&self) -> PathBuf {
        self.metadata_dir().join(PathsConfig::DB_FILENAME)
    }
}

/// Given a user-selected directory, resolve the actual library root.
///
/// Users pick folders from a file dialog and routinely select a project's
/// folder inside `projects/`, or `projects/` itself. Resolution order:
/// an ancestor that already carries `.rehearsal/`, then stepping out of a
/// `projects/` directory, then an ancestor containing `projects/`, and
/// finally the selection as-is.
pub fn resolve_library_root(selected: &Path) -> PathBuf {
    let path = selected
        .canonicalize()
        .unwrap_or_else(|_| selected.to_path_buf());

    for candidate in path.ancestors() {
        if candidate.join(PathsConfig::METADATA_DIR_NAME).exists() {
            return candidate.to_path_buf();
        }
    }

    for candidate in path.ancestors() {
        if candidate.file_name().map(|n| n == PathsConfig::PROJECTS_DIR_NAME) == Some(true) {
            if let Some(parent) = candidate.parent() {
                if parent.exists() {
                    return parent.to_path_buf();
                }
            }
        }
    }

    for candidate in path.ancestors() {
        if candidate.join(PathsConfig::PROJECTS_DIR_NAME).is_dir() {
            return candidate.to_path_buf();
        }
    }

    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_creates_layout() {
        let temp_dir = TempDir::new().unwrap();
        let lib = LibraryRoot::open(temp_dir.path()).unwrap();

        assert!(lib.projects_dir().is_dir());
        assert!(lib.models_dir().is_dir());
        assert!(lib.voice_presets_dir().is_dir());
        assert!(lib.resources_dir().is_dir());
        assert!(lib.attachments_dir().is_dir());
        // The database itself belongs to the app.
        assert!(!lib.database_path().exists());
    }

    #[test]
    fn test_open_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        LibraryRoot::open(temp_dir.path()).unwrap();

        let marker = temp_dir
            .path()
            .join("customizations/voice_presets/alice.json");
        std::fs::write(&marker, "{}").unwrap();

        LibraryRoot::open(temp_dir.path()).unwrap();
        assert!(marker.exists(), "reopening must not disturb contents");
    }

    #[test]
    fn test_open_missing_root() {
        let temp_dir = TempDir::new().unwrap();
        let result = LibraryRoot::open(temp_dir.path().join("nope"));
        assert!(matches!(result, Err(OffBookError::LibraryMissing(_))));
    }

    #[test]
    fn test_resolve_from_inside_projects() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let nested = root.join("projects").join("hamlet");
        std::fs::create_dir_all(&nested).unwrap();

        assert_eq!(
            resolve_library_root(&nested),
            root.canonicalize().unwrap()
        );
    }

    #[test]
    fn test_resolve_prefers_metadata_marker() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        std::fs::create_dir_all(root.join(".rehearsal")).unwrap();
        let nested = root.join("somewhere").join("deep");
        std::fs::create_dir_all(&nested).unwrap();

        assert_eq!(
            resolve_library_root(&nested),
            root.canonicalize().unwrap()
        );
    }

    #[test]
    fn test_resolve_plain_directory_is_itself() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(
            resolve_library_root(temp_dir.path()),
            temp_dir.path().canonicalize().unwrap()
        );
    }
}
