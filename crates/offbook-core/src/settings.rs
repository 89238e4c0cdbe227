//! Launcher-level settings persisted in the app support directory.
//!
//! The application splits its configuration between `config.json` (library
//! location, owned here) and `ui_config.json` (window/editor state, owned by
//! the GUI). The wire format of `config.json` is shared with the app, so
//! field names must stay stable.

use crate::config::PathsConfig;
use crate::error::Result;
use crate::persist;
use crate::platform;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const RECENT_LIBRARIES_MAX: usize = 10;

/// Settings stored in `config.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// The active library root, if one has been chosen.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub library_path: Option<PathBuf>,
    /// Most-recently-used library roots, newest first.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub recent_libraries: Vec<PathBuf>,
}

impl Settings {
    /// Path of the settings file in the app support directory.
    pub fn default_path() -> Result<PathBuf> {
        Ok(platform::app_support_dir()?.join(PathsConfig::CONFIG_FILENAME))
    }

    /// Load the settings from the app support directory.
    ///
    /// A missing file yields defaults; a corrupt file is an error rather
    /// than silently resetting the user's library choice.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path()?)
    }

    /// Load settings from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        Ok(persist::read_json(path)?.unwrap_or_default())
    }

    /// Save the settings to the app support directory.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::default_path()?)
    }

    /// Save settings to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        persist::write_json(path, self)
    }

    /// Set the active library and record it in the recents list.
    pub fn set_library_path(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        self.recent_libraries.retain(|p| p != &path);
        self.recent_libraries.insert(0, path.clone());
        self.recent_libraries.truncate(RECENT_LIBRARIES_MAX);
        self.library_path = Some(path);
    }

    /// Forget the active library without touching the recents list.
    pub fn clear_library_path(&mut self) {
        self.library_path = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");

        let mut settings = Settings::default();
        settings.set_library_path("/home/user/scripts");
        settings.save_to(&path).unwrap();

        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_reads_app_written_config() {
        // The application writes this exact shape; unknown keys from newer
        // app versions must not break the launcher.
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{"library_path": "/data/lib", "last_project": "Macbeth"}"#,
        )
        .unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.library_path, Some(PathBuf::from("/data/lib")));
    }

    #[test]
    fn test_recents_dedup_and_cap() {
        let mut settings = Settings::default();
        for i in 0..15 {
            settings.set_library_path(format!("/lib/{}", i));
        }
        settings.set_library_path("/lib/14");

        assert_eq!(settings.recent_libraries.len(), RECENT_LIBRARIES_MAX);
        assert_eq!(settings.recent_libraries[0], PathBuf::from("/lib/14"));
        assert_eq!(
            settings
                .recent_libraries
                .iter()
                .filter(|p| **p == PathBuf::from("/lib/14"))
                .count(),
            1
        );
    }
}
