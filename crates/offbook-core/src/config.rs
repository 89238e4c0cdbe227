//! Centralized configuration for the Scene Partner launcher.
//!
//! Path conventions here mirror what the packaged application expects on
//! disk; changing any of them breaks existing installs.

/// Application-level configuration.
pub struct AppConfig;

impl AppConfig {
    pub const APP_NAME: &'static str = "Scene Partner";
    /// Display name installed as argv[0] by the replacing launch on Unix.
    pub const PROCESS_TITLE: &'static str = "Scene Partner";
    /// App-support directory name, shared with the application itself.
    pub const SUPPORT_DIR_NAME: &'static str = "ActorRehearsal";
}

/// Shared directory and file name conventions.
pub struct PathsConfig;

impl PathsConfig {
    // Launcher root
    pub const VENV_DIR_NAME: &'static str = ".venv";
    pub const ENTRY_POINT_NAME: &'static str = "main.py";

    // App support directory
    pub const CONFIG_FILENAME: &'static str = "config.json";
    pub const UI_CONFIG_FILENAME: &'static str = "ui_config.json";

    // Library root layout
    pub const PROJECTS_DIR_NAME: &'static str = "projects";
    pub const CUSTOMIZATIONS_DIR_NAME: &'static str = "customizations";
    pub const MODELS_DIR_NAME: &'static str = "models";
    pub const VOICE_PRESETS_DIR_NAME: &'static str = "voice_presets";
    pub const RESOURCES_DIR_NAME: &'static str = "resources";
    pub const METADATA_DIR_NAME: &'static str = ".rehearsal";
    pub const DB_FILENAME: &'static str = "projects.db";
    pub const ATTACHMENTS_DIR_NAME: &'static str = "attachments";
}
