//! Platform-specific path and command utilities.

mod paths;

pub use paths::{app_support_dir, command_on_path, system_python, venv_python};
