//! Off Book core — headless library for launching Scene Partner and
//! managing its app data.
//!
//! The launch sequence is deliberately linear and synchronous: resolve the
//! launcher root from the executable's own location, pick an interpreter
//! (project venv first, system fallback), then hand control to the
//! application's entry point. Alongside the launcher live the pieces the
//! maintenance binaries share: settings persistence, library-root
//! scaffolding, the packaging bundle description, and reset operations.
//!
//! # Example
//!
//! ```rust,ignore
//! use offbook_library::launcher::{self, LaunchSpec, ProcessLauncher};
//!
//! fn main() -> offbook_library::Result<()> {
//!     let root = launcher::resolve_root(None)?;
//!     let interpreter = launcher::locate_interpreter(&root)?;
//!
//!     let spec = LaunchSpec::new(&root, interpreter.into_path());
//!     let status = ProcessLauncher::run(&spec)?;
//!     std::process::exit(launcher::exit_code(&status));
//! }
//! ```

pub mod bundle;
pub mod config;
pub mod error;
pub mod launcher;
pub mod library;
pub mod persist;
pub mod platform;
pub mod reset;
pub mod settings;

// Re-export commonly used types
pub use bundle::{BundleSpec, DataDir};
pub use error::{OffBookError, Result};
pub use launcher::{Interpreter, LaunchSpec, ProcessLauncher};
pub use library::{resolve_library_root, LibraryRoot};
pub use settings::Settings;
