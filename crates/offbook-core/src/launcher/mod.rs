//! Application launch: root resolution, interpreter location, and process
//! invocation.
//!
//! The sequence is linear: resolve the launcher root from the executable's
//! own location, pick an interpreter (project venv first, system fallback),
//! then either replace the current process with the app or run it attached
//! and report failures.

mod failure;
mod interpreter;
mod launch;
mod root;

pub use failure::{report_failure, should_pause, stdin_is_interactive};
pub use interpreter::{locate_interpreter, Interpreter};
pub use launch::{exit_code, LaunchSpec, ProcessLauncher};
pub use root::{launcher_root, resolve_root};
