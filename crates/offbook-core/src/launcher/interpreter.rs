//! Python interpreter location.

use crate::error::{OffBookError, Result};
use crate::platform;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Which interpreter was selected for the launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interpreter {
    /// Project-local virtual-environment interpreter.
    Venv(PathBuf),
    /// System-wide interpreter found on the search path.
    System(PathBuf),
}

impl Interpreter {
    /// Path to the interpreter executable.
    pub fn path(&self) -> &Path {
        match self {
            Interpreter::Venv(p) | Interpreter::System(p) => p,
        }
    }

    /// Consume and return the executable path.
    pub fn into_path(self) -> PathBuf {
        match self {
            Interpreter::Venv(p) | Interpreter::System(p) => p,
        }
    }

    pub fn is_venv(&self) -> bool {
        matches!(self, Interpreter::Venv(_))
    }
}

/// Select the interpreter for a launcher root.
///
/// The venv interpreter at the conventional relative path wins if the file
/// exists; absence silently falls back to the system interpreter. Only when
/// neither exists is this an error.
pub fn locate_interpreter(root: &Path) -> Result<Interpreter> {
    locate_with(root, platform::system_python)
}

/// Interpreter selection with an injectable system-interpreter probe.
///
/// Split out so both branches can be exercised against a stubbed
/// filesystem without depending on what the host has installed.
pub(crate) fn locate_with(
    root: &Path,
    system: impl FnOnce() -> Option<PathBuf>,
) -> Result<Interpreter> {
    let venv = platform::venv_python(root);
    if venv.is_file() {
        debug!("Using venv interpreter: {}", venv.display());
        return Ok(Interpreter::Venv(venv));
    }

    match system() {
        Some(path) => {
            debug!(
                "No venv at {}, falling back to system interpreter: {}",
                venv.display(),
                path.display()
            );
            Ok(Interpreter::System(path))
        }
        None => Err(OffBookError::InterpreterNotFound { venv }),
    }
}
