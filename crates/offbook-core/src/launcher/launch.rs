//! Launch configuration and process invocation.

use crate::config::{AppConfig, PathsConfig};
use crate::error::{OffBookError, Result};
use std::collections::HashMap;
use std::convert::Infallible;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};
use tracing::{debug, info};

#[cfg(unix)]
use std::os::unix::process::CommandExt;

/// Configuration for one application launch.
#[derive(Debug, Clone)]
pub struct LaunchSpec {
    /// Launcher root; the child's working directory.
    pub root: PathBuf,
    /// Interpreter executable to invoke.
    pub interpreter: PathBuf,
    /// Entry-point script, `main.py` under the root.
    pub entry_point: PathBuf,
    /// Opaque pass-through arguments, forwarded verbatim and in order.
    pub args: Vec<String>,
    /// Extra environment variables for the child.
    pub env_vars: HashMap<String, String>,
    /// Display name installed as argv[0] on Unix launches, so the desktop
    /// shell shows the app's name instead of "python".
    pub process_title: Option<String>,
}

impl LaunchSpec {
    /// Create a launch spec with the conventional entry point.
    pub fn new(root: impl AsRef<Path>, interpreter: impl Into<PathBuf>) -> Self {
        let root = root.as_ref().to_path_buf();
        let entry_point = root.join(PathsConfig::ENTRY_POINT_NAME);

        Self {
            root,
            interpreter: interpreter.into(),
            entry_point,
            args: Vec::new(),
            env_vars: HashMap::new(),
            process_title: Some(AppConfig::PROCESS_TITLE.to_string()),
        }
    }

    /// Set the pass-through arguments.
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    /// Add a pass-through argument.
    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Add an environment variable.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Set or clear the process display title.
    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.process_title = title;
        self
    }

    /// Check that the interpreter and entry point exist before any process
    /// is created, so the user gets a readable message instead of the OS's
    /// native spawn failure.
    pub fn validate(&self) -> Result<()> {
        if !self.interpreter.exists() {
            return Err(OffBookError::FileNotFound(self.interpreter.clone()));
        }
        if !self.entry_point.exists() {
            return Err(OffBookError::EntryPointMissing(self.entry_point.clone()));
        }
        Ok(())
    }

    /// The argument vector as the child will receive it (after argv[0]).
    pub fn argv(&self) -> Vec<String> {
        let mut argv = vec![self.entry_point.to_string_lossy().into_owned()];
        argv.extend(self.args.iter().cloned());
        argv
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.interpreter);

        // The display title rides in argv[0], ahead of the interpreter
        // path, so `ps` and the desktop shell show the app's name. Only
        // Unix exposes argv[0]; elsewhere no override is attempted.
        #[cfg(unix)]
        if let Some(title) = &self.process_title {
            cmd.arg0(title);
        }

        cmd.arg(&self.entry_point);
        cmd.args(&self.args);
        cmd.current_dir(&self.root);
        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }
        cmd
    }
}

/// Process launcher for the application.
pub struct ProcessLauncher;

impl ProcessLauncher {
    /// Run the application attached, as a child process, and return its exit
    /// status. Stdio is inherited so the app's output stays in the user's
    /// terminal.
    pub fn run(spec: &LaunchSpec) -> Result<ExitStatus> {
        spec.validate()?;

        info!(
            "Launching {} {}",
            spec.interpreter.display(),
            spec.argv().join(" ")
        );

        let status = spec.command().status().map_err(|e| OffBookError::LaunchFailed {
            message: format!("Failed to spawn {}: {}", spec.interpreter.display(), e),
        })?;

        debug!("Application exited with {}", status);
        Ok(status)
    }

    /// Replace the current process image with the application.
    ///
    /// On Unix this uses `execv`; no parent process remains, so the app's
    /// eventual exit code is its own. Returns only on failure.
    ///
    /// On other platforms the launch degrades to spawn-and-wait and this
    /// function exits the process with the child's code instead of
    /// returning.
    pub fn exec(spec: &LaunchSpec) -> Result<Infallible> {
        spec.validate()?;

        #[cfg(unix)]
        {
            info!(
                "Replacing process with {} {}",
                spec.interpreter.display(),
                spec.argv().join(" ")
            );

            // exec only returns on failure.
            let err = spec.command().exec();
            Err(OffBookError::LaunchFailed {
                message: format!("exec {} failed: {}", spec.interpreter.display(), err),
            })
        }

        #[cfg(not(unix))]
        {
            let status = Self::run(spec)?;
            std::process::exit(exit_code(&status));
        }
    }
}

/// Map an exit status to the code the launcher itself should exit with.
///
/// Signal deaths on Unix follow the shell convention of 128 + signal.
pub fn exit_code(status: &ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
