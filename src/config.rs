//! Runner configuration.
//!
//! Configuration comes from two places: parsed CLI arguments and the process
//! environment. The environment is read through a lookup function so tests
//! never have to mutate the real one.

use std::ffi::OsString;
use std::path::PathBuf;

use crate::error::{Result, SetupError};
use crate::shell::Invocation;

/// Environment variable that disables detection and forces success.
pub const SKIP_ENV: &str = "SKIP_REPO_SETUP";

/// Environment variable overriding the package installer command.
pub const INSTALLER_ENV: &str = "REPO_SETUP_INSTALLER";

/// Installer used when none is configured.
pub const DEFAULT_INSTALLER: &str = "pip";

/// Everything a setup run needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Directory probed for setup artifacts.
    pub directory: PathBuf,

    /// Skip detection entirely and succeed.
    pub skip: bool,

    /// Frame the run with start/end markers.
    pub markers: bool,

    /// Installer program followed by its leading arguments.
    pub installer: Vec<String>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            skip: false,
            markers: true,
            installer: vec![DEFAULT_INSTALLER.to_string()],
        }
    }
}

impl RunnerConfig {
    /// Create a configuration for `directory` with defaults elsewhere.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            ..Default::default()
        }
    }

    /// Apply environment overrides through `lookup`.
    ///
    /// `SKIP_REPO_SETUP` counts as set for any non-empty value, including
    /// `0` and `false`.
    pub fn with_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        self.skip = lookup(SKIP_ENV).is_some_and(|v| !v.is_empty());
        self
    }

    /// Apply environment overrides from the real process environment.
    pub fn from_process_env(self) -> Self {
        self.with_env(|key| std::env::var_os(key))
    }

    /// Set the installer from a whitespace-separated command line.
    pub fn with_installer(mut self, command: &str) -> Self {
        self.installer = command.split_whitespace().map(str::to_string).collect();
        self
    }

    /// Set whether markers frame the run.
    pub fn with_markers(mut self, markers: bool) -> Self {
        self.markers = markers;
        self
    }

    /// Build an installer invocation with `args` appended.
    pub fn installer_invocation<I, S>(&self, args: I) -> Result<Invocation>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let (program, leading) = self
            .installer
            .split_first()
            .ok_or(SetupError::EmptyInstaller)?;
        Ok(Invocation::new(program).args(leading).args(args))
    }
}
