//! Error types for repo-setup operations.
//!
//! This module defines [`SetupError`], the error type used by the library,
//! and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! The setup runner itself never returns an error: every failure of the
//! delegated process, including a failure to spawn it, becomes an exit code.
//! `SetupError` covers the surrounding tooling (reading captured logs,
//! writing completions) where a failure has no exit code to borrow.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for repo-setup operations.
#[derive(Debug, Error)]
pub enum SetupError {
    /// The delegated program could not be started.
    #[error("Failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// A captured log could not be read.
    #[error("Failed to read log {path}: {source}")]
    InvalidLog {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The installer command was empty.
    #[error("Installer command is empty")]
    EmptyInstaller,

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SetupError {
    /// Exit code a POSIX shell would report for this failure.
    ///
    /// 127 when the program does not exist, 126 when it exists but cannot
    /// be executed, 1 for anything unrelated to starting a process.
    pub fn shell_exit_code(&self) -> i32 {
        match self {
            SetupError::Spawn { source, .. } => match source.kind() {
                std::io::ErrorKind::NotFound => 127,
                _ => 126,
            },
            _ => 1,
        }
    }
}

/// Result type alias for repo-setup operations.
pub type Result<T> = std::result::Result<T, SetupError>;
