//! Delegated process execution.

use crate::error::{Result, SetupError};
use std::ffi::OsString;
use std::io::Write;
use std::process::{Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

/// A program invocation: executable plus arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Program to execute (looked up on PATH when not a path).
    pub program: OsString,

    /// Arguments passed to the program.
    pub args: Vec<OsString>,
}

impl Invocation {
    /// Create an invocation with no arguments.
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append several arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Render the invocation for display.
    pub fn display(&self) -> String {
        std::iter::once(&self.program)
            .chain(self.args.iter())
            .map(|s| s.to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Result of running a delegated process.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code as a shell would report it.
    pub exit_code: i32,

    /// Execution duration.
    pub duration: Duration,
}

impl CommandResult {
    /// Whether the process exited with status 0.
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Run an invocation to completion with inherited stdio, environment and
/// working directory.
///
/// Stdout is flushed first so anything already printed by this process
/// stays ahead of the child's output.
pub fn execute(invocation: &Invocation) -> Result<CommandResult> {
    let start = Instant::now();
    let _ = std::io::stdout().flush();
    let _ = std::io::stderr().flush();

    let mut cmd = Command::new(&invocation.program);
    cmd.args(&invocation.args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    tracing::debug!(command = %invocation.display(), "spawning delegated process");

    let status = cmd.status().map_err(|source| SetupError::Spawn {
        program: invocation.program.to_string_lossy().into_owned(),
        source,
    })?;

    let exit_code = exit_code_of(status);
    let duration = start.elapsed();
    tracing::debug!(exit_code, ?duration, "delegated process finished");

    Ok(CommandResult {
        exit_code,
        duration,
    })
}

/// Convert an exit status to the code a shell would report.
///
/// A process killed by a signal reports `128 + signal`.
pub fn exit_code_of(status: ExitStatus) -> i32 {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invocation_display_joins_args() {
        let inv = Invocation::new("pip").args(["install", "-r", "requirements.txt"]);
        assert_eq!(inv.display(), "pip install -r requirements.txt");
    }

    #[cfg(unix)]
    #[test]
    fn execute_reports_success() {
        let result = execute(&Invocation::new("true")).unwrap();
        assert!(result.success());
        assert_eq!(result.exit_code, 0);
    }

    #[cfg(unix)]
    #[test]
    fn execute_reports_exit_code() {
        let inv = Invocation::new("sh").args(["-c", "exit 7"]);
        let result = execute(&inv).unwrap();
        assert!(!result.success());
        assert_eq!(result.exit_code, 7);
    }

    #[cfg(unix)]
    #[test]
    fn signal_maps_to_128_plus_signal() {
        let inv = Invocation::new("sh").args(["-c", "kill -TERM $$"]);
        let result = execute(&inv).unwrap();
        assert_eq!(result.exit_code, 128 + 15);
    }

    #[test]
    fn missing_program_is_spawn_error() {
        let err = execute(&Invocation::new("repo-setup-no-such-program")).unwrap_err();
        assert!(matches!(err, SetupError::Spawn { .. }));
        assert_eq!(err.shell_exit_code(), 127);
    }

    #[test]
    fn command_result_tracks_duration() {
        let result = CommandResult {
            exit_code: 0,
            duration: Duration::from_millis(5),
        };
        assert!(result.success());
        assert_eq!(result.duration.as_millis(), 5);
    }
}
