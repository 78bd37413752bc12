//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::ui::Reporter;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `reporter` - Sink for notices and markers
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] carrying the exit code to propagate.
    fn execute(&self, reporter: &mut dyn Reporter) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a result from an exit code.
    pub fn from_code(exit_code: i32) -> Self {
        Self {
            success: exit_code == 0,
            exit_code,
        }
    }

    /// Exit status for the process.
    ///
    /// Codes outside `0..=255` become 1, so a failure never truncates to 0.
    pub fn process_code(&self) -> u8 {
        u8::try_from(self.exit_code).unwrap_or(1)
    }
}

/// Dispatches CLI commands to their implementations.
#[derive(Debug, Default)]
pub struct CommandDispatcher;

impl CommandDispatcher {
    /// Create a new dispatcher.
    pub fn new() -> Self {
        Self
    }

    /// Dispatch and execute a command.
    ///
    /// With no subcommand, runs setup using the top-level arguments.
    pub fn dispatch(&self, cli: &Cli, reporter: &mut dyn Reporter) -> Result<CommandResult> {
        match &cli.command {
            None => {
                let cmd = super::run::RunCommand::new(cli.run.clone());
                cmd.execute(reporter)
            }
            Some(Commands::Split(args)) => {
                let cmd = super::split::SplitCommand::new(args.clone());
                cmd.execute(reporter)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(reporter)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_from_code() {
        assert_eq!(CommandResult::from_code(0), CommandResult::success());
        let failed = CommandResult::from_code(3);
        assert!(!failed.success);
        assert_eq!(failed.exit_code, 3);
    }

    #[test]
    fn process_code_keeps_byte_range() {
        assert_eq!(CommandResult::from_code(0).process_code(), 0);
        assert_eq!(CommandResult::from_code(143).process_code(), 143);
        assert_eq!(CommandResult::from_code(255).process_code(), 255);
    }

    #[test]
    fn process_code_never_wraps_failures_to_zero() {
        for code in [256, 512, 1000, -1, -256] {
            assert_eq!(CommandResult::from_code(code).process_code(), 1, "code {}", code);
        }
    }
}
