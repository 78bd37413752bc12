//! Run command implementation.
//!
//! The default `repo-setup [DIRECTORY]` invocation detects and runs setup.

use crate::cli::args::RunArgs;
use crate::config::RunnerConfig;
use crate::error::Result;
use crate::runner::SetupRunner;
use crate::ui::Reporter;

use super::dispatcher::{Command, CommandResult};

/// The run command implementation.
pub struct RunCommand {
    args: RunArgs,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(args: RunArgs) -> Self {
        Self { args }
    }

    /// Build the runner configuration from args and the process environment.
    pub fn config(&self) -> RunnerConfig {
        RunnerConfig::new(&self.args.directory)
            .with_installer(&self.args.installer)
            .with_markers(!self.args.no_markers)
            .from_process_env()
    }
}

impl Command for RunCommand {
    fn execute(&self, reporter: &mut dyn Reporter) -> Result<CommandResult> {
        let config = self.config();
        let outcome = SetupRunner::new(config).run(reporter);
        Ok(CommandResult::from_code(outcome.exit_code))
    }
}
