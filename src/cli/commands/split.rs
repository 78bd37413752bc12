//! Split command implementation.
//!
//! `repo-setup split` reads output captured from a run framed by setup
//! markers and reports the setup phase and the command phase separately.

use std::path::Path;

use serde::Serialize;

use crate::cli::args::SplitArgs;
use crate::error::{Result, SetupError};
use crate::markers::{split_run, SplitRun};
use crate::ui::Reporter;

use super::dispatcher::{Command, CommandResult};

/// JSON shape printed by `split --json`.
#[derive(Debug, Serialize)]
struct SplitReport<'a> {
    #[serde(flatten)]
    run: &'a SplitRun,
    exit_code: i32,
}

/// The split command implementation.
pub struct SplitCommand {
    args: SplitArgs,
}

impl SplitCommand {
    /// Create a new split command.
    pub fn new(args: SplitArgs) -> Self {
        Self { args }
    }

    /// Read the captured streams and split them.
    pub fn split(&self) -> Result<SplitRun> {
        let stdout = read_log(&self.args.stdout)?;
        let stderr = match &self.args.stderr {
            Some(path) => read_log(path)?,
            None => String::new(),
        };
        Ok(split_run(&stdout, &stderr, self.args.exit_code))
    }
}

fn read_log(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|source| SetupError::InvalidLog {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

impl Command for SplitCommand {
    fn execute(&self, reporter: &mut dyn Reporter) -> Result<CommandResult> {
        let run = self.split()?;
        let exit_code = run.exit_code();

        if self.args.json {
            let report = SplitReport {
                run: &run,
                exit_code,
            };
            let json = serde_json::to_string_pretty(&report).map_err(anyhow::Error::from)?;
            println!("{}", json);
        } else {
            reporter.notice(&format!("setup:   {}", run.setup));
            reporter.notice(&format!("command: {}", run.command));
        }

        Ok(CommandResult::from_code(exit_code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockReporter;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn args(stdout: PathBuf, stderr: Option<PathBuf>, exit_code: i32) -> SplitArgs {
        SplitArgs {
            stdout,
            stderr,
            exit_code,
            json: false,
        }
    }

    #[test]
    fn splits_captured_files() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("out.log");
        let err = temp.path().join("err.log");
        fs::write(&out, "::setup:start::\nok\n::setup:end:0::\n2 passed\n").unwrap();
        fs::write(&err, "::setup:start::\n::setup:end:0::\n").unwrap();

        let cmd = SplitCommand::new(args(out, Some(err), 0));
        let mut reporter = MockReporter::new();
        let result = cmd.execute(&mut reporter).unwrap();

        assert!(result.success);
        assert_eq!(
            reporter.stdout(),
            ["setup:   SUCCESS", "command: SUCCESS"]
        );
    }

    #[test]
    fn failed_setup_sets_exit_code() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("out.log");
        fs::write(&out, "::setup:start::\nboom\n::setup:end:2::\n").unwrap();

        let cmd = SplitCommand::new(args(out, None, 2));
        let result = cmd.execute(&mut MockReporter::new()).unwrap();

        assert_eq!(result.exit_code, 2);
    }

    #[test]
    fn missing_log_is_an_error() {
        let temp = TempDir::new().unwrap();
        let cmd = SplitCommand::new(args(temp.path().join("nope.log"), None, 0));

        let err = cmd.split().unwrap_err();
        assert!(matches!(err, SetupError::InvalidLog { .. }));
    }

    #[test]
    fn report_serializes_both_phases() {
        let run = split_run("::setup:start::\n::setup:end:0::\nok\n", "", 0);
        let report = SplitReport {
            run: &run,
            exit_code: run.exit_code(),
        };
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["setup"]["exit_code"], 0);
        assert_eq!(value["command"]["stdout"], "ok");
        assert_eq!(value["exit_code"], 0);
    }
}
