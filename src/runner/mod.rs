//! Setup run orchestration.
//!
//! [`SetupRunner`] drives one run through
//! `Idle -> Detecting -> {Skipped | Running(strategy)} -> Completed(code)`:
//! it probes the target directory, delegates to at most one process, and
//! frames the whole thing with markers when configured to.
//!
//! The runner never fails on its own. Whatever happens to the delegated
//! process, including failing to start, ends as an exit code, and the end
//! marker is always written.

use std::ffi::OsStr;
use std::path::Path;

use crate::config::RunnerConfig;
use crate::detection::{detect_strategy, SetupStrategy};
use crate::shell::{execute, make_executable, Invocation};
use crate::ui::Reporter;

/// Phase of a single run, logged as the runner moves through it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Detecting,
    Skipped,
    Running(SetupStrategy),
    Completed(i32),
}

/// What happened during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    /// Strategy that ran; `None` when the skip override was set.
    pub strategy: Option<SetupStrategy>,

    /// Exit code of the run, also written in the end marker.
    pub exit_code: i32,
}

impl RunOutcome {
    /// Whether the run was short-circuited by the skip override.
    pub fn skipped(&self) -> bool {
        self.strategy.is_none()
    }
}

/// Runs setup for one directory.
pub struct SetupRunner {
    config: RunnerConfig,
    state: RunState,
}

impl SetupRunner {
    /// Create a runner.
    pub fn new(config: RunnerConfig) -> Self {
        Self {
            config,
            state: RunState::Idle,
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Current phase.
    pub fn state(&self) -> &RunState {
        &self.state
    }

    /// Run setup, returning the exit code to propagate.
    pub fn run(&mut self, reporter: &mut dyn Reporter) -> RunOutcome {
        if self.config.markers {
            reporter.start_marker();
        }
        tracing::debug!(config = ?self.config, "starting setup run");

        let outcome = self.run_unframed(reporter);

        if self.config.markers {
            reporter.end_marker(outcome.exit_code);
        }
        outcome
    }

    fn run_unframed(&mut self, reporter: &mut dyn Reporter) -> RunOutcome {
        if self.config.skip {
            self.transition(RunState::Skipped);
            reporter.skip("SKIP_REPO_SETUP is set, skipping repository setup");
            self.transition(RunState::Completed(0));
            return RunOutcome {
                strategy: None,
                exit_code: 0,
            };
        }

        self.transition(RunState::Detecting);
        let strategy = detect_strategy(&self.config.directory);
        self.transition(RunState::Running(strategy.clone()));

        let exit_code = self.delegate(&strategy, reporter);
        self.transition(RunState::Completed(exit_code));

        RunOutcome {
            strategy: Some(strategy),
            exit_code,
        }
    }

    fn delegate(&self, strategy: &SetupStrategy, reporter: &mut dyn Reporter) -> i32 {
        let dir = &self.config.directory;
        let invocation = match strategy {
            SetupStrategy::CustomScript(script) => {
                reporter.notice(&format!("Running {}", script.display()));
                prepare_scripts(dir);
                Ok(Invocation::new(script))
            }
            SetupStrategy::RequirementsFile(requirements) => {
                reporter.notice(&format!(
                    "Installing dependencies from {}",
                    requirements.display()
                ));
                self.config.installer_invocation([
                    OsStr::new("install"),
                    OsStr::new("-r"),
                    requirements.as_os_str(),
                ])
            }
            SetupStrategy::PyprojectManifest(_) => {
                reporter.notice(&format!("Installing {} in editable mode", dir.display()));
                self.config.installer_invocation([
                    OsStr::new("install"),
                    OsStr::new("-e"),
                    dir.as_os_str(),
                ])
            }
            SetupStrategy::None => {
                reporter.skip(&format!(
                    "No setup script, requirements.txt or pyproject.toml in {}, skipping",
                    dir.display()
                ));
                return 0;
            }
        };

        match invocation.and_then(|inv| execute(&inv)) {
            Ok(result) => result.exit_code,
            Err(e) => {
                tracing::debug!(strategy = strategy.name(), error = %e, "delegation failed");
                reporter.error(&format!("Error: {}", e));
                e.shell_exit_code()
            }
        }
    }

    fn transition(&mut self, next: RunState) {
        tracing::debug!(from = ?self.state, to = ?next, "setup state");
        self.state = next;
    }
}

/// Mark everything under `<dir>/script/` executable, best effort.
fn prepare_scripts(dir: &Path) {
    let scripts = dir.join("script");
    match make_executable(&scripts) {
        Ok(changed) => tracing::debug!(changed, "marked scripts executable"),
        Err(e) => tracing::warn!(
            dir = %scripts.display(),
            "could not mark scripts executable: {}",
            e
        ),
    }
}

/// Run setup once with the given configuration and reporter.
pub fn run(config: RunnerConfig, reporter: &mut dyn Reporter) -> RunOutcome {
    SetupRunner::new(config).run(reporter)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::ui::MockReporter;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::TempDir;

    fn write_script(path: &Path, body: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        fs::set_permissions(path, fs::Permissions::from_mode(0o644)).unwrap();
    }

    fn config(dir: &Path) -> RunnerConfig {
        RunnerConfig::new(dir).with_installer("true")
    }

    #[test]
    fn skip_override_bypasses_detection() {
        let temp = TempDir::new().unwrap();
        write_script(&temp.path().join("script/setup"), "exit 9");
        let mut cfg = config(temp.path());
        cfg.skip = true;

        let mut reporter = MockReporter::new();
        let mut runner = SetupRunner::new(cfg);
        let outcome = runner.run(&mut reporter);

        assert!(outcome.skipped());
        assert_eq!(outcome.exit_code, 0);
        assert_eq!(runner.state(), &RunState::Completed(0));
        assert_eq!(reporter.markers(), ["::setup:start::", "::setup:end:0::"]);
        assert!(reporter.stdout()[1].contains("skipping"));
        assert_eq!(reporter.skips().len(), 1);
    }

    #[test]
    fn skip_override_performs_no_filesystem_checks() {
        let temp = TempDir::new().unwrap();
        let mut cfg = config(&temp.path().join("missing"));
        cfg.skip = true;

        let mut reporter = MockReporter::new();
        let mut runner = SetupRunner::new(cfg);
        runner.run(&mut reporter);
        assert_eq!(runner.state(), &RunState::Completed(0));
    }

    #[test]
    fn empty_directory_is_a_no_op() {
        let temp = TempDir::new().unwrap();
        let mut reporter = MockReporter::new();
        let outcome = run(config(temp.path()), &mut reporter);

        assert_eq!(outcome.strategy, Some(SetupStrategy::None));
        assert_eq!(outcome.exit_code, 0);
        assert_eq!(reporter.lines().len(), 3);
        assert!(reporter.lines()[1].contains("skipping"));
        assert_eq!(reporter.skips(), [reporter.lines()[1]]);
    }

    #[test]
    fn custom_script_exit_code_propagates() {
        let temp = TempDir::new().unwrap();
        write_script(&temp.path().join("script/setup"), "exit 4");
        fs::write(temp.path().join("requirements.txt"), "").unwrap();

        let mut reporter = MockReporter::new();
        let outcome = run(config(temp.path()), &mut reporter);

        assert!(matches!(
            outcome.strategy,
            Some(SetupStrategy::CustomScript(_))
        ));
        assert_eq!(outcome.exit_code, 4);
        assert!(reporter.skips().is_empty());
        assert_eq!(reporter.markers()[1], "::setup:end:4::");
    }

    #[test]
    fn custom_script_makes_script_dir_executable() {
        let temp = TempDir::new().unwrap();
        write_script(&temp.path().join("script/setup"), "exit 0");
        write_script(&temp.path().join("script/helper"), "exit 0");

        let mut reporter = MockReporter::new();
        let outcome = run(config(temp.path()), &mut reporter);

        let mode = fs::metadata(temp.path().join("script/helper"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o111, 0o111);
        assert_eq!(outcome.exit_code, 0);
    }

    #[test]
    fn requirements_uses_installer_exit_code() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("requirements.txt"), "requests\n").unwrap();

        let mut reporter = MockReporter::new();
        let outcome = run(
            RunnerConfig::new(temp.path()).with_installer("false"),
            &mut reporter,
        );

        assert!(matches!(
            outcome.strategy,
            Some(SetupStrategy::RequirementsFile(_))
        ));
        assert_eq!(outcome.exit_code, 1);
        assert_eq!(reporter.markers()[1], "::setup:end:1::");
    }

    #[test]
    fn pyproject_runs_editable_install() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("pyproject.toml"), "[project]\n").unwrap();
        let log = temp.path().join("args.log");
        let installer = temp.path().join("fake-pip");
        write_script(&installer, &format!("echo \"$@\" > {}", log.display()));
        fs::set_permissions(&installer, fs::Permissions::from_mode(0o755)).unwrap();

        let mut reporter = MockReporter::new();
        let cfg = RunnerConfig::new(temp.path()).with_installer(&installer.to_string_lossy());
        let outcome = run(cfg, &mut reporter);

        assert_eq!(outcome.exit_code, 0);
        let args = fs::read_to_string(&log).unwrap();
        assert_eq!(args.trim(), format!("install -e {}", temp.path().display()));
    }

    #[test]
    fn missing_installer_reports_127_and_still_ends() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("requirements.txt"), "").unwrap();

        let mut reporter = MockReporter::new();
        let outcome = run(
            RunnerConfig::new(temp.path()).with_installer("repo-setup-missing-pip"),
            &mut reporter,
        );

        assert_eq!(outcome.exit_code, 127);
        assert!(reporter.stderr().iter().any(|l| l.starts_with("Error:")));
        assert_eq!(reporter.markers()[1], "::setup:end:127::");
    }

    #[test]
    fn empty_installer_fails_without_running() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("pyproject.toml"), "").unwrap();

        let mut reporter = MockReporter::new();
        let outcome = run(
            RunnerConfig::new(temp.path()).with_installer(""),
            &mut reporter,
        );
        assert_eq!(outcome.exit_code, 1);
    }

    #[test]
    fn unframed_run_emits_no_markers() {
        let temp = TempDir::new().unwrap();
        write_script(&temp.path().join("script/setup"), "exit 2");

        let mut reporter = MockReporter::new();
        let outcome = run(config(temp.path()).with_markers(false), &mut reporter);

        assert_eq!(outcome.exit_code, 2);
        assert!(reporter.markers().is_empty());
    }

    #[test]
    fn repeated_runs_are_idempotent() {
        let temp = TempDir::new().unwrap();
        write_script(&temp.path().join("script/setup"), "exit 3");

        let first = run(config(temp.path()), &mut MockReporter::new());
        let second = run(config(temp.path()), &mut MockReporter::new());
        assert_eq!(first, second);
    }
}
