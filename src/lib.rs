//! repo-setup - Detect and run a repository's dependency setup.
//!
//! Given a directory, repo-setup runs the first setup mechanism it finds:
//! `script/setup`, then `requirements.txt`, then `pyproject.toml`. The run
//! is framed by `::setup:start::` and `::setup:end:<code>::` markers on both
//! stdout and stderr so a harness reading either stream can find where setup
//! ended and how it went.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Runner configuration from arguments and environment
//! - [`detection`] - Setup artifact detection and strategy selection
//! - [`error`] - Error types and result aliases
//! - [`markers`] - The marker protocol and reading captured output
//! - [`runner`] - Setup run orchestration
//! - [`shell`] - Delegated process execution
//! - [`ui`] - Notices and marker output
//!
//! # Example
//!
//! ```
//! use repo_setup::config::RunnerConfig;
//! use repo_setup::runner::run;
//! use repo_setup::ui::MockReporter;
//!
//! let dir = std::env::temp_dir().join("repo-setup-doc-empty");
//! std::fs::create_dir_all(&dir).unwrap();
//!
//! let mut reporter = MockReporter::new();
//! let outcome = run(RunnerConfig::new(&dir), &mut reporter);
//! assert_eq!(outcome.exit_code, 0);
//! assert_eq!(reporter.markers(), ["::setup:start::", "::setup:end:0::"]);
//! ```

pub mod cli;
pub mod config;
pub mod detection;
pub mod error;
pub mod markers;
pub mod runner;
pub mod shell;
pub mod ui;

pub use error::{Result, SetupError};
