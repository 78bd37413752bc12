//! The setup marker protocol.
//!
//! A setup phase is framed by two line-anchored sentinels, written
//! byte-identically to both stdout and stderr:
//!
//! ```text
//! ::setup:start::
//! <progress output>
//! ::setup:end:<exit_code>::
//! ```
//!
//! The writing side lives in [`crate::ui`]; [`parse`] is the reading side
//! used by harnesses that captured a run's output.
//!
//! # Example
//!
//! ```
//! use repo_setup::markers::{end_marker, split_stream, SetupCode};
//!
//! let output = format!("::setup:start::\ninstalling\n{}\ntests ok\n", end_marker(0));
//! let split = split_stream(&output);
//! assert_eq!(split.setup, "installing");
//! assert_eq!(split.rest, "tests ok");
//! assert_eq!(split.code, Some(SetupCode::Exited(0)));
//! ```

pub mod parse;

pub use parse::{split_run, split_stream, PhaseResult, SetupCode, SplitRun, StreamSplit};

/// Marker written before any setup work.
pub const SETUP_START: &str = "::setup:start::";

/// Format the marker written after setup completes.
pub fn end_marker(exit_code: i32) -> String {
    format!("::setup:end:{}::", exit_code)
}
