//! Terminal output for setup runs.
//!
//! This module provides:
//! - [`Reporter`] trait for output abstraction
//! - [`TerminalReporter`] writing notices to stdout and markers to both streams
//! - [`MockReporter`] capturing everything for tests
//!
//! # Example
//!
//! ```
//! use repo_setup::ui::{MockReporter, Reporter};
//!
//! let mut reporter = MockReporter::new();
//! reporter.start_marker();
//! reporter.notice("Nothing to install");
//! reporter.end_marker(0);
//! assert_eq!(reporter.lines(), ["::setup:start::", "Nothing to install", "::setup:end:0::"]);
//! ```

pub mod mock;
pub mod terminal;
pub mod theme;

pub use mock::MockReporter;
pub use terminal::TerminalReporter;
pub use theme::{should_use_colors, SetupTheme};

/// Sink for everything the runner itself prints.
///
/// Output written by delegated processes never passes through here.
pub trait Reporter {
    /// Display a progress line on stdout.
    fn notice(&mut self, msg: &str);

    /// Display a line on stdout saying nothing will be installed.
    fn skip(&mut self, msg: &str);

    /// Display an error line on stderr.
    fn error(&mut self, msg: &str);

    /// Emit the start marker on both streams.
    fn start_marker(&mut self);

    /// Emit the end marker carrying `exit_code` on both streams.
    fn end_marker(&mut self, exit_code: i32);
}
