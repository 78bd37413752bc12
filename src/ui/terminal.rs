//! Reporter writing to the process's own stdout and stderr.

use std::io::Write;

use super::theme::{should_use_colors, SetupTheme};
use super::Reporter;
use crate::markers::{end_marker, SETUP_START};

/// Reporter for real runs.
///
/// Write errors (e.g. a closed pipe) are ignored so that a harness hanging
/// up early never changes the exit code.
pub struct TerminalReporter {
    theme: SetupTheme,
}

impl TerminalReporter {
    /// Create a reporter, choosing colors from the environment.
    pub fn new() -> Self {
        let theme = if should_use_colors() {
            SetupTheme::new()
        } else {
            SetupTheme::plain()
        };
        Self { theme }
    }

    /// Create a reporter with an explicit theme.
    pub fn with_theme(theme: SetupTheme) -> Self {
        Self { theme }
    }

    fn both(&self, line: &str) {
        let mut stdout = std::io::stdout().lock();
        let _ = writeln!(stdout, "{}", line);
        let _ = stdout.flush();
        drop(stdout);

        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(stderr, "{}", line);
        let _ = stderr.flush();
    }
}

impl Default for TerminalReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for TerminalReporter {
    fn notice(&mut self, msg: &str) {
        let mut stdout = std::io::stdout().lock();
        let _ = writeln!(stdout, "{}", self.theme.info.apply_to(msg));
        let _ = stdout.flush();
    }

    fn skip(&mut self, msg: &str) {
        let mut stdout = std::io::stdout().lock();
        let _ = writeln!(stdout, "{}", self.theme.dim.apply_to(msg));
        let _ = stdout.flush();
    }

    fn error(&mut self, msg: &str) {
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(stderr, "{}", self.theme.error.apply_to(msg));
        let _ = stderr.flush();
    }

    fn start_marker(&mut self) {
        self.both(SETUP_START);
    }

    fn end_marker(&mut self, exit_code: i32) {
        self.both(&end_marker(exit_code));
    }
}
