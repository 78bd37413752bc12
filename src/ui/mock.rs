//! Mock reporter for testing.
//!
//! `MockReporter` implements [`Reporter`] and records every line in the
//! order it was written, tagged with the stream(s) it would have gone to.

use super::Reporter;
use crate::markers::{end_marker, SETUP_START};

/// Where a recorded line would have been written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
    Both,
}

/// Mock reporter capturing all output.
#[derive(Debug, Default)]
pub struct MockReporter {
    lines: Vec<(Stream, String)>,
    skips: Vec<String>,
}

impl MockReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded lines, in order.
    pub fn lines(&self) -> Vec<&str> {
        self.lines.iter().map(|(_, line)| line.as_str()).collect()
    }

    /// Lines written through [`Reporter::skip`].
    pub fn skips(&self) -> &[String] {
        &self.skips
    }

    /// Lines that would have appeared on stdout.
    pub fn stdout(&self) -> Vec<&str> {
        self.on(Stream::Stdout)
    }

    /// Lines that would have appeared on stderr.
    pub fn stderr(&self) -> Vec<&str> {
        self.on(Stream::Stderr)
    }

    /// Recorded marker lines.
    pub fn markers(&self) -> Vec<&str> {
        self.lines
            .iter()
            .filter(|(stream, _)| *stream == Stream::Both)
            .map(|(_, line)| line.as_str())
            .collect()
    }

    fn on(&self, wanted: Stream) -> Vec<&str> {
        self.lines
            .iter()
            .filter(|(stream, _)| *stream == wanted || *stream == Stream::Both)
            .map(|(_, line)| line.as_str())
            .collect()
    }
}

impl Reporter for MockReporter {
    fn notice(&mut self, msg: &str) {
        self.lines.push((Stream::Stdout, msg.to_string()));
    }

    fn skip(&mut self, msg: &str) {
        self.skips.push(msg.to_string());
        self.lines.push((Stream::Stdout, msg.to_string()));
    }

    fn error(&mut self, msg: &str) {
        self.lines.push((Stream::Stderr, msg.to_string()));
    }

    fn start_marker(&mut self) {
        self.lines.push((Stream::Both, SETUP_START.to_string()));
    }

    fn end_marker(&mut self, exit_code: i32) {
        self.lines.push((Stream::Both, end_marker(exit_code)));
    }
}
