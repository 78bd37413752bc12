//! Reading captured output back into setup and command phases.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::SETUP_START;

static END_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"::setup:end:(\d+)::").unwrap());

/// What the end marker said about setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupCode {
    /// An end marker was found with this exit code.
    Exited(i32),
    /// A start marker was found but no end marker followed it.
    Unterminated,
}

/// One captured stream split at the setup markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamSplit {
    /// Output after the end marker (or all output when there are no markers).
    pub rest: String,
    /// Output between the markers.
    pub setup: String,
    /// `None` when the stream carries no start marker.
    pub code: Option<SetupCode>,
}

/// Split a single stream into its setup section and the output after it.
///
/// Every section is trimmed of surrounding newlines.
pub fn split_stream(output: &str) -> StreamSplit {
    let Some(start) = output.find(SETUP_START) else {
        return StreamSplit {
            rest: trim_newlines(output),
            setup: String::new(),
            code: None,
        };
    };

    let after_start = &output[start + SETUP_START.len()..];
    let Some(caps) = END_PATTERN.captures(after_start) else {
        return StreamSplit {
            rest: String::new(),
            setup: trim_newlines(after_start),
            code: Some(SetupCode::Unterminated),
        };
    };

    let (setup_end, rest_start) = match caps.get(0) {
        Some(whole) => (whole.start(), whole.end()),
        None => (after_start.len(), after_start.len()),
    };
    let code = caps[1]
        .parse::<i32>()
        .map(SetupCode::Exited)
        .unwrap_or(SetupCode::Unterminated);

    StreamSplit {
        rest: trim_newlines(&after_start[rest_start..]),
        setup: trim_newlines(&after_start[..setup_end]),
        code: Some(code),
    }
}

fn trim_newlines(s: &str) -> String {
    s.trim_matches('\n').to_string()
}

/// Outcome of one phase of a captured run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhaseResult {
    /// The command that produced this phase, when known.
    pub command: Vec<String>,
    /// Exit code; `None` if the phase never ran.
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl PhaseResult {
    /// Whether the phase exited with status 0.
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// One-line summary: `SUCCESS` or `FAILED (code: N, stderr: ...)`.
    ///
    /// With `verbose`, the code and both streams are included even on
    /// success.
    pub fn summary(&self, verbose: bool) -> String {
        let status = if self.success() { "SUCCESS" } else { "FAILED" };
        if !verbose && self.success() {
            return status.to_string();
        }

        let code = match self.exit_code {
            Some(code) => code.to_string(),
            None => "none".to_string(),
        };
        let mut detail = format!("code: {}", code);
        if !self.stderr.is_empty() {
            detail.push_str(&format!(", stderr: {}", self.stderr));
        }
        if verbose && !self.stdout.is_empty() {
            detail.push_str(&format!(", stdout: {}", self.stdout));
        }
        format!("{} ({})", status, detail)
    }
}

impl fmt::Display for PhaseResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary(tracing::enabled!(tracing::Level::DEBUG)))
    }
}

/// A captured run split into the setup phase and the command after it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplitRun {
    pub setup: PhaseResult,
    pub command: PhaseResult,
}

impl SplitRun {
    /// Exit code summarizing the whole run.
    ///
    /// A failed setup wins; otherwise the command's code, or 0 when
    /// neither phase reported one.
    pub fn exit_code(&self) -> i32 {
        match self.setup.exit_code {
            Some(code) if code != 0 => code,
            _ => self.command.exit_code.unwrap_or(0),
        }
    }
}

/// Split a captured stdout/stderr pair and the overall exit code.
///
/// The setup code is read from stdout first, then stderr. When setup never
/// finished, or nothing was printed after it on either stream, setup takes
/// the overall exit code and the command is reported as never having run.
///
/// Output with no markers at all reports setup as succeeded with code 0,
/// not as an unknown code.
pub fn split_run(stdout: &str, stderr: &str, exit_code: i32) -> SplitRun {
    let out = split_stream(stdout);
    let err = split_stream(stderr);

    let mut setup_code = match out.code.or(err.code) {
        Some(SetupCode::Exited(code)) => Some(code),
        Some(SetupCode::Unterminated) => None,
        None => Some(0),
    };
    let unterminated = matches!(out.code.or(err.code), Some(SetupCode::Unterminated));
    let mut command_code = Some(exit_code);

    if unterminated || (out.rest.is_empty() && err.rest.is_empty()) {
        tracing::debug!(unterminated, "command phase did not run");
        setup_code = Some(exit_code);
        command_code = None;
    }

    SplitRun {
        setup: PhaseResult {
            command: Vec::new(),
            exit_code: setup_code,
            stdout: out.setup,
            stderr: err.setup,
        },
        command: PhaseResult {
            command: Vec::new(),
            exit_code: command_code,
            stdout: out.rest,
            stderr: err.rest,
        },
    }
}
