//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::{DEFAULT_INSTALLER, INSTALLER_ENV};

/// repo-setup - Detect and run a repository's dependency setup.
///
/// Runs `script/setup`, `pip install -r requirements.txt` or
/// `pip install -e .`, whichever is found first, framed by
/// `::setup:start::` and `::setup:end:<code>::` markers on stdout and stderr.
#[derive(Debug, Parser)]
#[command(name = "repo-setup")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(flatten)]
    pub run: RunArgs,

    /// Enable debug logging (to stderr)
    #[arg(long, global = true)]
    pub debug: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands. Without one, setup runs.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split captured output into setup and command phases
    Split(SplitArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for a setup run.
#[derive(Debug, Clone, clap::Args)]
pub struct RunArgs {
    /// Directory to set up
    #[arg(default_value = ".")]
    pub directory: PathBuf,

    /// Do not print ::setup:start:: / ::setup:end:N:: markers
    #[arg(long)]
    pub no_markers: bool,

    /// Package installer command (whitespace-separated, e.g. "python -m pip")
    #[arg(long, env = INSTALLER_ENV, default_value = DEFAULT_INSTALLER)]
    pub installer: String,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            no_markers: false,
            installer: DEFAULT_INSTALLER.to_string(),
        }
    }
}

/// Arguments for the `split` command.
#[derive(Debug, Clone, clap::Args)]
pub struct SplitArgs {
    /// File holding the captured stdout
    pub stdout: PathBuf,

    /// File holding the captured stderr
    #[arg(long)]
    pub stderr: Option<PathBuf>,

    /// Exit code of the whole captured run
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub exit_code: i32,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
