//! repo-setup CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use repo_setup::cli::{Cli, CommandDispatcher};
use repo_setup::ui::{Reporter, SetupTheme, TerminalReporter};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Logs always go to stderr; stdout belongs to notices, markers and the
/// delegated process. Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("repo_setup=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("repo_setup=warn"))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let mut reporter = if cli.no_color {
        TerminalReporter::with_theme(SetupTheme::plain())
    } else {
        TerminalReporter::new()
    };

    let dispatcher = CommandDispatcher::new();

    match dispatcher.dispatch(&cli, &mut reporter) {
        Ok(result) => ExitCode::from(result.process_code()),
        Err(e) => {
            reporter.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
