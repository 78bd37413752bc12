//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! Commands are dispatched via [`CommandDispatcher`]: a bare
//! `repo-setup [DIRECTORY]` runs setup, subcommands cover the rest.

pub mod completions;
pub mod dispatcher;
pub mod run;
pub mod split;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
