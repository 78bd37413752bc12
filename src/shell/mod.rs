//! Delegated process execution and file permission handling.

pub mod command;
pub mod permissions;

pub use command::{execute, exit_code_of, CommandResult, Invocation};
pub use permissions::make_executable;
