//! Command-line interface for the two binaries.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - What each binary does once arguments are parsed

pub mod args;
pub mod commands;

pub use args::{HealthCli, MprisCli};
pub use commands::{Command, CommandResult, HealthCommand, MprisCommand};
