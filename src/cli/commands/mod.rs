//! CLI command implementations.
//!
//! Each binary's behavior lives in a type implementing the [`Command`]
//! trait, which gives both a uniform way to execute and report an exit code.

pub mod health;
pub mod mpris;

pub use health::HealthCommand;
pub use mpris::MprisCommand;

use crate::error::Result;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] carrying the process exit code.
    fn execute(&self) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandResult {
    /// Exit code to use (0 for success).
    pub exit_code: u8,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self { exit_code: 0 }
    }
}
