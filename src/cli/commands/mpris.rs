//! Now-playing command implementation.
//!
//! The `polybar-mpris` binary runs until killed. It only returns when
//! something went wrong, and then with the error.

use crate::cli::args::MprisCli;
use crate::config::{load_config, validate_max_title_len};
use crate::error::Result;
use crate::mpris::{MprisNotifier, NotifierSettings};

use super::{Command, CommandResult};

/// The polybar-mpris command implementation.
pub struct MprisCommand<'a> {
    args: &'a MprisCli,
}

impl<'a> MprisCommand<'a> {
    pub fn new(args: &'a MprisCli) -> Self {
        Self { args }
    }

    /// Load config and apply command-line overrides.
    pub fn settings(&self) -> Result<NotifierSettings> {
        let config = load_config(self.args.config.as_deref())?;
        let settings = self.args.settings(&config.status);
        validate_max_title_len(settings.max_title_len)?;
        Ok(settings)
    }
}

impl Command for MprisCommand<'_> {
    fn execute(&self) -> Result<CommandResult> {
        let settings = self.settings()?;
        tracing::debug!("Starting with {:?}", settings);

        let notifier = MprisNotifier::connect_stdout(&settings)?;
        notifier.run()?;
        Ok(CommandResult::success())
    }
}
