//! Health command implementation.
//!
//! The `health` binary checks every requirement, prints one line each, and
//! suggests install commands for what's missing. It is advisory only: the
//! result is always success, whatever is missing.

use std::path::PathBuf;

use crate::cli::args::HealthCli;
use crate::config::{load_config, DotConfig};
use crate::environment::{OsIdentity, OS_RELEASE_PATH};
use crate::error::Result;
use crate::requirements::{CheckSummary, GapChecker, RequirementRegistry, SystemProbe};
use crate::ui::{DotTheme, Reporter};

use super::{Command, CommandResult};

/// The health command implementation.
pub struct HealthCommand {
    config: Option<PathBuf>,
    os_release: PathBuf,
    theme: DotTheme,
}

impl HealthCommand {
    /// Create a new health command from parsed arguments.
    pub fn new(args: &HealthCli) -> Self {
        let theme = if args.no_color {
            DotTheme::plain()
        } else {
            DotTheme::detect()
        };
        Self {
            config: args.config.clone(),
            os_release: args
                .os_release
                .clone()
                .unwrap_or_else(|| PathBuf::from(OS_RELEASE_PATH)),
            theme,
        }
    }

    /// A bad config file shouldn't stop the check; fall back to built-ins.
    fn load_config(&self) -> DotConfig {
        match load_config(self.config.as_deref()) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring config: {}", e);
                DotConfig::default()
            }
        }
    }
}

impl Command for HealthCommand {
    fn execute(&self) -> Result<CommandResult> {
        let config = self.load_config();
        let os = OsIdentity::from_path(&self.os_release);
        tracing::debug!(
            "OS identity: {} ({:?})",
            os.get("ID").unwrap_or("unknown"),
            os.distro()
        );

        let registry = RequirementRegistry::with_config(&config.health);
        let probe = SystemProbe::run();
        let mut checker = GapChecker::new(&registry, &probe, os.distro());
        let results = checker.check_all();

        let mut reporter = Reporter::stdio(self.theme.clone());
        if let Err(e) = reporter.report_all(&results) {
            tracing::warn!("Failed to write report: {}", e);
        }

        let summary = CheckSummary::from_results(&results);
        tracing::debug!(
            "{} ok, {} missing, {} skipped",
            summary.satisfied,
            summary.missing,
            summary.skipped
        );

        Ok(CommandResult::success())
    }
}
