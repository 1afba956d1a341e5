//! Dependency checker entry point.

use std::process::ExitCode;

use clap::Parser;
use dotscripts::cli::{Command, HealthCli, HealthCommand};
use dotscripts::logging::init_tracing;

fn main() -> ExitCode {
    // Bad arguments are reported but, like everything else here, never fail.
    let cli = match HealthCli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
    };
    init_tracing(cli.debug);

    tracing::debug!("health starting with args: {:?}", cli);

    // Advisory only: report problems but never fail.
    match HealthCommand::new(&cli).execute() {
        Ok(result) => ExitCode::from(result.exit_code),
        Err(e) => {
            tracing::warn!("{}", e);
            ExitCode::SUCCESS
        }
    }
}
