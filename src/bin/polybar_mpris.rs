//! Polybar now-playing widget entry point.

use std::process::ExitCode;

use clap::Parser;
use dotscripts::cli::{Command, MprisCli, MprisCommand};
use dotscripts::logging::init_tracing;

fn main() -> ExitCode {
    let cli = MprisCli::parse();
    init_tracing(cli.debug);

    tracing::debug!("polybar-mpris starting with args: {:?}", cli);

    match MprisCommand::new(&cli).execute() {
        Ok(result) => ExitCode::from(result.exit_code),
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::from(1)
        }
    }
}
