mod burrow;
mod gateway;
mod pvoutput;
mod report;
mod state;

use chrono::Local;
use clap::{Parser, Subcommand};

use crate::{
    cli::{burrow::BurrowArgs, report::ReportArgs},
    prelude::*,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Main command: poll the gateway, update today's energy, and report it to PVOutput.
    #[clap(name = "report")]
    Report(Box<ReportArgs>),

    /// Development tools.
    #[clap(name = "burrow")]
    Burrow(Box<BurrowArgs>),
}

impl Command {
    pub fn run(self) -> Result {
        match self {
            Self::Report(args) => args.run(Local::now()),
            Self::Burrow(args) => args.run(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn verify_args() {
        Args::command().debug_assert();
    }

    #[test]
    fn parse_report_ok() -> Result {
        let args = Args::try_parse_from([
            "meerkat",
            "report",
            "--ip-address",
            "envoy.local",
            "--gateway-token",
            "token",
            "--pvoutput-api-key",
            "key",
            "--pvoutput-system-id",
            "42",
            "--energy-scale",
            "1000",
        ])?;
        assert!(matches!(args.command, Command::Report(_)));
        Ok(())
    }
}
