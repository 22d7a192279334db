use chrono::Local;
use clap::{Parser, Subcommand};

use crate::{
    cli::{gateway::GatewayArgs, state::StateArgs},
    core::{baseline::Baseline, metrics::Metrics, pipeline::Gateway},
    prelude::*,
    store::BaselineStore,
};

#[derive(Parser)]
pub struct BurrowArgs {
    #[command(subcommand)]
    pub command: BurrowCommand,
}

#[derive(Subcommand)]
pub enum BurrowCommand {
    /// Show the stored daily baseline.
    Baseline(BurrowBaselineArgs),

    /// Fetch a production snapshot and show the extracted metrics.
    Snapshot(BurrowSnapshotArgs),
}

#[derive(Parser)]
pub struct BurrowBaselineArgs {
    #[clap(flatten)]
    state: StateArgs,
}

#[derive(Parser)]
pub struct BurrowSnapshotArgs {
    #[clap(flatten)]
    gateway: GatewayArgs,
}

impl BurrowArgs {
    pub fn run(self) -> Result {
        match self.command {
            BurrowCommand::Baseline(args) => {
                let baseline = args.state.open().load();
                let Baseline::Anchored(record) = baseline else {
                    warn!("no valid baseline is stored");
                    return Ok(());
                };
                let is_new_day = baseline.is_new_day(Local::now().date_naive());
                info!(is_new_day, "gotcha");
                println!("{}", serde_json::to_string_pretty(&record)?);
            }
            BurrowCommand::Snapshot(args) => {
                let metrics = Metrics::from(&args.gateway.new_client()?.fetch_snapshot()?);
                info!(
                    lifetime_energy = ?metrics.lifetime_energy,
                    power = %metrics.power,
                    voltage = %metrics.voltage,
                    "gotcha",
                );
            }
        }
        Ok(())
    }
}
