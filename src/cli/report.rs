use chrono::{DateTime, Local};
use clap::Parser;

use crate::{
    api::envoy,
    cli::{gateway::GatewayArgs, pvoutput::PvOutputArgs, state::StateArgs},
    core::{
        pipeline::{Pipeline, Reporter},
        reading::Reading,
        scale::EnergyScale,
    },
    prelude::*,
    store::FileStore,
};

#[derive(Parser)]
pub struct ReportArgs {
    /// Log the reading instead of uploading it (dry run).
    #[clap(long)]
    scout: bool,

    /// Scale applied to today's energy before it is reported.
    #[clap(long = "energy-scale", env = "ENERGY_SCALE", default_value = "1")]
    energy_scale: EnergyScale,

    #[clap(flatten)]
    gateway: GatewayArgs,

    #[clap(flatten)]
    pvoutput: PvOutputArgs,

    #[clap(flatten)]
    state: StateArgs,
}

impl ReportArgs {
    #[instrument(skip_all, fields(scout = self.scout))]
    pub fn run(&self, now: DateTime<Local>) -> Result {
        let gateway = self.gateway.new_client()?;
        let mut store = self.state.open();
        let reading = if self.scout {
            self.report(&gateway, &Scout, &mut store, now)?
        } else {
            self.report(&gateway, &self.pvoutput.new_client(), &mut store, now)?
        };
        info!(
            power = reading.power,
            energy_today = reading.energy_today,
            voltage = reading.voltage,
            "reported",
        );
        Ok(())
    }

    fn report<R: Reporter>(
        &self,
        gateway: &envoy::Client,
        reporter: &R,
        store: &mut FileStore,
        now: DateTime<Local>,
    ) -> Result<Reading> {
        Pipeline::builder()
            .gateway(gateway)
            .reporter(reporter)
            .store(store)
            .energy_scale(self.energy_scale)
            .build()
            .run(now)
    }
}

/// Dry-run reporter.
struct Scout;

impl Reporter for Scout {
    fn upload(&self, reading: &Reading) -> Result {
        warn!(timestamp = %reading.timestamp, "scouting, the reading is not uploaded");
        Ok(())
    }
}
