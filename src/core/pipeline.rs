use bon::Builder;
use chrono::{DateTime, Local};

use crate::{
    api::envoy::ProductionSnapshot,
    core::{accumulator, metrics::Metrics, reading::Reading, scale::EnergyScale},
    prelude::*,
    quantity::energy::WattHours,
    store::BaselineStore,
};

/// Source of production snapshots.
pub trait Gateway {
    fn fetch_snapshot(&self) -> Result<ProductionSnapshot>;
}

/// Destination of the readings.
pub trait Reporter {
    fn upload(&self, reading: &Reading) -> Result;
}

/// Pipeline stage that failed the run, attached to the error as its context.
#[derive(Copy, Clone, Debug, Eq, PartialEq, derive_more::Display)]
pub enum Stage {
    #[display("failed to fetch the production snapshot")]
    Fetch,

    #[display("failed to upload the reading")]
    Upload,
}

impl Stage {
    pub fn of(error: &Error) -> Option<Self> {
        error.downcast_ref::<Self>().copied()
    }

    /// Process exit code, distinct from the generic failure and from `clap` usage errors.
    pub const fn exit_code(self) -> u8 {
        match self {
            Self::Fetch => 3,
            Self::Upload => 4,
        }
    }
}

/// One poll-compute-upload cycle.
#[derive(Builder)]
pub struct Pipeline<'a, G, R, S> {
    gateway: &'a G,
    reporter: &'a R,
    store: &'a mut S,

    #[builder(default)]
    energy_scale: EnergyScale,
}

impl<G: Gateway, R: Reporter, S: BaselineStore> Pipeline<'_, G, R, S> {
    /// Run the cycle and return the uploaded reading.
    ///
    /// Only fetch and upload failures abort the run, baseline failures degrade to zero energy.
    #[instrument(skip_all, fields(now = %now))]
    pub fn run(self, now: DateTime<Local>) -> Result<Reading> {
        let snapshot = self.gateway.fetch_snapshot().context(Stage::Fetch)?;
        let metrics = Metrics::from(&snapshot);
        info!(
            lifetime_energy = ?metrics.lifetime_energy,
            power = ?metrics.power,
            voltage = ?metrics.voltage,
            "extracted the metrics",
        );

        let energy_today = if let Some(lifetime_energy) = metrics.lifetime_energy {
            accumulator::energy_today(self.store, now.date_naive(), lifetime_energy)
        } else {
            warn!("the snapshot has no lifetime energy, leaving the baseline untouched");
            WattHours::ZERO
        };
        let reading = Reading::new(now, &metrics, self.energy_scale.apply(energy_today));
        info!(reading.power, reading.energy_today, reading.voltage, "uploading the reading…");
        self.reporter.upload(&reading).context(Stage::Upload)?;
        Ok(reading)
    }
}
