use crate::{
    api::envoy::{ProductionEntry, ProductionSnapshot},
    quantity::{energy::WattHours, power::Watts, voltage::Volts},
};

/// Quantities reported on each run.
#[must_use]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Metrics {
    /// `None` when no inverter aggregate reported the counter.
    pub lifetime_energy: Option<WattHours>,
    pub power: Watts,
    pub voltage: Volts,
}

impl From<&ProductionSnapshot> for Metrics {
    /// Missing meter values are zeroes, and the last entry of a kind wins.
    fn from(snapshot: &ProductionSnapshot) -> Self {
        snapshot.production.iter().fold(Self::default(), |metrics, entry| match entry {
            ProductionEntry::Inverters(inverters) => {
                Self { lifetime_energy: inverters.lifetime_energy, ..metrics }
            }
            ProductionEntry::Meter(meter) => {
                Self { power: meter.power, voltage: meter.voltage, ..metrics }
            }
            ProductionEntry::Other => metrics,
        })
    }
}
