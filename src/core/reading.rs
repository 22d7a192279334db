use chrono::{DateTime, Local};

use crate::{core::metrics::Metrics, quantity::energy::WattHours};

/// Single status sent to the monitoring service.
#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Reading {
    pub timestamp: DateTime<Local>,

    /// Instantaneous power in watts.
    pub power: i64,

    /// Energy produced since local midnight in watt-hours.
    pub energy_today: u64,

    /// RMS voltage in volts, zero when not reported.
    pub voltage: u32,
}

impl Reading {
    pub const fn new(
        timestamp: DateTime<Local>,
        metrics: &Metrics,
        energy_today: WattHours,
    ) -> Self {
        Self {
            timestamp,
            power: metrics.power.truncate(),
            energy_today: energy_today.truncate(),
            voltage: metrics.voltage.truncate(),
        }
    }
}
