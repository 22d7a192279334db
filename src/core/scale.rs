use crate::quantity::energy::WattHours;

/// Scale applied to today's energy right before it is reported.
///
/// The gateway documents its counters in watt-hours, which is also what PVOutput expects.
/// Gateways reporting in kilowatt-hours need `1000`.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, clap::ValueEnum)]
pub enum EnergyScale {
    /// Report the counter difference as is.
    #[default]
    #[value(name = "1")]
    Unit,

    /// Multiply by a thousand.
    #[value(name = "1000")]
    Kilo,
}

impl EnergyScale {
    pub fn apply(self, energy: WattHours) -> WattHours {
        match self {
            Self::Unit => energy,
            Self::Kilo => energy * 1000.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::ValueEnum;

    use super::*;

    #[test]
    fn apply_ok() {
        assert_eq!(EnergyScale::default().apply(WattHours(1.5)), WattHours(1.5));
        assert_eq!(EnergyScale::Kilo.apply(WattHours(1.5)), WattHours(1500.0));
    }

    #[test]
    fn parse_ok() {
        assert_eq!(EnergyScale::from_str("1000", false), Ok(EnergyScale::Kilo));
        assert!(EnergyScale::from_str("10", false).is_err());
    }
}
