use serde::Deserialize;

use crate::quantity::{energy::WattHours, power::Watts, voltage::Volts};

/// `/production.json` response.
#[must_use]
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ProductionSnapshot {
    #[serde(default)]
    pub production: Vec<ProductionEntry>,
}

#[must_use]
#[derive(Copy, Clone, Debug, Deserialize)]
#[serde(tag = "type")]
pub enum ProductionEntry {
    /// Aggregate over all microinverters.
    #[serde(rename = "inverters")]
    Inverters(InverterAggregate),

    /// Integrated revenue-grade meter.
    #[serde(rename = "eim")]
    Meter(MeterReading),

    #[serde(other)]
    Other,
}

#[must_use]
#[derive(Copy, Clone, Debug, Default, Deserialize)]
pub struct InverterAggregate {
    /// `None` when the gateway omits the counter.
    #[serde(rename = "whLifetime", default)]
    pub lifetime_energy: Option<WattHours>,
}

#[must_use]
#[derive(Copy, Clone, Debug, Default, Deserialize)]
pub struct MeterReading {
    #[serde(rename = "wNow", default)]
    pub power: Watts,

    #[serde(rename = "rmsVoltage", default)]
    pub voltage: Volts,
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::prelude::*;

    #[test]
    fn deserialize_production_ok() -> Result {
        // language=json
        const BODY: &str = r#"{
            "production": [
                {
                    "type": "inverters",
                    "activeCount": 16,
                    "readingTime": 1709299800,
                    "wNow": 1620,
                    "whLifetime": 5000
                },
                {
                    "type": "eim",
                    "activeCount": 1,
                    "measurementType": "production",
                    "readingTime": 1709299805,
                    "wNow": 1587.357,
                    "whLifetime": 4890.123,
                    "varhLeadLifetime": 0.0,
                    "varhLagLifetime": 1234.5,
                    "vahLifetime": 6000.1,
                    "rmsCurrent": 13.2,
                    "rmsVoltage": 241.8,
                    "reactPwr": 210.5,
                    "apprntPwr": 1700.2,
                    "pwrFactor": 0.93,
                    "whToday": 3200.0,
                    "whLastSevenDays": 80000.0,
                    "vahToday": 4100.0,
                    "varhLeadToday": 0.0,
                    "varhLagToday": 900.0
                }
            ],
            "consumption": [
                {
                    "type": "eim",
                    "activeCount": 1,
                    "measurementType": "total-consumption",
                    "readingTime": 1709299805,
                    "wNow": 420.1,
                    "whLifetime": 9000.0,
                    "rmsVoltage": 241.9
                }
            ],
            "storage": [
                {
                    "type": "acb",
                    "activeCount": 0,
                    "readingTime": 0,
                    "wNow": 0,
                    "whNow": 0,
                    "state": "idle"
                }
            ]
        }"#;
        let snapshot = serde_json::from_str::<ProductionSnapshot>(BODY)?;
        assert_eq!(snapshot.production.len(), 2);

        let ProductionEntry::Inverters(inverters) = snapshot.production[0] else {
            bail!("the first entry must be the inverters");
        };
        assert_eq!(inverters.lifetime_energy, Some(WattHours(5000.0)));

        let ProductionEntry::Meter(meter) = snapshot.production[1] else {
            bail!("the second entry must be the meter");
        };
        assert_abs_diff_eq!(meter.power.0, 1587.357);
        assert_abs_diff_eq!(meter.voltage.0, 241.8);
        Ok(())
    }

    #[test]
    fn unknown_entry_is_tolerated() -> Result {
        // language=json
        const BODY: &str = r#"{"production": [{"type": "rgm", "wNow": 12}]}"#;
        let snapshot = serde_json::from_str::<ProductionSnapshot>(BODY)?;
        assert!(matches!(snapshot.production[..], [ProductionEntry::Other]));
        Ok(())
    }

    #[test]
    fn missing_fields_default_to_zero() -> Result {
        // language=json
        const BODY: &str = r#"{"production": [{"type": "eim", "wNow": 12.5}]}"#;
        let snapshot = serde_json::from_str::<ProductionSnapshot>(BODY)?;
        let [ProductionEntry::Meter(meter)] = snapshot.production[..] else {
            bail!("expected a single meter entry");
        };
        assert_abs_diff_eq!(meter.voltage.0, 0.0);
        Ok(())
    }

    #[test]
    fn missing_lifetime_energy_is_none() -> Result {
        // language=json
        const BODY: &str = r#"{"production": [{"type": "inverters", "wNow": 1620}]}"#;
        let snapshot = serde_json::from_str::<ProductionSnapshot>(BODY)?;
        let [ProductionEntry::Inverters(inverters)] = snapshot.production[..] else {
            bail!("expected a single inverters entry");
        };
        assert_eq!(inverters.lifetime_energy, None);
        Ok(())
    }
}
