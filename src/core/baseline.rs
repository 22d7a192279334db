use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{prelude::*, quantity::energy::WattHours};

/// Lifetime energy counter value observed at the start of the day.
#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BaselineRecord {
    pub date: NaiveDate,
    pub baseline: WattHours,
}

impl BaselineRecord {
    pub fn validate(self) -> Result<Self> {
        ensure!(
            self.baseline.is_finite() && self.baseline >= WattHours::ZERO,
            "baseline `{:?}` on {} is not a valid counter value",
            self.baseline,
            self.date,
        );
        Ok(self)
    }
}

/// Daily baseline state.
#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Baseline {
    /// Nothing usable is stored: the first run, or the record is unreadable.
    Missing,

    /// The counter is anchored on the record's date.
    Anchored(BaselineRecord),
}

/// Outcome of observing the lifetime counter against the baseline.
#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Transition {
    /// Same day: today's energy is measured against the contained baseline.
    Stable(WattHours),

    /// New day or no baseline: the store must be re-anchored to this record.
    Reanchor(BaselineRecord),
}

impl Baseline {
    /// Baseline valid for the given day, `None` means a new day.
    #[must_use]
    pub fn for_day(self, today: NaiveDate) -> Option<WattHours> {
        match self {
            Self::Anchored(record) if record.date == today => Some(record.baseline),
            Self::Anchored(_) | Self::Missing => None,
        }
    }

    #[must_use]
    pub fn is_new_day(self, today: NaiveDate) -> bool {
        self.for_day(today).is_none()
    }

    pub fn transition(self, today: NaiveDate, lifetime_energy: WattHours) -> Transition {
        self.for_day(today).map_or(
            Transition::Reanchor(BaselineRecord { date: today, baseline: lifetime_energy }),
            Transition::Stable,
        )
    }
}
