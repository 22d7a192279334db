mod file;
#[cfg(test)]
mod memory;
#[cfg(test)]
mod scratch;

use chrono::NaiveDate;

#[cfg(test)]
pub use self::{memory::MemoryStore, scratch::ScratchDir};
pub use self::file::FileStore;
use crate::{
    core::baseline::{Baseline, BaselineRecord},
    prelude::*,
    quantity::energy::WattHours,
};

/// Persisted storage of the single daily baseline record.
pub trait BaselineStore {
    /// Read the stored record, `None` if nothing has been stored yet.
    fn read(&self) -> Result<Option<BaselineRecord>>;

    /// Replace the stored record.
    ///
    /// Readers must never observe a partially written record.
    fn write(&mut self, record: &BaselineRecord) -> Result;

    /// Load the baseline state.
    ///
    /// Unreadable or invalid records are not fatal, they are treated as a new day.
    fn load(&self) -> Baseline {
        match self.read().and_then(|record| record.map(BaselineRecord::validate).transpose()) {
            Ok(Some(record)) => Baseline::Anchored(record),
            Ok(None) => {
                info!("no baseline stored yet");
                Baseline::Missing
            }
            Err(error) => {
                warn!("failed to load the baseline, starting a new day: {error:#}");
                Baseline::Missing
            }
        }
    }

    /// Anchor the baseline to the current lifetime counter.
    fn reinitialize(
        &mut self,
        today: NaiveDate,
        lifetime_energy: WattHours,
    ) -> Result<BaselineRecord> {
        let record = BaselineRecord { date: today, baseline: lifetime_energy }.validate()?;
        self.write(&record)?;
        Ok(record)
    }
}
