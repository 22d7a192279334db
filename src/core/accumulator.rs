use chrono::NaiveDate;

use crate::{
    core::baseline::Transition,
    prelude::*,
    quantity::energy::WattHours,
    store::BaselineStore,
};

/// Energy produced since local midnight, derived from the lifetime counter.
///
/// On a new day the store gets re-anchored to the current counter and the result is zero,
/// whether the write succeeds or not. A failed write only means the next run sees a new day again.
#[instrument(skip_all, fields(today = %today, lifetime_energy = ?lifetime_energy))]
pub fn energy_today<S: BaselineStore + ?Sized>(
    store: &mut S,
    today: NaiveDate,
    lifetime_energy: WattHours,
) -> WattHours {
    match store.load().transition(today, lifetime_energy) {
        Transition::Stable(baseline) => {
            let energy = lifetime_energy - baseline;
            if energy < WattHours::ZERO {
                warn!(?baseline, "lifetime energy is below the baseline, was the counter reset?");
                WattHours::ZERO
            } else {
                energy
            }
        }
        Transition::Reanchor(record) => {
            info!(baseline = ?record.baseline, "new day, re-anchoring the baseline…");
            if let Err(error) = store.reinitialize(record.date, record.baseline) {
                error!("failed to save the baseline, reporting zero energy: {error:#}");
            }
            WattHours::ZERO
        }
    }
}
