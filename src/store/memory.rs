use crate::{core::baseline::BaselineRecord, prelude::*, store::BaselineStore};

/// In-memory store with switchable failures.
#[derive(Default)]
pub struct MemoryStore {
    pub record: Option<BaselineRecord>,

    /// Reads fail as if the record could not be parsed.
    pub is_corrupted: bool,

    /// Writes fail and leave the record untouched.
    pub is_read_only: bool,

    pub n_writes: usize,
}

impl MemoryStore {
    pub fn with_record(record: BaselineRecord) -> Self {
        Self { record: Some(record), ..Self::default() }
    }
}

impl BaselineStore for MemoryStore {
    fn read(&self) -> Result<Option<BaselineRecord>> {
        ensure!(!self.is_corrupted, "the record is corrupted");
        Ok(self.record)
    }

    fn write(&mut self, record: &BaselineRecord) -> Result {
        ensure!(!self.is_read_only, "the store is read-only");
        self.record = Some(*record);
        self.is_corrupted = false;
        self.n_writes += 1;
        Ok(())
    }
}
