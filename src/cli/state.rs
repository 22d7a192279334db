use std::path::PathBuf;

use clap::Parser;

use crate::store::FileStore;

#[derive(Parser)]
pub struct StateArgs {
    /// Daily baseline file.
    #[clap(long = "state-path", env = "STATE_PATH", default_value = "/data/state.json")]
    path: PathBuf,
}

impl StateArgs {
    pub fn open(&self) -> FileStore {
        FileStore::new(self.path.clone())
    }
}
