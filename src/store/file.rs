use std::{
    ffi::OsString,
    fs::{self, File},
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use crate::{core::baseline::BaselineRecord, prelude::*, store::BaselineStore};

/// Baseline record persisted as a JSON file.
///
/// Writes go to a sibling temporary file which is then renamed over the target.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn directory(&self) -> &Path {
        self.path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
    }

    fn temporary_path(&self) -> PathBuf {
        let mut file_name = self.path.file_name().map(OsString::from).unwrap_or_default();
        file_name.push(".tmp");
        self.path.with_file_name(file_name)
    }
}

impl BaselineStore for FileStore {
    #[instrument(skip_all, fields(path = %self.path.display()))]
    fn read(&self) -> Result<Option<BaselineRecord>> {
        let contents = match fs::read(&self.path) {
            Ok(contents) => contents,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(None),
            Err(error) => {
                return Err(error)
                    .with_context(|| format!("failed to read `{}`", self.path.display()));
            }
        };
        let record = serde_json::from_slice(&contents)
            .with_context(|| format!("failed to parse `{}`", self.path.display()))?;
        Ok(Some(record))
    }

    #[instrument(skip_all, fields(path = %self.path.display(), date = %record.date))]
    fn write(&mut self, record: &BaselineRecord) -> Result {
        info!(baseline = ?record.baseline, "saving the baseline…");
        let directory = self.directory();
        fs::create_dir_all(directory)
            .with_context(|| format!("failed to create `{}`", directory.display()))?;

        let temporary_path = self.temporary_path();
        let result = write_synced(&temporary_path, record).and_then(|()| {
            fs::rename(&temporary_path, &self.path).with_context(|| {
                format!(
                    "failed to move `{}` to `{}`",
                    temporary_path.display(),
                    self.path.display(),
                )
            })
        });
        if result.is_err() {
            let _ = fs::remove_file(&temporary_path);
        }
        result?;
        sync_directory(directory)
    }
}

fn write_synced(path: &Path, record: &BaselineRecord) -> Result {
    let mut file =
        File::create(path).with_context(|| format!("failed to create `{}`", path.display()))?;
    serde_json::to_writer(&mut file, record)?;
    file.write_all(b"\n")?;
    file.sync_all().with_context(|| format!("failed to sync `{}`", path.display()))
}

/// Persist the directory entry after a rename.
fn sync_directory(path: &Path) -> Result {
    File::open(path)
        .and_then(|directory| directory.sync_all())
        .with_context(|| format!("failed to sync `{}`", path.display()))
}
