//! File-backed snapshot store
//!
//! Each save writes the complete snapshot to a temporary file next to the
//! target and renames it into place, so readers only ever see the previous
//! or the current full snapshot.

use crate::core::traits::SnapshotStore;
use crate::io::snapshot_format::{read_snapshot, write_snapshot};
use crate::types::{Account, LedgerError};
use std::fs::{self, File};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Default store file name, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "accounts.txt";

/// Snapshot store backed by a flat text file
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory receiving the temporary file; the rename must not cross filesystems
    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_FILE)
    }
}

impl SnapshotStore for FileStore {
    fn load(&self) -> Result<Option<Vec<Account>>, LedgerError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        read_snapshot(file).map(Some)
    }

    fn save(&self, accounts: &[Account]) -> Result<(), LedgerError> {
        let dir = self.parent_dir();
        fs::create_dir_all(dir)?;

        let mut temp = NamedTempFile::new_in(dir)?;
        write_snapshot(accounts, &mut temp)?;
        temp.as_file().sync_all()?;

        temp.persist(&self.path)
            .map_err(|e| LedgerError::persist(&self.path, &e.error))?;

        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
