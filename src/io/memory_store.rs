//! In-memory snapshot store
//!
//! Holds the encoded snapshot text rather than the accounts themselves, so
//! everything saved here goes through the same format as the file store.

use crate::core::traits::SnapshotStore;
use crate::io::snapshot_format::{read_snapshot, write_snapshot};
use crate::types::{Account, LedgerError};
use std::sync::{Mutex, PoisonError};

/// Snapshot store keeping the encoded text in memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    snapshot: Mutex<Option<Vec<u8>>>,
}

impl MemoryStore {
    /// An empty store, equivalent to a missing file
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with raw snapshot text
    pub fn with_contents(contents: impl Into<String>) -> Self {
        MemoryStore {
            snapshot: Mutex::new(Some(contents.into().into_bytes())),
        }
    }

    /// The last saved snapshot text, if any
    pub fn contents(&self) -> Option<String> {
        self.snapshot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> Result<Option<Vec<Account>>, LedgerError> {
        let snapshot = self.snapshot.lock().unwrap_or_else(PoisonError::into_inner);
        match snapshot.as_deref() {
            Some(bytes) => read_snapshot(bytes).map(Some),
            None => Ok(None),
        }
    }

    fn save(&self, accounts: &[Account]) -> Result<(), LedgerError> {
        let mut encoded = Vec::new();
        write_snapshot(accounts, &mut encoded)?;

        *self.snapshot.lock().unwrap_or_else(PoisonError::into_inner) = Some(encoded);
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}
