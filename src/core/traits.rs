//! Core traits for snapshot persistence
//!
//! The ledger talks to its persistent medium only through [`SnapshotStore`],
//! so the file-backed store and the in-memory store are interchangeable.

use crate::types::{Account, LedgerError};

/// Trait for a medium holding the full account snapshot
///
/// Implementations replace the whole snapshot on every save; there is no
/// incremental or append mode.
pub trait SnapshotStore {
    /// Read the current snapshot
    ///
    /// Returns `Ok(None)` when the store does not exist yet. Undecodable
    /// records are skipped; only I/O failures are errors.
    fn load(&self) -> Result<Option<Vec<Account>>, LedgerError>;

    /// Replace the stored snapshot with `accounts`
    fn save(&self, accounts: &[Account]) -> Result<(), LedgerError>;

    /// Human-readable location used in diagnostics
    fn location(&self) -> String;
}
