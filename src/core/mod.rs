//! Core business logic module
//!
//! - `traits` - The snapshot store abstraction
//! - `ledger` - Account registry, balance rules and snapshot persistence

pub mod ledger;
pub mod traits;

pub use ledger::{Ledger, FIRST_ACCOUNT_NUMBER};
pub use traits::SnapshotStore;
