//! Types module
//!
//! Contains core data structures used throughout the application.
//! - `account`: Account record and currency normalisation
//! - `amount`: Validated positive money amounts
//! - `error`: Error types for the ledger

pub mod account;
pub mod amount;
pub mod error;

pub use account::{to_currency, Account, AccountNumber, CURRENCY_SCALE};
pub use amount::Amount;
pub use error::LedgerError;
