//! Account Ledger Library
//! # Overview
//!
//! A single-user account ledger: create customer accounts, deposit, withdraw,
//! transfer, inspect, delete and list them, with the whole collection
//! persisted to a flat text file after every mutation.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (Account, Amount, LedgerError)
//! - [`core`] - Business logic:
//!   - [`core::ledger`] - Account registry, balance rules and snapshot persistence
//!   - [`core::traits`] - The snapshot store abstraction
//! - [`io`] - Store text format plus file-backed and in-memory stores
//! - [`cli`] - Argument parsing, operator input parsing and the interactive shell
//! - [`logging`] - tracing subscriber setup for the binary
//!
//! # Outcomes
//!
//! Ledger operations return `Result`. The expected business outcomes are
//! [`LedgerError::AccountNotFound`] and [`LedgerError::InsufficientFunds`];
//! neither changes nor persists anything.
//!
//! # Example
//!
//! ```
//! use account_ledger::{Amount, Ledger};
//!
//! let ledger = Ledger::in_memory();
//! let alice = ledger.create_account("Alice", "1000.00".parse::<Amount>().unwrap()).unwrap();
//! let bob = ledger.create_account("Bob", "500.00".parse::<Amount>().unwrap()).unwrap();
//!
//! ledger
//!     .transfer(alice.account_number(), bob.account_number(), "300".parse().unwrap())
//!     .unwrap();
//!
//! assert_eq!(ledger.get_account(1002).unwrap().balance().to_string(), "800.00");
//! ```

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod logging;
pub mod types;

pub use core::{Ledger, SnapshotStore, FIRST_ACCOUNT_NUMBER};
pub use io::{FileStore, MemoryStore};
pub use types::{Account, AccountNumber, Amount, LedgerError};
