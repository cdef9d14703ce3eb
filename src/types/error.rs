//! Error types for the account ledger
//!
//! # Error Categories
//!
//! - **Business outcomes**: account not found, insufficient funds. These are
//!   expected, recoverable results of ledger operations.
//! - **Input validation**: malformed amounts, account numbers and names.
//!   Produced only while parsing operator input, never by the ledger.
//! - **Persistence**: I/O and store format failures. Reported to the caller,
//!   never fatal to the process.

use super::account::AccountNumber;
use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the ledger
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// No account with the given number exists
    #[error("Account {account} not found")]
    AccountNotFound {
        /// The account number that was looked up
        account: AccountNumber,
    },

    /// A withdrawal or transfer debit exceeds the current balance
    ///
    /// The account is left unchanged.
    #[error("Insufficient funds in account {account}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        /// Account that would have been debited
        account: AccountNumber,
        /// Balance at the time of the request
        balance: Decimal,
        /// Requested debit
        requested: Decimal,
    },

    /// A credit would exceed the representable balance
    #[error("Arithmetic overflow in {operation} for account {account}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Account that would have been credited
        account: AccountNumber,
    },

    /// Every account number up to `AccountNumber::MAX` has been handed out
    #[error("No account numbers left to assign")]
    AccountNumbersExhausted,

    /// Amount text could not be parsed as a decimal
    #[error("Invalid amount '{input}'")]
    InvalidAmount { input: String },

    /// Amount is zero or negative after rounding to two decimals
    #[error("Amount must be greater than 0, got {amount}")]
    NonPositiveAmount { amount: Decimal },

    /// Account number text could not be parsed
    #[error("Invalid account number '{input}'")]
    InvalidAccountNumber { input: String },

    /// Owner name is empty after trimming
    #[error("Owner name cannot be empty")]
    EmptyOwnerName,

    /// I/O error while reading or writing the store
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// The store could not be encoded or decoded
    #[error("Store format error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    Format {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the format error
        message: String,
    },

    /// A freshly written snapshot could not replace the store file
    #[error("Failed to replace store '{path}': {message}")]
    Persist { path: String, message: String },
}

impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::Io {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for LedgerError {
    fn from(error: csv::Error) -> Self {
        if error.is_io_error() {
            return LedgerError::Io {
                message: error.to_string(),
            };
        }

        let line = error.position().map(|pos| pos.line());

        LedgerError::Format {
            line,
            message: error.to_string(),
        }
    }
}

impl LedgerError {
    /// Create an AccountNotFound error
    pub fn account_not_found(account: AccountNumber) -> Self {
        LedgerError::AccountNotFound { account }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(account: AccountNumber, balance: Decimal, requested: Decimal) -> Self {
        LedgerError::InsufficientFunds {
            account,
            balance,
            requested,
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, account: AccountNumber) -> Self {
        LedgerError::ArithmeticOverflow {
            operation: operation.to_string(),
            account,
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(input: &str) -> Self {
        LedgerError::InvalidAmount {
            input: input.to_string(),
        }
    }

    /// Create a NonPositiveAmount error
    pub fn non_positive_amount(amount: Decimal) -> Self {
        LedgerError::NonPositiveAmount { amount }
    }

    /// Create an InvalidAccountNumber error
    pub fn invalid_account_number(input: &str) -> Self {
        LedgerError::InvalidAccountNumber {
            input: input.to_string(),
        }
    }

    /// Create a Persist error for the store at `path`
    pub fn persist(path: &std::path::Path, error: &std::io::Error) -> Self {
        LedgerError::Persist {
            path: path.display().to_string(),
            message: error.to_string(),
        }
    }

    /// True for the expected business outcomes of a ledger operation
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            LedgerError::AccountNotFound { .. } | LedgerError::InsufficientFunds { .. }
        )
    }
}
