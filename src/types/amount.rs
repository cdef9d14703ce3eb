//! Validated money amounts
//!
//! Every deposit, withdrawal, transfer and opening balance passes through
//! [`Amount`], so the ledger itself never re-checks sign or precision.

use super::account::to_currency;
use super::error::LedgerError;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// A strictly positive amount with exactly two fractional digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Amount(Decimal);

impl Amount {
    /// Round `value` half-up to two decimals and accept it if still positive
    ///
    /// # Errors
    ///
    /// Returns `NonPositiveAmount` when the rounded value is zero or negative
    pub fn new(value: Decimal) -> Result<Self, LedgerError> {
        let rounded = to_currency(value);
        if rounded <= Decimal::ZERO {
            return Err(LedgerError::non_positive_amount(rounded));
        }
        Ok(Amount(rounded))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl FromStr for Amount {
    type Err = LedgerError;

    /// Parse operator input such as `1000`, ` 12.5 ` or `0.005`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value = Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map_err(|_| LedgerError::invalid_amount(s))?;
        Amount::new(value)
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = LedgerError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Amount::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
