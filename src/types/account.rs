//! Account-related types for the account ledger
//!
//! This module defines the Account record, the account number type and the
//! two-decimal normalisation shared by every balance assignment.

use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;

/// Account identifier
///
/// Assigned by the ledger, starting at 1001 for an empty store
pub type AccountNumber = u32;

/// Number of fractional digits carried by every balance and amount
pub const CURRENCY_SCALE: u32 = 2;

/// Round a value half-up to two decimal places and fix its scale at two
///
/// `1.005` becomes `1.01`, `7` becomes `7.00`.
pub fn to_currency(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(CURRENCY_SCALE);
    rounded
}

/// Customer account
///
/// The account number and owner name are fixed at creation. Only the balance
/// changes, and only through the ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    account_number: AccountNumber,
    owner_name: String,
    /// Always carries exactly two fractional digits
    balance: Decimal,
}

impl Account {
    /// Create an account, normalising the balance to two decimals
    pub fn new(
        account_number: AccountNumber,
        owner_name: impl Into<String>,
        balance: Decimal,
    ) -> Self {
        Account {
            account_number,
            owner_name: owner_name.into(),
            balance: to_currency(balance),
        }
    }

    pub fn account_number(&self) -> AccountNumber {
        self.account_number
    }

    pub fn owner_name(&self) -> &str {
        &self.owner_name
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Replace the balance, re-normalising to two decimals
    pub(crate) fn set_balance(&mut self, balance: Decimal) {
        self.balance = to_currency(balance);
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Account #{} | Name: {} | Balance: {:.2}",
            self.account_number, self.owner_name, self.balance
        )
    }
}
