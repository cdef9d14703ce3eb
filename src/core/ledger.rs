//! Account ledger
//!
//! This module provides the `Ledger`, the single owner of all account state.
//!
//! The Ledger is responsible for:
//! - Assigning account numbers from a monotonic counter (starting at 1001)
//! - Enforcing balance invariants (no debit below zero)
//! - Persisting the full account collection after every successful mutation
//! - Restoring state from the store at startup
//!
//! # Concurrency
//!
//! Every operation holds one mutex for its whole duration, including the
//! trailing persist. Compound operations (read balance, compare, mutate,
//! persist) therefore never interleave, and the store always receives a
//! consistent snapshot.
//!
//! # Persistence failures
//!
//! A failed persist after a successful mutation does not undo the mutation:
//! the in-memory state stays correct and the failure is logged at `error`
//! level. Call [`Ledger::save`] directly to observe persistence errors.

use crate::core::traits::SnapshotStore;
use crate::io::{FileStore, MemoryStore};
use crate::types::{Account, AccountNumber, Amount, LedgerError};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, error, info};

/// First account number handed out by an empty ledger
pub const FIRST_ACCOUNT_NUMBER: AccountNumber = 1001;

/// State guarded by the ledger mutex
#[derive(Debug)]
struct LedgerState {
    accounts: HashMap<AccountNumber, Account>,
    /// Strictly greater than every account number ever present
    ///
    /// Wider than `AccountNumber` so it can still sit above `u32::MAX`.
    next_account_number: u64,
}

impl LedgerState {
    fn sorted_accounts(&self) -> Vec<Account> {
        let mut accounts: Vec<Account> = self.accounts.values().cloned().collect();
        accounts.sort_by_key(Account::account_number);
        accounts
    }

    fn balance_of(&self, account_number: AccountNumber) -> Result<Decimal, LedgerError> {
        self.accounts
            .get(&account_number)
            .map(Account::balance)
            .ok_or_else(|| LedgerError::account_not_found(account_number))
    }

    fn account_mut(&mut self, account_number: AccountNumber) -> Result<&mut Account, LedgerError> {
        self.accounts
            .get_mut(&account_number)
            .ok_or_else(|| LedgerError::account_not_found(account_number))
    }
}

/// In-memory account registry with snapshot persistence
///
/// Generic over its [`SnapshotStore`]; production code uses [`FileStore`].
#[derive(Debug)]
pub struct Ledger<S = FileStore> {
    state: Mutex<LedgerState>,
    store: S,
}

impl Ledger<FileStore> {
    /// Create an empty ledger persisting to the file at `path`
    pub fn with_file(path: impl Into<PathBuf>) -> Self {
        Ledger::new(FileStore::new(path))
    }
}

impl Ledger<MemoryStore> {
    /// Create an empty ledger persisting to memory
    pub fn in_memory() -> Self {
        Ledger::new(MemoryStore::new())
    }
}

impl<S: SnapshotStore> Ledger<S> {
    /// Create an empty ledger over `store`
    ///
    /// Nothing is read until [`Ledger::load`] is called.
    pub fn new(store: S) -> Self {
        Ledger {
            state: Mutex::new(LedgerState {
                accounts: HashMap::new(),
                next_account_number: u64::from(FIRST_ACCOUNT_NUMBER),
            }),
            store,
        }
    }

    /// The backing store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The number the next created account will receive
    ///
    /// Above `AccountNumber::MAX` once every number has been used.
    pub fn next_account_number(&self) -> u64 {
        self.lock().next_account_number
    }

    /// Open a new account with an opening deposit
    ///
    /// Assigns the next account number, persists, and returns a copy of the
    /// new account. The owner name is stored as given; validation is the
    /// caller's concern.
    ///
    /// # Returns
    ///
    /// * `Ok(Account)` - The new account
    /// * `Err(LedgerError)` - If no unused account number is left
    pub fn create_account(
        &self,
        owner_name: impl Into<String>,
        initial_deposit: Amount,
    ) -> Result<Account, LedgerError> {
        let mut state = self.lock();

        let account_number = AccountNumber::try_from(state.next_account_number)
            .map_err(|_| LedgerError::AccountNumbersExhausted)?;
        state.next_account_number += 1;

        let account = Account::new(account_number, owner_name, initial_deposit.value());
        state.accounts.insert(account_number, account.clone());
        self.persist(&state);

        info!(
            account = account_number,
            owner = account.owner_name(),
            balance = %account.balance(),
            "Created account"
        );
        Ok(account)
    }

    /// Credit `amount` to an account
    ///
    /// # Returns
    ///
    /// * `Ok(Account)` - The account after the deposit
    /// * `Err(LedgerError)` - If the account does not exist or the balance would overflow
    pub fn deposit(
        &self,
        account_number: AccountNumber,
        amount: Amount,
    ) -> Result<Account, LedgerError> {
        let mut state = self.lock();

        let account = state.account_mut(account_number)?;
        let new_balance = account
            .balance()
            .checked_add(amount.value())
            .ok_or_else(|| LedgerError::arithmetic_overflow("deposit", account_number))?;
        account.set_balance(new_balance);
        let updated = account.clone();

        self.persist(&state);

        info!(account = account_number, amount = %amount, "Deposit");
        Ok(updated)
    }

    /// Debit `amount` from an account
    ///
    /// # Returns
    ///
    /// * `Ok(Account)` - The account after the withdrawal
    /// * `Err(LedgerError)` - If the account does not exist or holds less than `amount`
    ///
    /// A rejected withdrawal changes nothing and persists nothing.
    pub fn withdraw(
        &self,
        account_number: AccountNumber,
        amount: Amount,
    ) -> Result<Account, LedgerError> {
        let mut state = self.lock();

        let account = state.account_mut(account_number)?;
        if account.balance() < amount.value() {
            return Err(LedgerError::insufficient_funds(
                account_number,
                account.balance(),
                amount.value(),
            ));
        }
        account.set_balance(account.balance() - amount.value());
        let updated = account.clone();

        self.persist(&state);

        info!(account = account_number, amount = %amount, "Withdraw");
        Ok(updated)
    }

    /// Move `amount` from one account to another
    ///
    /// Both balances change and are persisted by a single save, or neither
    /// changes. A transfer from an account to itself succeeds when the
    /// balance covers `amount` and leaves the balance as it was.
    ///
    /// # Returns
    ///
    /// * `Ok((from, to))` - Both accounts after the transfer
    /// * `Err(LedgerError)` - If either account is missing or `from` holds less than `amount`
    pub fn transfer(
        &self,
        from: AccountNumber,
        to: AccountNumber,
        amount: Amount,
    ) -> Result<(Account, Account), LedgerError> {
        let mut state = self.lock();

        let from_balance = state.balance_of(from)?;
        let to_balance = state.balance_of(to)?;

        if from_balance < amount.value() {
            return Err(LedgerError::insufficient_funds(
                from,
                from_balance,
                amount.value(),
            ));
        }

        if from != to {
            let credited = to_balance
                .checked_add(amount.value())
                .ok_or_else(|| LedgerError::arithmetic_overflow("transfer", to))?;

            state.account_mut(from)?.set_balance(from_balance - amount.value());
            state.account_mut(to)?.set_balance(credited);
        }

        let debited = state.account_mut(from)?.clone();
        let credited = state.account_mut(to)?.clone();

        self.persist(&state);

        info!(from, to, amount = %amount, "Transfer");
        Ok((debited, credited))
    }

    /// Look up an account; never persists
    pub fn get_account(&self, account_number: AccountNumber) -> Option<Account> {
        self.lock().accounts.get(&account_number).cloned()
    }

    /// Remove an account and return it
    ///
    /// The removed number is never handed out again.
    pub fn delete_account(&self, account_number: AccountNumber) -> Result<Account, LedgerError> {
        let mut state = self.lock();

        let removed = state
            .accounts
            .remove(&account_number)
            .ok_or_else(|| LedgerError::account_not_found(account_number))?;

        self.persist(&state);

        info!(account = account_number, "Deleted account");
        Ok(removed)
    }

    /// All accounts, sorted ascending by account number
    pub fn list_accounts(&self) -> Vec<Account> {
        self.lock().sorted_accounts()
    }

    /// Replace in-memory state with the contents of the store
    ///
    /// A missing store leaves the ledger empty. The account counter only
    /// moves forward: it becomes `max(current, highest loaded number + 1)`,
    /// so gaps and hand edits in the store never lead to reused numbers.
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - Number of accounts now held
    /// * `Err(LedgerError)` - If the store could not be read; the ledger is left empty
    pub fn load(&self) -> Result<usize, LedgerError> {
        let mut state = self.lock();
        state.accounts.clear();

        let loaded = match self.store.load()? {
            Some(accounts) => accounts,
            None => {
                info!(store = %self.store.location(), "No store found, starting empty");
                return Ok(0);
            }
        };

        for account in loaded {
            let account_number = account.account_number();
            state.next_account_number = state
                .next_account_number
                .max(u64::from(account_number) + 1);
            state.accounts.insert(account_number, account);
        }

        let count = state.accounts.len();
        info!(
            store = %self.store.location(),
            accounts = count,
            next_account_number = state.next_account_number,
            "Loaded ledger"
        );
        Ok(count)
    }

    /// Write the entire account collection to the store
    ///
    /// Replaces any prior content.
    pub fn save(&self) -> Result<(), LedgerError> {
        let state = self.lock();
        self.store.save(&state.sorted_accounts())
    }

    fn lock(&self) -> MutexGuard<'_, LedgerState> {
        // Mutations only happen after every check has passed, so the state
        // behind a poisoned lock is still consistent.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn persist(&self, state: &LedgerState) {
        match self.store.save(&state.sorted_accounts()) {
            Ok(()) => debug!(
                store = %self.store.location(),
                accounts = state.accounts.len(),
                "Persisted snapshot"
            ),
            Err(e) => error!(
                store = %self.store.location(),
                error = %e,
                "Failed to persist snapshot, changes are held in memory only"
            ),
        }
    }
}

impl Default for Ledger<FileStore> {
    fn default() -> Self {
        Self::new(FileStore::default())
    }
}
