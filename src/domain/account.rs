use thiserror::Error;

use super::{Amount, LedgerEntry};

/// A single bank account: the current balance plus an append-only, ordered
/// history of executed transactions.
///
/// The account is the sole mutator of its balance: the only ways to change it
/// are a successful [`deposit`](Account::deposit) or
/// [`withdraw`](Account::withdraw), each of which also appends the matching
/// [`LedgerEntry`]. History entries are never edited, removed or re-sorted.
#[derive(Debug, Default)]
pub struct Account {
    balance: Amount,
    history: Vec<LedgerEntry>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("withdrawal of {requested} is not covered by balance {balance}")]
    Overdraft { balance: Amount, requested: Amount },
}

impl Account {
    /// A fresh account: zero balance, empty history.
    pub fn new() -> Self {
        Self {
            balance: Amount::zero(),
            history: Vec::new(),
        }
    }

    pub fn balance(&self) -> Amount {
        self.balance.clone()
    }

    pub fn history(&self) -> &[LedgerEntry] {
        &self.history
    }

    /// Add `amount` to the balance and record a `Deposit` entry.
    pub fn deposit(&mut self, amount: Amount) -> LedgerEntry {
        let balance = self.balance.add(&amount);
        self.balance = balance.clone();
        let entry = LedgerEntry::deposit(amount, balance);
        self.history.push(entry.clone());
        entry
    }

    /// Subtract `amount` from the balance and record a `Withdraw` entry.
    ///
    /// Admissibility is strict: `amount` must be less than the balance, so a
    /// withdrawal that would drain the account to exactly zero is rejected.
    /// On error nothing is mutated and nothing is appended.
    pub fn withdraw(&mut self, amount: Amount) -> Result<LedgerEntry, LedgerError> {
        if amount >= self.balance {
            return Err(LedgerError::Overdraft {
                balance: self.balance.clone(),
                requested: amount,
            });
        }
        let balance = self.balance.subtract(&amount);
        self.balance = balance.clone();
        let entry = LedgerEntry::withdraw(amount, balance);
        self.history.push(entry.clone());
        Ok(entry)
    }
}
