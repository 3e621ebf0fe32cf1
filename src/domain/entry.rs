use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Amount;

pub type EntryId = Uuid;

/// Immutable record of one executed action.
///
/// `Deposit` and `Withdraw` carry the transaction amount, when it happened
/// and the balance it left behind. `NoOp` marks an action with no financial
/// effect (a rejection, a statement print, a quit) and only snapshots the
/// balance at that moment. Entries are never edited once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LedgerEntry {
    Deposit {
        id: EntryId,
        amount: Amount,
        timestamp: DateTime<Utc>,
        resulting_balance: Amount,
    },
    Withdraw {
        id: EntryId,
        amount: Amount,
        timestamp: DateTime<Utc>,
        resulting_balance: Amount,
    },
    NoOp {
        balance: Amount,
    },
}

impl LedgerEntry {
    pub fn deposit(amount: Amount, resulting_balance: Amount) -> Self {
        LedgerEntry::Deposit {
            id: Uuid::new_v4(),
            amount,
            timestamp: Utc::now(),
            resulting_balance,
        }
    }

    pub fn withdraw(amount: Amount, resulting_balance: Amount) -> Self {
        LedgerEntry::Withdraw {
            id: Uuid::new_v4(),
            amount,
            timestamp: Utc::now(),
            resulting_balance,
        }
    }

    pub fn no_op(balance: Amount) -> Self {
        LedgerEntry::NoOp { balance }
    }

    /// True iff this entry records an actual movement of money.
    pub fn is_transaction(&self) -> bool {
        !matches!(self, LedgerEntry::NoOp { .. })
    }

    /// The transaction amount, if any. Always positive; the withdrawal sign
    /// is a display convention applied at statement projection time.
    pub fn amount(&self) -> Option<Amount> {
        match self {
            LedgerEntry::Deposit { amount, .. } | LedgerEntry::Withdraw { amount, .. } => {
                Some(amount.clone())
            }
            LedgerEntry::NoOp { .. } => None,
        }
    }

    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            LedgerEntry::Deposit { timestamp, .. } | LedgerEntry::Withdraw { timestamp, .. } => {
                Some(*timestamp)
            }
            LedgerEntry::NoOp { .. } => None,
        }
    }

    /// The account balance after this entry. For `NoOp` this is the snapshot
    /// taken when the action was recorded.
    pub fn resulting_balance(&self) -> Amount {
        match self {
            LedgerEntry::Deposit {
                resulting_balance, ..
            }
            | LedgerEntry::Withdraw {
                resulting_balance, ..
            } => resulting_balance.clone(),
            LedgerEntry::NoOp { balance } => balance.clone(),
        }
    }
}
