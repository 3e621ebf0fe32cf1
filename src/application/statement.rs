use serde::{Deserialize, Serialize};

use crate::domain::LedgerEntry;

/// Date column text of the sentinel row shown when there is nothing to list.
pub const EMPTY_STATEMENT_LABEL: &str = "No transactions yet";

const DATE_FORMAT: &str = "%d %b %Y %I:%M:%S%p";
const NIL: &str = "NIL";

/// One statement line, already formatted for table rendering or export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementRow {
    pub date: String,
    pub amount: String,
    pub balance: String,
}

/// Project an account history into statement rows.
///
/// Only real transactions appear; no-op entries are filtered out. Rows come
/// out in execution order. Withdrawal amounts get a leading `-` here and only
/// here; the stored amounts stay positive. An account with zero transactions
/// yields exactly one sentinel row with balance `"0.00"`.
pub fn project(history: &[LedgerEntry]) -> Vec<StatementRow> {
    let rows: Vec<StatementRow> = history.iter().filter_map(row_for_entry).collect();
    if rows.is_empty() {
        return vec![StatementRow {
            date: EMPTY_STATEMENT_LABEL.to_string(),
            amount: NIL.to_string(),
            balance: "0.00".to_string(),
        }];
    }
    rows
}

fn row_for_entry(entry: &LedgerEntry) -> Option<StatementRow> {
    match entry {
        LedgerEntry::Deposit {
            amount,
            timestamp,
            resulting_balance,
            ..
        } => Some(StatementRow {
            date: timestamp.format(DATE_FORMAT).to_string(),
            amount: amount.to_string(),
            balance: resulting_balance.to_string(),
        }),
        LedgerEntry::Withdraw {
            amount,
            timestamp,
            resulting_balance,
            ..
        } => Some(StatementRow {
            date: timestamp.format(DATE_FORMAT).to_string(),
            amount: format!("-{amount}"),
            balance: resulting_balance.to_string(),
        }),
        LedgerEntry::NoOp { .. } => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Amount;

    fn amount(text: &str) -> Amount {
        Amount::parse(text).unwrap()
    }

    #[test]
    fn test_empty_history_yields_sentinel_row() {
        let rows = project(&[]);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].date, EMPTY_STATEMENT_LABEL);
        assert_eq!(rows[0].amount, "NIL");
        assert_eq!(rows[0].balance, "0.00");
    }

    #[test]
    fn test_no_ops_are_filtered() {
        let history = vec![
            LedgerEntry::no_op(Amount::zero()),
            LedgerEntry::deposit(amount("200"), amount("200")),
            LedgerEntry::no_op(amount("200")),
        ];

        let rows = project(&history);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].amount, "200.00");
    }

    #[test]
    fn test_history_of_only_no_ops_yields_sentinel_row() {
        let history = vec![LedgerEntry::no_op(Amount::zero())];

        let rows = project(&history);

        assert_eq!(rows[0].date, EMPTY_STATEMENT_LABEL);
        assert_eq!(rows[0].balance, "0.00");
    }

    #[test]
    fn test_withdrawals_are_signed_at_projection_time() {
        let history = vec![
            LedgerEntry::deposit(amount("300.44"), amount("300.44")),
            LedgerEntry::withdraw(amount("200.12"), amount("100.32")),
        ];

        let rows = project(&history);

        assert_eq!(rows[0].amount, "300.44");
        assert_eq!(rows[1].amount, "-200.12");
        assert_eq!(rows[1].balance, "100.32");
    }

    #[test]
    fn test_rows_keep_execution_order() {
        let history = vec![
            LedgerEntry::deposit(amount("200"), amount("200")),
            LedgerEntry::withdraw(amount("150"), amount("50")),
            LedgerEntry::deposit(amount("300.44"), amount("350.44")),
        ];

        let rows = project(&history);

        let amounts: Vec<&str> = rows.iter().map(|r| r.amount.as_str()).collect();
        assert_eq!(amounts, vec!["200.00", "-150.00", "300.44"]);
    }
}
