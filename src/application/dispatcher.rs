use crate::domain::{Account, Amount, LedgerEntry};

use super::error::CommandError;
use super::statement::{project, StatementRow};

/// One recognized action. The vocabulary is the four case-insensitive
/// single-letter tokens `D`, `W`, `P` and `Q`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Deposit,
    Withdraw,
    PrintStatement,
    Quit,
}

impl Action {
    pub fn parse(token: &str) -> Result<Self, CommandError> {
        match token.to_ascii_uppercase().as_str() {
            "D" => Ok(Action::Deposit),
            "W" => Ok(Action::Withdraw),
            "P" => Ok(Action::PrintStatement),
            "Q" => Ok(Action::Quit),
            _ => Err(CommandError::UnknownCommand(token.to_string())),
        }
    }

    /// True for the actions that take an amount on the following prompt.
    pub fn takes_amount(&self) -> bool {
        matches!(self, Action::Deposit | Action::Withdraw)
    }
}

/// Outcome of one dispatched command.
///
/// Every invocation ends in exactly one of these states; there is no fatal
/// path. Quit is a signal for the caller's loop to observe, never a process
/// exit from in here.
#[derive(Debug, Clone)]
pub enum CommandResult {
    /// A deposit or withdrawal went through; the entry is the one appended
    /// to the account history.
    Executed(LedgerEntry),
    /// The command was invalid in some way; nothing was mutated.
    Rejected {
        entry: LedgerEntry,
        error: CommandError,
    },
    /// A statement was requested; the rows are ready for rendering.
    StatementReady {
        entry: LedgerEntry,
        rows: Vec<StatementRow>,
    },
    /// The user asked to end the session.
    QuitRequested { entry: LedgerEntry },
}

impl CommandResult {
    pub fn is_quit(&self) -> bool {
        matches!(self, CommandResult::QuitRequested { .. })
    }

    /// The ledger entry this command produced (a no-op for everything but an
    /// executed transaction).
    pub fn entry(&self) -> &LedgerEntry {
        match self {
            CommandResult::Executed(entry)
            | CommandResult::Rejected { entry, .. }
            | CommandResult::StatementReady { entry, .. }
            | CommandResult::QuitRequested { entry } => entry,
        }
    }
}

/// Validate and execute one command against the account.
///
/// `raw_amount` is the text typed on the amount prompt; it is only consulted
/// for deposit and withdraw. Invalid conditions of any kind degrade to
/// [`CommandResult::Rejected`] with the account untouched.
pub fn execute(
    action_token: &str,
    raw_amount: Option<&str>,
    account: &mut Account,
) -> CommandResult {
    let action = match Action::parse(action_token) {
        Ok(action) => action,
        Err(error) => return reject(account, error),
    };

    match action {
        Action::Deposit => match validated_amount(raw_amount) {
            Ok(amount) => CommandResult::Executed(account.deposit(amount)),
            Err(error) => reject(account, error),
        },
        Action::Withdraw => match validated_amount(raw_amount)
            .and_then(|amount| account.withdraw(amount).map_err(CommandError::from))
        {
            Ok(entry) => CommandResult::Executed(entry),
            Err(error) => reject(account, error),
        },
        Action::PrintStatement => CommandResult::StatementReady {
            entry: LedgerEntry::no_op(account.balance()),
            rows: project(account.history()),
        },
        Action::Quit => CommandResult::QuitRequested {
            entry: LedgerEntry::no_op(account.balance()),
        },
    }
}

/// Parse and validate an amount for a transaction: a decimal numeral that is
/// positive and resolves to whole cents.
fn validated_amount(raw: Option<&str>) -> Result<Amount, CommandError> {
    let text = raw.ok_or(CommandError::MissingAmount)?;
    let amount =
        Amount::parse(text).map_err(|_| CommandError::UnparsableAmount(text.to_string()))?;
    if !amount.is_positive() || !amount.has_at_most_two_decimal_places() {
        return Err(CommandError::InvalidAmount);
    }
    Ok(amount)
}

fn reject(account: &Account, error: CommandError) -> CommandResult {
    CommandResult::Rejected {
        entry: LedgerEntry::no_op(account.balance()),
        error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_vocabulary_is_case_insensitive() {
        for token in ["D", "d"] {
            assert_eq!(Action::parse(token).unwrap(), Action::Deposit);
        }
        assert_eq!(Action::parse("w").unwrap(), Action::Withdraw);
        assert_eq!(Action::parse("P").unwrap(), Action::PrintStatement);
        assert_eq!(Action::parse("q").unwrap(), Action::Quit);
    }

    #[test]
    fn test_unknown_tokens_are_rejected() {
        for token in ["x", "deposit", "", "DD", "1"] {
            assert!(matches!(
                Action::parse(token),
                Err(CommandError::UnknownCommand(_))
            ));
        }
    }

    #[test]
    fn test_only_transactions_take_an_amount() {
        assert!(Action::Deposit.takes_amount());
        assert!(Action::Withdraw.takes_amount());
        assert!(!Action::PrintStatement.takes_amount());
        assert!(!Action::Quit.takes_amount());
    }

    #[test]
    fn test_validated_amount_rules() {
        assert!(validated_amount(Some("300.44")).is_ok());
        assert!(matches!(
            validated_amount(None),
            Err(CommandError::MissingAmount)
        ));
        assert!(matches!(
            validated_amount(Some("abc")),
            Err(CommandError::UnparsableAmount(_))
        ));
        assert!(matches!(
            validated_amount(Some("-0.44")),
            Err(CommandError::InvalidAmount)
        ));
        assert!(matches!(
            validated_amount(Some("0")),
            Err(CommandError::InvalidAmount)
        ));
        assert!(matches!(
            validated_amount(Some("1.999")),
            Err(CommandError::InvalidAmount)
        ));
    }

    #[test]
    fn test_quit_is_a_signal_not_an_exit() {
        let mut account = Account::new();
        let result = execute("q", None, &mut account);

        assert!(result.is_quit());
        assert!(!result.entry().is_transaction());
        assert!(account.history().is_empty());
    }
}
