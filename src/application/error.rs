use thiserror::Error;

use crate::domain::{Amount, LedgerError};

/// Why a command was rejected.
///
/// Rejections are never fatal: the dispatcher recovers every one of them into
/// a no-op result carrying the error, and the presentation layer renders the
/// matching [`Signal`]. The variants are internal detail; the user only ever
/// sees the two signal classes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("amount is not a valid decimal numeral: '{0}'")]
    UnparsableAmount(String),

    #[error("amount must be positive with at most two decimal places")]
    InvalidAmount,

    #[error("withdrawal of {requested} is not covered by balance {balance}")]
    OverdraftRejected { balance: Amount, requested: Amount },

    #[error("an amount is required for this command")]
    MissingAmount,

    #[error("unrecognized command: '{0}'")]
    UnknownCommand(String),
}

/// User-facing classification of a rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    InvalidValue,
    InvalidCommand,
}

impl CommandError {
    pub fn signal(&self) -> Signal {
        match self {
            CommandError::UnknownCommand(_) => Signal::InvalidCommand,
            _ => Signal::InvalidValue,
        }
    }
}

impl From<LedgerError> for CommandError {
    fn from(error: LedgerError) -> Self {
        match error {
            LedgerError::Overdraft { balance, requested } => {
                CommandError::OverdraftRejected { balance, requested }
            }
        }
    }
}
