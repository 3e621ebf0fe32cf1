use std::io::Write;

use anyhow::Result;

use crate::application::{CommandResult, Signal, StatementRow};
use crate::domain::LedgerEntry;

const WELCOME_HEADER: &str = "Welcome to Teller! What would you like to do?";

const MENU: &str = "[D]eposit\n[W]ithdraw\n[P]rint statement\n[Q]uit";

const NEXT_ACTION: &str = "Is there anything else you'd like to do?";

const INVALID_COMMAND: &str = "\nThe command is invalid. Please enter either D, W, P or Q.";

const INVALID_VALUE: &str = "\nThe amount entered was invalid. Please enter a positive value \
     with at most 2 decimal places. Overdraft on this account is not allowed.";

const GOODBYE: &str = "Thank you for banking with Teller.\nHave a nice day!";

/// Renders prompts, warnings and the statement table to its writer.
///
/// One `View` exists per session and is passed in explicitly; there is no
/// process-wide presentation state.
pub struct View<W: Write> {
    out: W,
}

impl<W: Write> View<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Menu shown once at session start.
    pub fn welcome(&mut self) -> Result<()> {
        self.menu(WELCOME_HEADER)
    }

    /// Menu shown after a command, headed by an acknowledgement when the
    /// previous command moved money.
    pub fn menu_after(&mut self, previous: &CommandResult) -> Result<()> {
        if let CommandResult::Executed(entry) = previous {
            match entry {
                LedgerEntry::Deposit { amount, .. } => writeln!(
                    self.out,
                    "\nThank you. ${amount} has been deposited to your account."
                )?,
                LedgerEntry::Withdraw { amount, .. } => {
                    writeln!(self.out, "\nThank you. ${amount} has been withdrawn.")?
                }
                LedgerEntry::NoOp { .. } => {}
            }
        }
        self.menu(NEXT_ACTION)
    }

    /// Ask for the amount of a pending transaction; `verb` is "deposit" or
    /// "withdraw".
    pub fn prompt_amount(&mut self, verb: &str) -> Result<()> {
        writeln!(self.out, "Please enter the amount to {verb}:")?;
        self.out.flush()?;
        Ok(())
    }

    pub fn warn(&mut self, signal: Signal) -> Result<()> {
        let text = match signal {
            Signal::InvalidCommand => INVALID_COMMAND,
            Signal::InvalidValue => INVALID_VALUE,
        };
        writeln!(self.out, "{text}")?;
        self.out.flush()?;
        Ok(())
    }

    /// Print the statement as a three-column table, each column right-padded
    /// to its widest cell.
    pub fn statement(&mut self, rows: &[StatementRow]) -> Result<()> {
        let header = ("Date", "Amount", "Balance");

        let date_width = column_width(header.0, rows.iter().map(|r| r.date.len()));
        let amount_width = column_width(header.1, rows.iter().map(|r| r.amount.len()));
        let balance_width = column_width(header.2, rows.iter().map(|r| r.balance.len()));

        writeln!(self.out)?;
        writeln!(
            self.out,
            "{:<date_width$} | {:<amount_width$} | {:<balance_width$}",
            header.0, header.1, header.2
        )?;
        for row in rows {
            writeln!(
                self.out,
                "{:<date_width$} | {:<amount_width$} | {:<balance_width$}",
                row.date, row.amount, row.balance
            )?;
        }
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }

    pub fn goodbye(&mut self) -> Result<()> {
        writeln!(self.out, "{GOODBYE}")?;
        self.out.flush()?;
        Ok(())
    }

    fn menu(&mut self, header: &str) -> Result<()> {
        writeln!(self.out, "{header}")?;
        writeln!(self.out, "{MENU}")?;
        self.out.flush()?;
        Ok(())
    }
}

fn column_width(header: &str, cells: impl Iterator<Item = usize>) -> usize {
    cells.fold(header.len(), usize::max)
}
