mod view;

pub use view::View;

use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use crate::application::{Action, CommandResult, execute, project};
use crate::domain::Account;
use crate::io::Exporter;

/// Teller - interactive single-account bank ledger
#[derive(Parser)]
#[command(name = "teller")]
#[command(about = "An interactive single-account bank ledger for the command line")]
#[command(version)]
pub struct Cli {
    /// Write the session statement to this file when the session ends
    #[arg(short, long)]
    pub export: Option<PathBuf>,

    /// Export format
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Csv)]
    pub format: ExportFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let mut account = Account::new();

        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut session = Session::new(stdin.lock(), stdout.lock());
        session.run(&mut account)?;
        drop(session);

        if let Some(path) = self.export {
            let rows = project(account.history());
            let exporter = Exporter::new(&rows);
            let file = File::create(&path)
                .with_context(|| format!("cannot create export file {}", path.display()))?;
            let count = match self.format {
                ExportFormat::Csv => exporter.write_csv(file)?,
                ExportFormat::Json => exporter.write_json(file)?,
            };
            eprintln!("Exported {} statement row(s) to {}", count, path.display());
        }
        Ok(())
    }
}

/// One interactive session over a single in-memory account.
///
/// Reads action tokens (and amount lines for deposit/withdraw) from its
/// reader, renders through its [`View`], and dispatches each command until
/// the user quits. End of input is treated like quit so piped sessions end
/// cleanly.
pub struct Session<R: BufRead, W: Write> {
    input: R,
    view: View<W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            view: View::new(output),
        }
    }

    pub fn run(&mut self, account: &mut Account) -> Result<()> {
        let mut previous: Option<CommandResult> = None;

        loop {
            match &previous {
                None => self.view.welcome()?,
                Some(result) => self.view.menu_after(result)?,
            }

            let Some(token) = self.read_line()? else {
                break;
            };

            let raw_amount = match Action::parse(&token) {
                Ok(action) if action.takes_amount() => {
                    let verb = if action == Action::Deposit {
                        "deposit"
                    } else {
                        "withdraw"
                    };
                    self.view.prompt_amount(verb)?;
                    self.read_line()?
                }
                _ => None,
            };

            let result = execute(&token, raw_amount.as_deref(), account);
            match &result {
                CommandResult::Rejected { error, .. } => self.view.warn(error.signal())?,
                CommandResult::StatementReady { rows, .. } => self.view.statement(rows)?,
                CommandResult::QuitRequested { .. } => break,
                CommandResult::Executed(_) => {}
            }
            previous = Some(result);
        }

        self.view.goodbye()
    }

    /// Next trimmed input line, or `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
