use std::io::Write;

use anyhow::Result;

use crate::application::StatementRow;

/// Writes projected statement rows to external formats.
pub struct Exporter<'a> {
    rows: &'a [StatementRow],
}

impl<'a> Exporter<'a> {
    pub fn new(rows: &'a [StatementRow]) -> Self {
        Self { rows }
    }

    /// Export the statement as CSV. Returns the number of rows written,
    /// excluding the header.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["date", "amount", "balance"])?;
        for row in self.rows {
            csv_writer.write_record([&row.date, &row.amount, &row.balance])?;
        }

        csv_writer.flush()?;
        Ok(self.rows.len())
    }

    /// Export the statement as a JSON array of row objects. Returns the
    /// number of rows written.
    pub fn write_json<W: Write>(&self, writer: W) -> Result<usize> {
        serde_json::to_writer_pretty(writer, self.rows)?;
        Ok(self.rows.len())
    }
}
