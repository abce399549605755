use std::io::{self, Write};
use std::path::Path;

use crate::error::InspectError;
use crate::excel::Table;
use crate::report::preview::render_preview;
use crate::report::stats::ColumnStats;

pub const DIAGNOSTIC_PREFIX: &str = "Error analyzing file: ";

const TITLE_RULE_WIDTH: usize = 60;
const SHEET_RULE_WIDTH: usize = 50;

/// Writes the report sections to any output stream. Every line goes out as
/// soon as it is produced, so a later failure never takes back earlier output.
pub struct ReportPrinter<W: Write> {
    out: W,
}

impl<W: Write> ReportPrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn title(&mut self, path: &Path) -> io::Result<()> {
        writeln!(self.out, "Analyzing file: {}", path.display())?;
        writeln!(self.out, "{}", "=".repeat(TITLE_RULE_WIDTH))
    }

    pub fn sheet_list(&mut self, names: &[String]) -> io::Result<()> {
        writeln!(self.out, "Sheets: {}", names.len())?;
        for (i, name) in names.iter().enumerate() {
            writeln!(self.out, "   {}. {}", i + 1, name)?;
        }
        writeln!(self.out)
    }

    pub fn sheet_header(&mut self, name: &str) -> io::Result<()> {
        writeln!(self.out, "Sheet: {}", name)?;
        writeln!(self.out, "{}", "=".repeat(SHEET_RULE_WIDTH))
    }

    pub fn shape(&mut self, table: &Table) -> io::Result<()> {
        writeln!(self.out, "Rows: {}", table.row_count)?;
        writeln!(self.out, "Columns: {}", table.column_count())?;
        writeln!(self.out)
    }

    pub fn headers(&mut self, table: &Table) -> io::Result<()> {
        writeln!(self.out, "Headers:")?;
        for (i, header) in table.headers().enumerate() {
            writeln!(self.out, "   {}. {}", i + 1, header)?;
        }
        writeln!(self.out)
    }

    pub fn preview(&mut self, table: &Table, limit: usize) -> io::Result<()> {
        if table.is_empty() {
            writeln!(self.out, "Preview: no data rows")?;
            return writeln!(self.out);
        }

        let shown = table.row_count.min(limit);
        writeln!(
            self.out,
            "Preview (first {} of {} rows):",
            shown, table.row_count
        )?;
        for line in render_preview(table, limit) {
            writeln!(self.out, "{}", line)?;
        }
        writeln!(self.out)
    }

    pub fn column_stats(&mut self, stats: &[ColumnStats]) -> io::Result<()> {
        writeln!(self.out, "Column statistics:")?;
        for column in stats {
            writeln!(self.out, "   {}:", column.header)?;
            writeln!(self.out, "      - type: {}", column.column_type)?;
            writeln!(self.out, "      - non-null: {}", column.non_null)?;
            writeln!(self.out, "      - null: {}", column.null)?;
            writeln!(self.out, "      - samples: {}", column.samples_literal())?;
        }
        writeln!(self.out)
    }

    pub fn sheet_failure(&mut self, name: &str, err: &InspectError) -> io::Result<()> {
        writeln!(self.out, "Error reading sheet '{}': {}", name, err)?;
        writeln!(self.out)
    }

    pub fn diagnostic(&mut self, err: &InspectError) -> io::Result<()> {
        writeln!(self.out, "{}{}", DIAGNOSTIC_PREFIX, err)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
