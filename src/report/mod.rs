mod preview;
mod printer;
mod stats;
mod types;

use std::io::{self, Write};
use std::path::Path;
use tracing::{error, info, warn};

use crate::error::{InspectError, Result};
use crate::excel::{Table, open_workbook};

pub use preview::render_preview;
pub use printer::{DIAGNOSTIC_PREFIX, ReportPrinter};
pub use stats::ColumnStats;
pub use types::{DEFAULT_PREVIEW_ROWS, DEFAULT_SAMPLE_VALUES, ReportOptions, ReportOutcome};

/// Writes the full report for the workbook at `path` to `out`.
///
/// Any inspection failure is turned into a single diagnostic line and the run
/// stops there; sections written before the failure stay in the output. Only a
/// failing output stream is returned as an error.
pub fn run<W: Write>(path: &Path, options: &ReportOptions, out: W) -> io::Result<ReportOutcome> {
    let mut printer = ReportPrinter::new(out);
    let mut outcome = ReportOutcome::default();

    match inspect_workbook(path, options, &mut printer, &mut outcome) {
        Ok(()) => {}
        Err(InspectError::Output(err)) => return Err(err),
        Err(err) => {
            error!(path = %path.display(), error = %err, "inspection aborted");
            printer.diagnostic(&err)?;
            outcome.failures.push(err);
        }
    }

    printer.flush()?;
    Ok(outcome)
}

/// Like [`run`], but hands the aborting error back instead of printing it.
pub fn inspect<W: Write>(path: &Path, options: &ReportOptions, out: W) -> Result<ReportOutcome> {
    let mut printer = ReportPrinter::new(out);
    let mut outcome = ReportOutcome::default();

    inspect_workbook(path, options, &mut printer, &mut outcome)?;
    printer.flush()?;

    Ok(outcome)
}

fn inspect_workbook<W: Write>(
    path: &Path,
    options: &ReportOptions,
    printer: &mut ReportPrinter<W>,
    outcome: &mut ReportOutcome,
) -> Result<()> {
    printer.title(path)?;

    let mut workbook = open_workbook(path)?;
    let sheet_names = workbook.sheet_names().to_vec();
    printer.sheet_list(&sheet_names)?;

    for name in &sheet_names {
        let table = match workbook.load_table(name) {
            Ok(table) => table,
            Err(err @ InspectError::Parse { .. }) if options.keep_going => {
                warn!(sheet = %name, error = %err, "skipping sheet");
                printer.sheet_header(name)?;
                printer.sheet_failure(name, &err)?;
                outcome.failures.push(err);
                continue;
            }
            Err(err) => return Err(err),
        };

        report_table(&table, options, printer)?;
        outcome.sheets_reported += 1;
    }

    info!(
        path = %workbook.path().display(),
        sheets = outcome.sheets_reported,
        failures = outcome.failures.len(),
        "inspection finished"
    );

    Ok(())
}

fn report_table<W: Write>(
    table: &Table,
    options: &ReportOptions,
    printer: &mut ReportPrinter<W>,
) -> io::Result<()> {
    printer.sheet_header(&table.name)?;
    printer.shape(table)?;
    printer.headers(table)?;
    printer.preview(table, options.preview_rows)?;

    let stats: Vec<ColumnStats> = table
        .columns
        .iter()
        .map(|column| ColumnStats::compute(column, options.sample_values))
        .collect();
    printer.column_stats(&stats)
}
