use calamine::{Reader, Sheets, open_workbook_auto};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{InspectError, Result};
use crate::excel::Table;

/// An open workbook. The underlying file stays open until this value is dropped.
pub struct Workbook {
    path: PathBuf,
    sheet_names: Vec<String>,
    calamine_workbook: Sheets<BufReader<File>>,
}

pub fn open_workbook<P: AsRef<Path>>(path: P) -> Result<Workbook> {
    let path = path.as_ref();

    // Open workbook directly from path; the format is picked from the extension
    let calamine_workbook = open_workbook_auto(path).map_err(|source| InspectError::File {
        path: path.to_path_buf(),
        source,
    })?;

    let sheet_names = calamine_workbook.sheet_names().to_vec();
    debug!(path = %path.display(), sheets = sheet_names.len(), "opened workbook");

    Ok(Workbook {
        path: path.to_path_buf(),
        sheet_names,
        calamine_workbook,
    })
}

impl Workbook {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn sheet_names(&self) -> &[String] {
        &self.sheet_names
    }

    pub fn load_table(&mut self, sheet_name: &str) -> Result<Table> {
        let range = self
            .calamine_workbook
            .worksheet_range(sheet_name)
            .map_err(|source| InspectError::Parse {
                sheet: sheet_name.to_string(),
                source,
            })?;

        let table = Table::from_range(sheet_name, &range);
        debug!(
            sheet = sheet_name,
            rows = table.row_count,
            columns = table.column_count(),
            "loaded sheet"
        );

        Ok(table)
    }
}
