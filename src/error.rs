use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for workbook inspection
pub type Result<T> = std::result::Result<T, InspectError>;

/// Errors that can abort an inspection
#[derive(Debug, Error)]
pub enum InspectError {
    /// The file is missing, unreadable or not a spreadsheet calamine recognizes
    #[error("unable to open workbook '{}': {source}", .path.display())]
    File {
        path: PathBuf,
        source: calamine::Error,
    },

    /// A sheet's content could not be read as a table
    #[error("unable to read worksheet '{sheet}': {source}")]
    Parse {
        sheet: String,
        source: calamine::Error,
    },

    /// The report itself could not be written
    #[error("failed to write report: {0}")]
    Output(#[from] io::Error),
}
