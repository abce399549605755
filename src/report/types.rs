use crate::error::InspectError;

pub const DEFAULT_PREVIEW_ROWS: usize = 5;
pub const DEFAULT_SAMPLE_VALUES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Rows shown in each sheet's preview table
    pub preview_rows: usize,
    /// Non-null values listed per column
    pub sample_values: usize,
    /// Report a sheet that fails to load and move on instead of aborting
    pub keep_going: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            preview_rows: DEFAULT_PREVIEW_ROWS,
            sample_values: DEFAULT_SAMPLE_VALUES,
            keep_going: false,
        }
    }
}

/// What a finished run produced.
#[derive(Debug, Default)]
pub struct ReportOutcome {
    pub sheets_reported: usize,
    pub failures: Vec<InspectError>,
}

impl ReportOutcome {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}
