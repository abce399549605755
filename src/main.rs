use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use excel_inspect::report::{self, DEFAULT_PREVIEW_ROWS, DEFAULT_SAMPLE_VALUES, ReportOptions};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Excel file path
    #[arg(default_value = "products_detailed.xlsx")]
    file_path: PathBuf,

    /// Number of rows shown in each sheet's preview
    #[arg(long, short = 'n', default_value_t = DEFAULT_PREVIEW_ROWS)]
    preview_rows: usize,

    /// Number of non-null sample values listed per column
    #[arg(long = "samples", short = 's', default_value_t = DEFAULT_SAMPLE_VALUES)]
    sample_values: usize,

    /// Report sheets that fail to load and continue with the next one
    #[arg(long, short = 'k')]
    keep_going: bool,
}

fn main() -> Result<()> {
    // Logs go to stderr so they never mix with the report, and stay off unless RUST_LOG asks
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::OFF.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let options = ReportOptions {
        preview_rows: cli.preview_rows,
        sample_values: cli.sample_values,
        keep_going: cli.keep_going,
    };

    let stdout = std::io::stdout();
    report::run(&cli.file_path, &options, stdout.lock())
        .context("Failed to write report to stdout")?;

    Ok(())
}
