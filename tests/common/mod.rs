#![allow(dead_code)]

use std::fs::{self, File};
use std::io::Cursor;
use std::path::{Path, PathBuf};

use excel_inspect::report::{self, ReportOptions, ReportOutcome};
use rust_xlsxwriter::Workbook;
use tempfile::TempDir;
use zip::{ZipArchive, ZipWriter};

/// A cell written into a fixture workbook.
pub enum Cell {
    Text(&'static str),
    Number(f64),
    Bool(bool),
    Blank,
}

pub use Cell::{Blank, Bool, Number, Text};

pub type Rows = Vec<Vec<Cell>>;

pub fn write_workbook(path: &Path, sheets: &[(&str, Rows)]) {
    let mut workbook = Workbook::new();

    for (name, rows) in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(*name).unwrap();

        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                let (r, c) = (r as u32, c as u16);
                match cell {
                    Text(s) => {
                        worksheet.write_string(r, c, *s).unwrap();
                    }
                    Number(n) => {
                        worksheet.write_number(r, c, *n).unwrap();
                    }
                    Bool(b) => {
                        worksheet.write_boolean(r, c, *b).unwrap();
                    }
                    Blank => {}
                }
            }
        }
    }

    workbook.save(path).unwrap();
}

/// Rewrites the archive at `path` without the entry named `entry`, leaving a
/// workbook whose sheet list still names a sheet that cannot be read.
pub fn drop_archive_entry(path: &Path, entry: &str) {
    let bytes = fs::read(path).unwrap();
    let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut writer = ZipWriter::new(File::create(path).unwrap());

    for i in 0..archive.len() {
        let file = archive.by_index(i).unwrap();
        if file.name() == entry {
            continue;
        }
        writer.raw_copy_file(file).unwrap();
    }

    writer.finish().unwrap();
}

pub struct Fixture {
    _dir: TempDir,
    pub path: PathBuf,
}

pub fn fixture(file_name: &str, sheets: &[(&str, Rows)]) -> Fixture {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(file_name);
    write_workbook(&path, sheets);
    Fixture { _dir: dir, path }
}

/// The "Products" workbook: three rows, one missing price.
pub fn products() -> Fixture {
    fixture(
        "products.xlsx",
        &[(
            "Products",
            vec![
                vec![Text("Name"), Text("Price")],
                vec![Text("Widget"), Number(9.5)],
                vec![Text("Gadget"), Blank],
                vec![Text("Doohickey"), Number(3.0)],
            ],
        )],
    )
}

pub fn run_report(path: &Path, options: &ReportOptions) -> (String, ReportOutcome) {
    let mut out = Vec::new();
    let outcome = report::run(path, options, &mut out).unwrap();
    (String::from_utf8(out).unwrap(), outcome)
}

/// Lines of the block that starts right after the line equal to `label`,
/// up to the next blank line.
pub fn block_after<'a>(output: &'a str, label: &str) -> Vec<&'a str> {
    output
        .lines()
        .skip_while(|line| *line != label)
        .skip(1)
        .take_while(|line| !line.is_empty())
        .collect()
}

/// The portion of the report that belongs to one sheet.
pub fn sheet_section<'a>(output: &'a str, sheet: &str) -> &'a str {
    let marker = format!("Sheet: {}\n", sheet);
    let start = output
        .find(&marker)
        .unwrap_or_else(|| panic!("no section for sheet {sheet:?} in:\n{output}"));
    let rest = &output[start + marker.len()..];
    let end = rest.find("\nSheet: ").map_or(rest.len(), |i| i + 1);
    &rest[..end]
}
