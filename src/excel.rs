mod cell;
mod sheet;
mod workbook;

pub use cell::{CellType, Value, excel_serial_to_datetime};
pub use sheet::{Column, ColumnType, Table};
pub use workbook::{Workbook, open_workbook};
