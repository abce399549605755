use calamine::{Data, Range};
use std::fmt;

use crate::excel::{CellType, Value};
use crate::utils::helpers::index_to_col_name;

/// Storage type of a whole column, inferred from its non-null cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnType {
    Empty,
    Uniform(CellType),
    Mixed,
}

impl ColumnType {
    pub fn infer<'a, I>(values: I) -> Self
    where
        I: IntoIterator<Item = &'a Value>,
    {
        values
            .into_iter()
            .fold(ColumnType::Empty, |acc, value| acc.widen(value.cell_type()))
    }

    fn widen(self, next: CellType) -> Self {
        match (self, next) {
            (ColumnType::Empty, t) => ColumnType::Uniform(t),
            (ColumnType::Uniform(t), n) if t == n => self,
            (ColumnType::Uniform(CellType::Int), CellType::Float)
            | (ColumnType::Uniform(CellType::Float), CellType::Int) => {
                ColumnType::Uniform(CellType::Float)
            }
            _ => ColumnType::Mixed,
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnType::Empty => f.write_str("empty"),
            ColumnType::Uniform(t) => write!(f, "{}", t),
            ColumnType::Mixed => f.write_str("mixed"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Column {
    pub header: String,
    pub values: Vec<Option<Value>>,
    pub column_type: ColumnType,
}

impl Column {
    /// Infers the column type; in a `float` column whole numbers are stored as floats.
    pub fn new(header: String, mut values: Vec<Option<Value>>) -> Self {
        let column_type = ColumnType::infer(values.iter().flatten());

        if column_type == ColumnType::Uniform(CellType::Float) {
            for value in values.iter_mut().flatten() {
                if let Value::Int(i) = *value {
                    *value = Value::Float(i as f64);
                }
            }
        }

        Self {
            header,
            values,
            column_type,
        }
    }

    pub fn non_null(&self) -> impl Iterator<Item = &Value> {
        self.values.iter().flatten()
    }
}

/// A sheet loaded as a table: the first row of the used range holds the
/// headers, every following row is data. Columns are anchored at column A.
#[derive(Clone, Debug)]
pub struct Table {
    pub name: String,
    pub columns: Vec<Column>,
    pub row_count: usize,
}

impl Table {
    pub fn from_range(name: &str, range: &Range<Data>) -> Self {
        let (height, width) = range.get_size();
        let first_col = range.start().map_or(0, |(_, col)| col as usize);

        let mut rows = range.rows();

        let headers: Vec<String> = match rows.next() {
            Some(header_row) => header_row
                .iter()
                .enumerate()
                .map(|(idx, data)| header_name(data, first_col + idx))
                .collect(),
            None => Vec::new(),
        };

        let row_count = height.saturating_sub(1);
        let mut values: Vec<Vec<Option<Value>>> = vec![Vec::with_capacity(row_count); width];

        for row in rows {
            for (col_idx, column) in values.iter_mut().enumerate() {
                column.push(row.get(col_idx).and_then(Value::from_data));
            }
        }

        // Blank leading sheet columns still count, as unnamed all-null columns
        let columns = (0..first_col)
            .map(|col_idx| Column::new(header_name(&Data::Empty, col_idx), vec![None; row_count]))
            .chain(
                headers
                    .into_iter()
                    .zip(values)
                    .map(|(header, values)| Column::new(header, values)),
            )
            .collect();

        Table {
            name: name.to_string(),
            columns,
            row_count,
        }
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.header.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }

    /// Cells of one data row in column order, `None` for null cells.
    pub fn row(&self, row_idx: usize) -> Vec<Option<&Value>> {
        self.columns
            .iter()
            .map(|c| c.values.get(row_idx).and_then(Option::as_ref))
            .collect()
    }
}

// `col_idx` is the 0-based absolute sheet column
fn header_name(data: &Data, col_idx: usize) -> String {
    match Value::from_data(data) {
        Some(value) => value.to_string(),
        None => format!("Unnamed: {}", index_to_col_name(col_idx + 1)),
    }
}
