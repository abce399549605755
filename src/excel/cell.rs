use calamine::{CellErrorType, Data};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use std::fmt;

// Serial of 9999-12-31, the last date Excel can represent
const MAX_EXCEL_SERIAL: f64 = 2_958_466.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellType {
    Int,
    Float,
    Bool,
    Text,
    DateTime,
    Duration,
    Error,
}

impl fmt::Display for CellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CellType::Int => "int",
            CellType::Float => "float",
            CellType::Bool => "bool",
            CellType::Text => "string",
            CellType::DateTime => "datetime",
            CellType::Duration => "duration",
            CellType::Error => "error",
        };
        f.write_str(name)
    }
}

/// A present (non-null) cell value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
    DateTime(NaiveDateTime),
    Duration(String),
    Error(String),
}

impl Value {
    /// Converts a calamine cell, returning `None` for anything that counts as missing:
    /// empty cells, empty strings and `#N/A`.
    pub fn from_data(data: &Data) -> Option<Self> {
        let value = match data {
            Data::Empty => return None,

            Data::String(s) => {
                if s.is_empty() {
                    return None;
                }
                Value::Text(s.clone())
            }

            Data::Float(f) => {
                if *f == (*f as i64) as f64 && f.abs() < 1e15 {
                    Value::Int(*f as i64)
                } else {
                    Value::Float(*f)
                }
            }

            Data::Int(i) => Value::Int(*i),

            Data::Bool(b) => Value::Bool(*b),

            Data::Error(CellErrorType::NA) => return None,

            Data::Error(e) => Value::Error(e.to_string()),

            Data::DateTime(dt) => match excel_serial_to_datetime(dt.as_f64()) {
                Some(datetime) => Value::DateTime(datetime),
                None => Value::Float(dt.as_f64()),
            },

            Data::DateTimeIso(s) => match parse_iso_datetime(s) {
                Some(datetime) => Value::DateTime(datetime),
                None => Value::Text(s.clone()),
            },

            Data::DurationIso(s) => Value::Duration(s.clone()),
        };

        Some(value)
    }

    pub fn cell_type(&self) -> CellType {
        match self {
            Value::Int(_) => CellType::Int,
            Value::Float(_) => CellType::Float,
            Value::Bool(_) => CellType::Bool,
            Value::Text(_) => CellType::Text,
            Value::DateTime(_) => CellType::DateTime,
            Value::Duration(_) => CellType::Duration,
            Value::Error(_) => CellType::Error,
        }
    }

    /// Renders the value as a list literal element: numbers and booleans bare,
    /// everything else quoted.
    pub fn literal(&self) -> String {
        match self {
            Value::Int(_) | Value::Float(_) => self.to_string(),
            Value::Bool(b) => b.to_string(),
            _ => format!("{:?}", self.to_string()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{:?}", x),
            Value::Bool(true) => f.write_str("TRUE"),
            Value::Bool(false) => f.write_str("FALSE"),
            Value::Text(s) | Value::Duration(s) | Value::Error(s) => f.write_str(s),
            Value::DateTime(dt) => {
                if dt.num_seconds_from_midnight() == 0 {
                    write!(f, "{}", dt.format("%Y-%m-%d"))
                } else {
                    write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S"))
                }
            }
        }
    }
}

/// Converts an Excel serial date (1900 date system) into a `NaiveDateTime`.
///
/// Serials above 59 are shifted by one day to undo Excel's phantom 1900-02-29.
pub fn excel_serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() || !(0.0..MAX_EXCEL_SERIAL).contains(&serial) {
        return None;
    }

    let days = if serial > 59.0 { serial - 1.0 } else { serial };

    // Day 0 is 1899-12-31, so serial 1 lands on 1900-01-01
    let base_date = NaiveDate::from_ymd_opt(1899, 12, 31)?;
    let date = base_date.checked_add_signed(Duration::days(days.trunc() as i64))?;

    let seconds = (days.fract() * 86_400.0).round() as u32;
    let time = NaiveTime::from_num_seconds_from_midnight_opt(seconds.min(86_399), 0)?;

    Some(NaiveDateTime::new(date, time))
}

fn parse_iso_datetime(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}
