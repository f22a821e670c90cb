//! Common types for spreadsheet cells.

use std::fmt;

/// Types of data that can be stored in a cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Empty cell
    Empty,
    /// Boolean value
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point number
    Float(f64),
    /// String value
    String(String),
    /// Date/time value (stored as serial number)
    DateTime(f64),
    /// Error value
    Error(String),
}

impl CellValue {
    /// Check if the cell is empty (or holds only whitespace text).
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::String(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Numeric view of the cell.
    ///
    /// Numbers and date serials convert directly; text is parsed after
    /// trimming, so `" 12.5 "` yields `12.5`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Int(i) => Some(*i as f64),
            CellValue::Float(f) | CellValue::DateTime(f) => Some(*f),
            CellValue::String(s) => fast_float2::parse(s.trim()).ok(),
            _ => None,
        }
    }

    /// Short name of the value kind, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            CellValue::Empty => "empty",
            CellValue::Bool(_) => "boolean",
            CellValue::Int(_) => "integer",
            CellValue::Float(_) => "number",
            CellValue::String(_) => "text",
            CellValue::DateTime(_) => "date",
            CellValue::Error(_) => "error",
        }
    }
}

/// A populated sheet row.
///
/// `cells[0]` is column A. Cells past the last one holding a value are not
/// stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// 1-based row number in the sheet
    pub number: u32,
    pub cells: Vec<CellValue>,
}

impl Row {
    pub fn new(number: u32, cells: Vec<CellValue>) -> Self {
        Self { number, cells }
    }

    /// Cell at a 0-based column index; missing cells read as empty.
    #[inline]
    pub fn cell(&self, index: usize) -> &CellValue {
        static EMPTY: CellValue = CellValue::Empty;
        self.cells.get(index).unwrap_or(&EMPTY)
    }

    /// Whether every cell is empty or whitespace.
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(CellValue::is_empty)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Bool(b) => write!(f, "{}", if *b { "TRUE" } else { "FALSE" }),
            CellValue::Int(i) => write!(f, "{}", i),
            CellValue::Float(v) | CellValue::DateTime(v) => write!(f, "{}", v),
            CellValue::String(s) => f.write_str(s),
            CellValue::Error(e) => f.write_str(e),
        }
    }
}
