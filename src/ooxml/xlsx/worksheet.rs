//! Excel worksheet data.
//!
//! A [`Worksheet`] keeps only the rows that hold at least one value. Cells
//! that carry nothing but formatting (`<c r="XFD9" s="1"/>`) do not widen or
//! lengthen the sheet.

use crate::sheet::{CellValue, Row};

use super::parsers::worksheet_parser::ParsedRow;

/// Worksheet entry declared in workbook.xml.
#[derive(Debug, Clone)]
pub struct WorksheetInfo {
    /// Sheet name as shown on the tab
    pub name: String,
    /// Relationship ID pointing at the worksheet part
    pub relationship_id: String,
    /// Stable sheet ID
    pub sheet_id: u32,
}

/// A parsed worksheet.
#[derive(Debug, Clone)]
pub struct Worksheet {
    name: String,
    /// Populated rows in ascending row order
    rows: Vec<Row>,
    column_count: usize,
}

impl Worksheet {
    /// Build a worksheet from parsed rows.
    ///
    /// Valueless cells are dropped before each row is laid out, so a row's
    /// width is set by its rightmost value. If a row number repeats, the
    /// first occurrence wins.
    pub fn from_parsed(name: impl Into<String>, parsed: Vec<ParsedRow>) -> Self {
        let mut rows: Vec<Row> = parsed
            .into_iter()
            .filter(|(number, _)| *number > 0)
            .filter_map(|(number, cells)| {
                let values: Vec<_> = cells
                    .into_iter()
                    .filter(|(col, value)| *col > 0 && *value != CellValue::Empty)
                    .collect();
                let width = values.iter().map(|(col, _)| *col as usize).max()?;

                let mut dense = vec![CellValue::Empty; width];
                for (col, value) in values {
                    dense[col as usize - 1] = value;
                }
                Some(Row::new(number, dense))
            })
            .collect();

        rows.sort_by_key(|row| row.number);
        rows.dedup_by_key(|row| row.number);

        let column_count = rows.iter().map(|row| row.cells.len()).max().unwrap_or(0);
        Self {
            name: name.into(),
            rows,
            column_count,
        }
    }

    /// Get the worksheet name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of populated rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns, counting up to the rightmost value.
    pub fn column_count(&self) -> usize {
        self.column_count
    }

    /// Populated rows in ascending row order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Get cell value by row and column (1-based indexing).
    pub fn cell_value(&self, row: u32, column: u32) -> &CellValue {
        static EMPTY: CellValue = CellValue::Empty;
        let Some(col) = (column as usize).checked_sub(1) else {
            return &EMPTY;
        };
        match self.rows.binary_search_by_key(&row, |r| r.number) {
            Ok(i) => self.rows[i].cell(col),
            Err(_) => &EMPTY,
        }
    }
}

/// Convert column number to Excel column letters (e.g., 1 -> "A", 26 -> "Z", 27 -> "AA").
pub fn column_to_letters(col: u32) -> String {
    let mut letters = String::new();
    let mut col = col;

    while col > 0 {
        col -= 1;
        let letter = ((col % 26) as u8 + b'A') as char;
        letters.insert(0, letter);
        col /= 26;
    }

    letters
}
