//! Excel (.xlsx) spreadsheet reading.
//!
//! This module provides read access to Microsoft Excel spreadsheets in the
//! Office Open XML (OOXML) format:
//!
//! - `Workbook`: workbook.xml, its relationships and the shared strings
//! - `Worksheet`: the populated rows of one sheet
//!
//! # Example
//!
//! ```rust,no_run
//! use scenario_compare::ooxml::xlsx::Workbook;
//!
//! let mut workbook = Workbook::open("scenarios.xlsx")?;
//! println!("Sheets: {:?}", workbook.worksheet_names());
//!
//! let sheet = workbook.worksheet_by_name("Scenarios Summary")?;
//! for row in sheet.rows() {
//!     println!("{:?}", row);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod parsers;
mod shared_strings;
mod workbook;
mod worksheet;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::XlsxError;
pub use shared_strings::SharedStrings;
pub use workbook::Workbook;
pub use worksheet::{Worksheet, WorksheetInfo, column_to_letters};
