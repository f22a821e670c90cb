//! Format-independent spreadsheet values.
//!
//! Worksheet readers produce [`Row`]s of [`CellValue`]s; the scenario loader
//! interprets them by header name.

pub mod types;

pub use types::{CellValue, Row};
