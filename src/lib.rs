//! Scenario-Compare - Side-by-side comparison of business scenarios
//!
//! This library reads a table of business scenarios from an Excel workbook
//! and turns a user's selection of scenarios into a grouped bar chart
//! comparing their revenue, cost and profit.
//!
//! # Features
//!
//! - **XLSX Reader**: Minimal OOXML spreadsheet reader (shared strings, inline
//!   strings, 1900/1904 date systems)
//! - **Scenario Loader**: Header-based column mapping with typed validation
//! - **Table Cache**: Each workbook is read once per process while unchanged
//! - **Chart Builder**: Renderer-neutral, serde-serializable chart specs
//!
//! # Example - Comparing two scenarios
//!
//! ```no_run
//! use scenario_compare::scenario::{build_series, load, reshape, select};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let table = load("scenarios.xlsx")?;
//! let rows = select(&table, ["Base", "High"]);
//!
//! if let Some(matrix) = reshape(&rows) {
//!     let chart = build_series(&matrix);
//!     println!("{}", chart.to_json()?);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Reading a worksheet directly
//!
//! ```no_run
//! use scenario_compare::ooxml::xlsx::Workbook;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut wb = Workbook::open("scenarios.xlsx")?;
//! for name in wb.worksheet_names() {
//!     println!("Sheet: {}", name);
//! }
//! let sheet = wb.worksheet_by_index(0)?;
//! println!("{} rows", sheet.row_count());
//! # Ok(())
//! # }
//! ```

/// Shared error types, date conversion and XML helpers
pub mod common;

/// OOXML (Office Open XML) package and spreadsheet reader
pub mod ooxml;

/// Scenario loading, selection, reshaping and charting
pub mod scenario;

/// Spreadsheet cell values
pub mod sheet;

// Re-export commonly used types for convenience
pub use common::{DataSourceError, Error, Result};
pub use scenario::{ChartSpec, Dashboard, DashboardConfig, ScenarioTable, SelectionEvent};
