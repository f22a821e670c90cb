//! Scenario comparison pipeline.
//!
//! The pipeline runs in four steps, each usable on its own:
//!
//! 1. [`load`] reads the scenarios worksheet into a [`ScenarioTable`], cached
//!    per file.
//! 2. [`select`] projects the chosen scenarios onto the compared metrics.
//! 3. [`reshape`] transposes them into a [`ComparisonMatrix`].
//! 4. [`build_series`] turns the matrix into a grouped bar [`ChartSpec`].
//!
//! [`Dashboard`] wires the steps to UI selection events.

pub mod cache;
pub mod chart;
pub mod dashboard;
pub mod event;
pub mod format;
pub mod loader;
pub mod options;
pub mod record;
pub mod reshape;
pub mod select;

pub use cache::{TableCache, clear_cache, invalidate};
pub use chart::{BarMode, ChartSpec, Series, build_series, build_series_with};
pub use dashboard::Dashboard;
pub use event::{SelectedRow, SelectionEvent};
pub use format::format_si;
pub use loader::{load, load_with, read_table, table_from_rows};
pub use options::{ChartOptions, ColumnNames, DashboardConfig, LoadOptions, UnknownIdPolicy};
pub use record::{Metric, ScenarioId, ScenarioRecord, ScenarioTable};
pub use reshape::{ComparisonMatrix, reshape};
pub use select::{ComparisonRow, select, select_strict};
