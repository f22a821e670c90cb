//! Interactive comparison session.
//!
//! A [`Dashboard`] holds one loaded scenario table and turns each selection
//! change into a fresh chart. Nothing is carried over between events.

use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use super::chart::{ChartSpec, build_series_with};
use super::event::SelectionEvent;
use super::loader::load_with;
use super::options::{DashboardConfig, UnknownIdPolicy};
use super::record::ScenarioTable;
use super::reshape::reshape;
use super::select::{select, select_strict};
use crate::common::Result;

/// A comparison session over one scenario table.
///
/// # Examples
///
/// ```rust,no_run
/// use scenario_compare::scenario::{Dashboard, DashboardConfig, SelectionEvent};
///
/// let dashboard = Dashboard::open("scenarios.xlsx", DashboardConfig::default())?;
/// let event = SelectionEvent::from_json(r#"["Base", "High"]"#)?;
/// if let Some(chart) = dashboard.on_selection_changed(&event)? {
///     println!("{}", chart.to_json()?);
/// }
/// # Ok::<(), scenario_compare::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Dashboard {
    table: Arc<ScenarioTable>,
    config: DashboardConfig,
}

impl Dashboard {
    /// Load the workbook at `path` and start a session.
    pub fn open<P: AsRef<Path>>(path: P, config: DashboardConfig) -> Result<Self> {
        config.validate()?;
        let table = load_with(path, &config.load)?;
        Ok(Self { table, config })
    }

    /// Start a session over an already loaded table.
    pub fn from_table(table: Arc<ScenarioTable>, config: DashboardConfig) -> Self {
        Self { table, config }
    }

    /// The rows offered for selection, in source order.
    pub fn table(&self) -> &ScenarioTable {
        &self.table
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Chart for the current selection, or `None` when no known scenario is
    /// selected.
    ///
    /// With [`UnknownIdPolicy::Reject`] an unknown name fails the whole
    /// event.
    pub fn on_selection_changed(&self, event: &SelectionEvent) -> Result<Option<ChartSpec>> {
        let ids = event.scenario_ids(&self.config.load.columns);
        if ids.is_empty() {
            debug!("empty selection");
            return Ok(None);
        }

        let rows = match self.config.unknown_ids {
            UnknownIdPolicy::Ignore => select(&self.table, &ids),
            UnknownIdPolicy::Reject => select_strict(&self.table, &ids)?,
        };

        Ok(reshape(&rows).map(|matrix| build_series_with(&matrix, &self.config.chart)))
    }
}
