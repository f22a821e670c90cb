//! Selection events coming from the UI layer.
//!
//! A table widget reports its selection either as a list of scenario names
//! or as the selected row objects themselves:
//!
//! ```json
//! ["Base", "High"]
//! [{"Name": "Base", "revenue": 100, "cost": 40, "profit": 60}]
//! ```
//!
//! Row objects are loosely typed, so each one is checked before use. Only the
//! name is taken from a row; metric values are always re-read from the
//! loaded table.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use super::options::ColumnNames;
use super::record::ScenarioId;
use crate::common::{Error, Result};

/// Raw selection payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SelectionEvent {
    /// Selected scenario names
    Ids(Vec<ScenarioId>),
    /// Selected row objects as sent by the table widget
    Rows(Vec<Map<String, Value>>),
}

impl Default for SelectionEvent {
    fn default() -> Self {
        Self::Ids(Vec::new())
    }
}

impl SelectionEvent {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ScenarioId>,
    {
        Self::Ids(ids.into_iter().map(Into::into).collect())
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Ids(ids) => ids.is_empty(),
            Self::Rows(rows) => rows.is_empty(),
        }
    }

    /// Scenario names referenced by the event.
    ///
    /// Malformed rows are logged and skipped.
    pub fn scenario_ids(&self, columns: &ColumnNames) -> Vec<ScenarioId> {
        match self {
            Self::Ids(ids) => ids.clone(),
            Self::Rows(rows) => rows
                .iter()
                .enumerate()
                .filter_map(|(i, row)| match SelectedRow::from_object(row, columns) {
                    Ok(selected) => Some(selected.name),
                    Err(e) => {
                        warn!(index = i, error = %e, "skipping malformed selected row");
                        None
                    },
                })
                .collect(),
        }
    }
}

/// A validated selected row.
///
/// Only the name is kept. Metric fields are checked but never read, since
/// charted values come from the loaded table.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedRow {
    pub name: ScenarioId,
}

impl SelectedRow {
    /// Validate a row object against the configured column names.
    ///
    /// The name must be a non-empty string. Metric fields may be absent or
    /// null but must otherwise be numbers.
    pub fn from_object(row: &Map<String, Value>, columns: &ColumnNames) -> Result<Self> {
        let name = match row.get(&columns.name) {
            Some(Value::String(s)) if !s.trim().is_empty() => ScenarioId::new(s.trim()),
            Some(Value::String(_)) => {
                return Err(Error::MalformedRow(format!("empty '{}' field", columns.name)));
            },
            Some(other) => {
                return Err(Error::MalformedRow(format!(
                    "'{}' must be a string, found {}",
                    columns.name, other
                )));
            },
            None => {
                return Err(Error::MalformedRow(format!("missing '{}' field", columns.name)));
            },
        };

        for key in [&columns.revenue, &columns.cost, &columns.profit] {
            check_numeric(row, key)?;
        }
        Ok(Self { name })
    }
}

fn check_numeric(row: &Map<String, Value>, key: &str) -> Result<()> {
    match row.get(key) {
        None | Some(Value::Null) | Some(Value::Number(_)) => Ok(()),
        Some(other) => Err(Error::MalformedRow(format!(
            "'{}' must be numeric, found {}",
            key, other
        ))),
    }
}
