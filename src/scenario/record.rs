//! Typed scenario rows and the in-memory scenario table.

use std::collections::HashMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::common::DataSourceError;

/// One row of the scenarios sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioRecord {
    /// Scenario name, unique within a table
    pub name: String,
    /// Creation date with any time of day discarded
    pub created_date: NaiveDate,
    pub revenue: f64,
    pub cost: f64,
    /// Inventory cost; loaded but not part of the comparison
    pub inventory_cost: f64,
    pub profit: f64,
    /// Profit as a percentage (the stored fraction times 100)
    pub profit_percent: f64,
}

impl ScenarioRecord {
    /// Value of a comparison metric.
    #[inline]
    pub fn metric(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Revenue => self.revenue,
            Metric::Cost => self.cost,
            Metric::Profit => self.profit,
        }
    }
}

/// Identifier of a scenario row: its unique name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScenarioId(String);

impl ScenarioId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ScenarioId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ScenarioId {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for ScenarioId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Comparison metrics, in the fixed order they appear as chart categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    Revenue,
    Cost,
    Profit,
}

impl Metric {
    /// All metrics in source column order.
    pub const ALL: [Metric; 3] = [Metric::Revenue, Metric::Cost, Metric::Profit];

    /// Display label used for matrix rows and chart categories.
    #[inline]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Revenue => "Revenue",
            Self::Cost => "Cost",
            Self::Profit => "Profit",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered table of scenarios in source row order, indexed by name.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScenarioTable {
    records: Vec<ScenarioRecord>,
    index: HashMap<String, usize>,
}

impl ScenarioTable {
    /// Build a table, rejecting duplicate scenario names.
    pub fn new(records: Vec<ScenarioRecord>) -> Result<Self, DataSourceError> {
        let mut index = HashMap::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            if index.insert(record.name.clone(), i).is_some() {
                return Err(DataSourceError::DuplicateScenario(record.name.clone()));
            }
        }
        Ok(Self { records, index })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in source order.
    pub fn records(&self) -> &[ScenarioRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScenarioRecord> {
        self.records.iter()
    }

    /// Look up a scenario by name.
    pub fn get(&self, name: &str) -> Option<&ScenarioRecord> {
        self.index.get(name).map(|&i| &self.records[i])
    }

    /// Source row position (0-based) of a scenario.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }
}

impl<'a> IntoIterator for &'a ScenarioTable {
    type Item = &'a ScenarioRecord;
    type IntoIter = std::slice::Iter<'a, ScenarioRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
pub(crate) fn record(name: &str, revenue: f64, cost: f64, profit: f64) -> ScenarioRecord {
    ScenarioRecord {
        name: name.to_string(),
        created_date: NaiveDate::from_ymd_opt(2023, 1, 2).unwrap(),
        revenue,
        cost,
        inventory_cost: cost / 2.0,
        profit,
        profit_percent: if revenue == 0.0 { 0.0 } else { profit / revenue * 100.0 },
    }
}
