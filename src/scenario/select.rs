//! Projection of selected scenarios onto the comparison columns.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::record::{Metric, ScenarioRecord, ScenarioTable};
use crate::common::{Error, Result};

/// A selected scenario reduced to the compared metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    #[serde(rename = "Scenario")]
    pub scenario: String,
    #[serde(rename = "Revenue")]
    pub revenue: f64,
    #[serde(rename = "Cost")]
    pub cost: f64,
    #[serde(rename = "Profit")]
    pub profit: f64,
}

impl ComparisonRow {
    #[inline]
    pub fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Revenue => self.revenue,
            Metric::Cost => self.cost,
            Metric::Profit => self.profit,
        }
    }
}

impl From<&ScenarioRecord> for ComparisonRow {
    fn from(record: &ScenarioRecord) -> Self {
        Self {
            scenario: record.name.clone(),
            revenue: record.revenue,
            cost: record.cost,
            profit: record.profit,
        }
    }
}

/// Rows of `table` whose names appear in `ids`, in table order.
///
/// Identifiers that match no scenario are dropped. Repeated identifiers
/// select a scenario once.
///
/// # Examples
///
/// ```rust
/// use scenario_compare::scenario::{select, ScenarioTable};
///
/// let table = ScenarioTable::default();
/// assert!(select(&table, ["Base"]).is_empty());
/// ```
pub fn select<I, S>(table: &ScenarioTable, ids: I) -> Vec<ComparisonRow>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut wanted = HashSet::new();
    for id in ids {
        let id = id.as_ref();
        if table.contains(id) {
            wanted.insert(id.to_string());
        } else {
            debug!(id, "dropping unknown scenario id");
        }
    }

    project(table, &wanted)
}

/// Like [`select`], but fails on the first identifier not in the table.
pub fn select_strict<I, S>(table: &ScenarioTable, ids: I) -> Result<Vec<ComparisonRow>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut wanted = HashSet::new();
    for id in ids {
        let id = id.as_ref();
        if !table.contains(id) {
            return Err(Error::UnknownScenario(id.to_string()));
        }
        wanted.insert(id.to_string());
    }

    Ok(project(table, &wanted))
}

fn project(table: &ScenarioTable, wanted: &HashSet<String>) -> Vec<ComparisonRow> {
    if wanted.is_empty() {
        return Vec::new();
    }
    table
        .iter()
        .filter(|record| wanted.contains(&record.name))
        .map(ComparisonRow::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::record::record;

    fn table() -> ScenarioTable {
        ScenarioTable::new(vec![
            record("Base", 100.0, 40.0, 60.0),
            record("High", 200.0, 80.0, 120.0),
            record("Low", 50.0, 45.0, 5.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_output_follows_table_order() {
        let rows = select(&table(), ["Low", "Base"]);
        let names: Vec<_> = rows.iter().map(|r| r.scenario.as_str()).collect();
        assert_eq!(names, ["Base", "Low"]);
        assert_eq!(rows[1].value(Metric::Profit), 5.0);
    }

    #[test]
    fn test_unknown_and_repeated_ids() {
        let rows = select(&table(), ["High", "Missing", "High"]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].scenario, "High");
        assert_eq!(rows[0].revenue, 200.0);

        assert!(select(&table(), ["Missing"]).is_empty());
        assert!(select(&table(), Vec::<String>::new()).is_empty());
    }

    #[test]
    fn test_strict_selection_rejects_unknown() {
        let err = select_strict(&table(), ["Base", "Missing"]).unwrap_err();
        assert!(matches!(err, Error::UnknownScenario(ref id) if id == "Missing"));

        let rows = select_strict(&table(), ["High", "Base"]).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].scenario, "Base");
    }

    #[test]
    fn test_row_serializes_with_display_names() {
        let row = ComparisonRow::from(&record("Base", 1.0, 2.0, 3.0));
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["Scenario"], "Base");
        assert_eq!(json["Cost"], 2.0);
    }
}
