//! Transpose of selected rows into a metric-by-scenario matrix.

use serde::Serialize;
use tracing::debug;

use super::record::Metric;
use super::select::ComparisonRow;

/// Metrics as rows, scenarios as columns.
///
/// `values[m][s]` is metric `Metric::ALL[m]` of scenario `scenarios[s]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonMatrix {
    scenarios: Vec<String>,
    values: [Vec<f64>; 3],
}

/// Transpose selected rows. Returns `None` when nothing is selected.
///
/// # Examples
///
/// ```rust
/// use scenario_compare::scenario::{reshape, ComparisonRow, Metric};
///
/// let rows = vec![ComparisonRow {
///     scenario: "Base".to_string(),
///     revenue: 100.0,
///     cost: 40.0,
///     profit: 60.0,
/// }];
/// let matrix = reshape(&rows).unwrap();
/// assert_eq!(matrix.value(Metric::Cost, "Base"), Some(40.0));
/// assert!(reshape(&[]).is_none());
/// ```
pub fn reshape(selected: &[ComparisonRow]) -> Option<ComparisonMatrix> {
    if selected.is_empty() {
        return None;
    }

    let scenarios = selected.iter().map(|row| row.scenario.clone()).collect();
    let values = Metric::ALL.map(|metric| selected.iter().map(|row| row.value(metric)).collect());

    debug!(scenarios = selected.len(), "built comparison matrix");
    Some(ComparisonMatrix { scenarios, values })
}

impl ComparisonMatrix {
    /// Column headers in selection order.
    pub fn scenarios(&self) -> &[String] {
        &self.scenarios
    }

    /// Row labels, always `Revenue, Cost, Profit`.
    pub fn metrics(&self) -> &'static [Metric] {
        &Metric::ALL
    }

    /// Values of one metric across all scenarios.
    pub fn row(&self, metric: Metric) -> &[f64] {
        &self.values[metric_index(metric)]
    }

    /// Values of one scenario in metric order.
    pub fn column(&self, scenario: &str) -> Option<[f64; 3]> {
        let col = self.scenarios.iter().position(|s| s == scenario)?;
        Some(self.values.each_ref().map(|row| row[col]))
    }

    pub fn value(&self, metric: Metric, scenario: &str) -> Option<f64> {
        let col = self.scenarios.iter().position(|s| s == scenario)?;
        Some(self.row(metric)[col])
    }

    /// Rows with their metric label as the leading column.
    pub fn rows(&self) -> impl Iterator<Item = (&'static str, &[f64])> + '_ {
        Metric::ALL
            .iter()
            .map(move |&metric| (metric.label(), self.row(metric)))
    }

    pub fn scenario_count(&self) -> usize {
        self.scenarios.len()
    }
}

#[inline]
fn metric_index(metric: Metric) -> usize {
    match metric {
        Metric::Revenue => 0,
        Metric::Cost => 1,
        Metric::Profit => 2,
    }
}
