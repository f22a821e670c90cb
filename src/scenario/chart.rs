//! Grouped bar chart description handed to the renderer.

use serde::{Deserialize, Serialize};

use super::format::{format_si, si_precision};
use super::options::ChartOptions;
use super::reshape::ComparisonMatrix;

/// How bars of different series share a category. Only grouped bars are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BarMode {
    /// Bars side by side within each category
    #[default]
    Group,
}

/// One bar series: a scenario's values in category order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub values: Vec<f64>,
}

/// Renderer-neutral chart specification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub title: String,
    pub y_axis_title: String,
    /// d3-format hint for bar value labels
    pub text_format: String,
    pub bar_mode: BarMode,
    /// Shared x-axis categories (metric labels)
    pub categories: Vec<String>,
    pub series: Vec<Series>,
}

impl ChartSpec {
    /// Value labels per series, following `text_format`.
    ///
    /// Falls back to two significant digits when the hint is not an SI
    /// format.
    pub fn value_labels(&self) -> Vec<Vec<String>> {
        let digits = si_precision(&self.text_format).unwrap_or(2);
        self.series
            .iter()
            .map(|s| s.values.iter().map(|&v| format_si(v, digits)).collect())
            .collect()
    }

    pub fn to_json(&self) -> crate::common::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Build a grouped bar chart with default titles.
pub fn build_series(matrix: &ComparisonMatrix) -> ChartSpec {
    build_series_with(matrix, &ChartOptions::default())
}

/// Build a grouped bar chart: one series per scenario column, one category
/// per metric row.
pub fn build_series_with(matrix: &ComparisonMatrix, options: &ChartOptions) -> ChartSpec {
    let categories = matrix.metrics().iter().map(|m| m.label().to_string()).collect();

    let series = matrix
        .scenarios()
        .iter()
        .filter_map(|scenario| {
            matrix.column(scenario).map(|values| Series {
                name: scenario.clone(),
                values: values.to_vec(),
            })
        })
        .collect();

    ChartSpec {
        title: options.title.clone(),
        y_axis_title: options.y_axis_title.clone(),
        text_format: options.text_format.clone(),
        bar_mode: BarMode::Group,
        categories,
        series,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::reshape::reshape;
    use crate::scenario::select::ComparisonRow;

    fn base_high() -> ComparisonMatrix {
        reshape(&[
            ComparisonRow {
                scenario: "Base".to_string(),
                revenue: 100.0,
                cost: 40.0,
                profit: 60.0,
            },
            ComparisonRow {
                scenario: "High".to_string(),
                revenue: 200.0,
                cost: 80.0,
                profit: 120.0,
            },
        ])
        .unwrap()
    }

    #[test]
    fn test_base_high_grouped_series() {
        let chart = build_series(&base_high());

        assert_eq!(chart.bar_mode, BarMode::Group);
        assert_eq!(chart.categories, ["Revenue", "Cost", "Profit"]);
        assert_eq!(chart.series.len(), 2);
        assert_eq!(chart.series[0].name, "Base");
        assert_eq!(chart.series[0].values, [100.0, 40.0, 60.0]);
        assert_eq!(chart.series[1].name, "High");
        assert_eq!(chart.series[1].values, [200.0, 80.0, 120.0]);
        assert_eq!(chart.title, "Scenario Comparison");
        assert_eq!(chart.y_axis_title, "Value ($)");
        assert_eq!(chart.text_format, ".2s");
    }

    #[test]
    fn test_custom_titles_and_labels() {
        let options = ChartOptions {
            title: "Q3".to_string(),
            text_format: ".3s".to_string(),
            ..ChartOptions::default()
        };
        let chart = build_series_with(&base_high(), &options);
        assert_eq!(chart.title, "Q3");

        let labels = chart.value_labels();
        assert_eq!(labels[0], ["100", "40.0", "60.0"]);
        assert_eq!(labels[1], ["200", "80.0", "120"]);
    }

    #[test]
    fn test_json_shape() {
        let chart = build_series(&base_high());
        let json: serde_json::Value = serde_json::from_str(&chart.to_json().unwrap()).unwrap();
        assert_eq!(json["bar_mode"], "group");
        assert_eq!(json["series"][1]["values"][2], 120.0);

        let back: ChartSpec = serde_json::from_value(json).unwrap();
        assert_eq!(back, chart);
    }
}
