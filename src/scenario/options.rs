//! Configuration types for loading scenarios and building charts.
//!
//! Every option has a default matching the standard scenarios workbook, so
//! `DashboardConfig::default()` works out of the box. Configurations can also
//! be read from YAML:
//!
//! ```yaml
//! load:
//!   sheet_name: Scenarios Summary
//!   columns:
//!     revenue: Revenue
//! unknown_ids: reject
//! chart:
//!   title: Q3 Scenarios
//! ```
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::{Error, Result};

/// Header text of each column the loader reads.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnNames {
    pub name: String,
    pub created_date: String,
    pub revenue: String,
    pub cost: String,
    pub inventory_cost: String,
    pub profit: String,
    pub profit_fraction: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            name: "Name".to_string(),
            created_date: "Created Date".to_string(),
            revenue: "revenue".to_string(),
            cost: "cost".to_string(),
            inventory_cost: "inv_cost".to_string(),
            profit: "profit".to_string(),
            profit_fraction: "prec_profit".to_string(),
        }
    }
}

impl ColumnNames {
    /// All configured headers, in source column order.
    pub fn all(&self) -> [&str; 7] {
        [
            &self.name,
            &self.created_date,
            &self.revenue,
            &self.cost,
            &self.inventory_cost,
            &self.profit,
            &self.profit_fraction,
        ]
    }
}

/// Options controlling how the scenario sheet is read.
///
/// # Examples
///
/// ```rust
/// use scenario_compare::scenario::LoadOptions;
///
/// let options = LoadOptions::new().with_sheet_name("Q3 Scenarios");
/// assert_eq!(options.sheet_name, "Q3 Scenarios");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadOptions {
    /// Name of the worksheet holding the scenarios
    pub sheet_name: String,
    /// Header names of the required columns
    pub columns: ColumnNames,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            sheet_name: "Scenarios Summary".to_string(),
            columns: ColumnNames::default(),
        }
    }
}

impl LoadOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_sheet_name(mut self, name: impl Into<String>) -> Self {
        self.sheet_name = name.into();
        self
    }

    #[inline]
    pub fn with_columns(mut self, columns: ColumnNames) -> Self {
        self.columns = columns;
        self
    }
}

/// What to do with selection identifiers that are not in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownIdPolicy {
    /// Drop unknown identifiers and chart the rest
    #[default]
    Ignore,
    /// Fail the selection with `Error::UnknownScenario`
    Reject,
}

/// Presentation hints passed through to the chart renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartOptions {
    pub title: String,
    pub y_axis_title: String,
    /// d3-format string for bar value labels
    pub text_format: String,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            title: "Scenario Comparison".to_string(),
            y_axis_title: "Value ($)".to_string(),
            text_format: ".2s".to_string(),
        }
    }
}

/// Full configuration of a dashboard session.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub load: LoadOptions,
    pub unknown_ids: UnknownIdPolicy,
    pub chart: ChartOptions,
}

impl DashboardConfig {
    /// Parse a configuration from YAML text. Missing keys take defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_saphyr::from_str(yaml)
            .map_err(|e| Error::Config(format!("invalid dashboard config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Read a YAML configuration file.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {}", path.display(), e)))?;
        Self::from_yaml_str(&text)
    }

    /// Reject configurations that could never load a sheet.
    pub fn validate(&self) -> Result<()> {
        if self.load.sheet_name.trim().is_empty() {
            return Err(Error::Config("sheet_name must not be empty".to_string()));
        }
        let headers = self.load.columns.all();
        for (i, header) in headers.iter().enumerate() {
            if header.trim().is_empty() {
                return Err(Error::Config("column names must not be empty".to_string()));
            }
            if headers[..i].contains(header) {
                return Err(Error::Config(format!("column '{}' is mapped twice", header)));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_source_format() {
        let config = DashboardConfig::default();
        assert_eq!(config.load.sheet_name, "Scenarios Summary");
        assert_eq!(config.load.columns.profit_fraction, "prec_profit");
        assert_eq!(config.unknown_ids, UnknownIdPolicy::Ignore);
        assert_eq!(config.chart.text_format, ".2s");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_yaml_overrides_keep_other_defaults() {
        let yaml = "load:\n  sheet_name: Q3\n  columns:\n    revenue: Revenue\nunknown_ids: reject\nchart:\n  title: Q3 Scenarios\n";
        let config = DashboardConfig::from_yaml_str(yaml).unwrap();

        assert_eq!(config.load.sheet_name, "Q3");
        assert_eq!(config.load.columns.revenue, "Revenue");
        assert_eq!(config.load.columns.cost, "cost");
        assert_eq!(config.unknown_ids, UnknownIdPolicy::Reject);
        assert_eq!(config.chart.title, "Q3 Scenarios");
        assert_eq!(config.chart.y_axis_title, "Value ($)");
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(DashboardConfig::from_yaml_str("  \n").unwrap(), DashboardConfig::default());
    }

    #[test]
    fn test_duplicate_column_mapping_rejected() {
        let yaml = "load:\n  columns:\n    cost: revenue\n";
        assert!(matches!(DashboardConfig::from_yaml_str(yaml), Err(Error::Config(_))));
    }

    #[test]
    fn test_load_options_builder() {
        let options = LoadOptions::new()
            .with_sheet_name("Other")
            .with_columns(ColumnNames {
                name: "Scenario".to_string(),
                ..ColumnNames::default()
            });
        assert_eq!(options.sheet_name, "Other");
        assert_eq!(options.columns.name, "Scenario");
    }
}
