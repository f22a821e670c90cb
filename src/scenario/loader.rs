//! Scenario table loader.
//!
//! Reads the scenarios worksheet of an .xlsx workbook and maps each data row
//! to a [`ScenarioRecord`]:
//!
//! - `Created Date` is truncated to midnight. Serial numbers, ISO text and
//!   `MM/DD/YYYY` text are accepted.
//! - `prec_profit` holds a fraction and is rescaled to a percentage
//!   (`0.0734` becomes `7.34`) without rounding.
//!
//! [`load`] and [`load_with`] go through the process-wide cache in
//! [`super::cache`]; [`read_table`] always reads the file.

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use super::cache::TABLE_CACHE;
use super::options::LoadOptions;
use super::record::{ScenarioRecord, ScenarioTable};
use crate::common::date::{self, DateSystem};
use crate::common::DataSourceError;
use crate::ooxml::xlsx::Workbook;
use crate::sheet::{CellValue, Row};

type LoadResult<T> = std::result::Result<T, DataSourceError>;

/// Load the scenario table with default options, using the cache.
pub fn load<P: AsRef<Path>>(path: P) -> LoadResult<Arc<ScenarioTable>> {
    load_with(path, &LoadOptions::default())
}

/// Load the scenario table with explicit options, using the cache.
///
/// Repeated calls for an unchanged file return the same `Arc` without
/// re-reading it.
pub fn load_with<P: AsRef<Path>>(
    path: P,
    options: &LoadOptions,
) -> LoadResult<Arc<ScenarioTable>> {
    let path = path.as_ref();
    TABLE_CACHE.get_or_load(path, options, || read_table(path, options))
}

/// Read the scenario table from disk, bypassing the cache.
pub fn read_table<P: AsRef<Path>>(path: P, options: &LoadOptions) -> LoadResult<ScenarioTable> {
    let path = path.as_ref();
    let mut workbook = Workbook::open(path)?;
    let sheet = workbook.worksheet_by_name(&options.sheet_name)?;

    let table = table_from_rows(sheet.rows(), options, workbook.date_system())?;
    info!(
        path = %path.display(),
        sheet = %options.sheet_name,
        scenarios = table.len(),
        "loaded scenario table"
    );
    Ok(table)
}

/// Column positions of the required headers.
#[derive(Debug, Clone, Copy)]
struct ColumnMap {
    name: usize,
    created_date: usize,
    revenue: usize,
    cost: usize,
    inventory_cost: usize,
    profit: usize,
    profit_fraction: usize,
}

impl ColumnMap {
    fn resolve(header: &[CellValue], options: &LoadOptions) -> LoadResult<Self> {
        let find = |wanted: &str| {
            header
                .iter()
                .position(|cell| cell_text(cell).as_deref().map(str::trim) == Some(wanted.trim()))
                .ok_or_else(|| DataSourceError::MissingColumn(wanted.to_string()))
        };
        let columns = &options.columns;

        Ok(Self {
            name: find(&columns.name)?,
            created_date: find(&columns.created_date)?,
            revenue: find(&columns.revenue)?,
            cost: find(&columns.cost)?,
            inventory_cost: find(&columns.inventory_cost)?,
            profit: find(&columns.profit)?,
            profit_fraction: find(&columns.profit_fraction)?,
        })
    }
}

/// Build a scenario table from worksheet rows; the first populated row is
/// the header.
///
/// Rows whose cells are all empty are skipped.
pub fn table_from_rows(
    rows: &[Row],
    options: &LoadOptions,
    date_system: DateSystem,
) -> LoadResult<ScenarioTable> {
    let Some((header, data)) = rows.split_first() else {
        return Err(DataSourceError::MissingColumn(options.columns.name.clone()));
    };
    let map = ColumnMap::resolve(&header.cells, options)?;

    let mut records = Vec::with_capacity(data.len());
    for row in data.iter().filter(|row| !row.is_blank()) {
        records.push(parse_record(row, &map, options, date_system)?);
    }

    ScenarioTable::new(records)
}

fn parse_record(
    row: &Row,
    map: &ColumnMap,
    options: &LoadOptions,
    date_system: DateSystem,
) -> LoadResult<ScenarioRecord> {
    let columns = &options.columns;
    let cell = |idx: usize| row.cell(idx);
    let invalid = |column: &str, reason: String| DataSourceError::InvalidCell {
        row: row.number,
        column: column.to_string(),
        reason,
    };

    let name = cell_text(cell(map.name))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| invalid(&columns.name, "missing scenario name".to_string()))?;

    let created_date = parse_date(cell(map.created_date), date_system).ok_or_else(|| {
        invalid(
            &columns.created_date,
            format!("expected a date, found {}", describe(cell(map.created_date))),
        )
    })?;

    let number = |idx: usize, column: &str| {
        let value = cell(idx);
        value.as_f64().filter(|v| v.is_finite()).ok_or_else(|| {
            invalid(column, format!("expected a number, found {}", describe(value)))
        })
    };

    let profit_fraction = number(map.profit_fraction, &columns.profit_fraction)?;

    Ok(ScenarioRecord {
        name,
        created_date,
        revenue: number(map.revenue, &columns.revenue)?,
        cost: number(map.cost, &columns.cost)?,
        inventory_cost: number(map.inventory_cost, &columns.inventory_cost)?,
        profit: number(map.profit, &columns.profit)?,
        profit_percent: profit_fraction * 100.0,
    })
}

fn parse_date(value: &CellValue, date_system: DateSystem) -> Option<chrono::NaiveDate> {
    match value {
        CellValue::Int(i) => date::serial_to_date(*i as f64, date_system),
        CellValue::Float(f) | CellValue::DateTime(f) => date::serial_to_date(*f, date_system),
        CellValue::String(s) => date::parse_date_text(s),
        _ => None,
    }
}

/// Text of a cell usable as a header or scenario name.
fn cell_text(value: &CellValue) -> Option<String> {
    match value {
        CellValue::String(s) => Some(s.clone()),
        CellValue::Int(i) => Some(i.to_string()),
        CellValue::Float(f) => Some(f.to_string()),
        _ => None,
    }
}

fn describe(value: &CellValue) -> String {
    match value {
        CellValue::Empty => "an empty cell".to_string(),
        other => format!("{} '{}'", other.kind(), other),
    }
}
