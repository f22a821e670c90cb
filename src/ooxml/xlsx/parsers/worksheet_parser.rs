//! Parser for Excel worksheet XML files.
//!
//! This module provides parsing functionality for individual worksheet
//! XML files (sheet1.xml, sheet2.xml, etc.) to extract cell data.
//!
//! Performance optimizations:
//! - Uses memchr for fast character searching
//! - Uses atoi_simd for fast integer parsing
//! - Uses fast_float2 for fast float parsing
//! - Resolves shared strings while scanning, avoiding a second pass

use super::{attr_value, child_text, elements};
use crate::common::date::{self, DateSystem, SECONDS_PER_DAY};
use crate::common::xml::unescape_xml;
use crate::ooxml::xlsx::SharedStrings;
use crate::ooxml::xlsx::error::{Result, XlsxError};
use crate::sheet::CellValue;

/// A parsed row: 1-based row number and its cells as (1-based column, value).
pub type ParsedRow = (u32, Vec<(u32, CellValue)>);

/// Context needed to decode cell values.
#[derive(Debug, Clone, Copy)]
pub struct CellContext<'a> {
    pub shared_strings: &'a SharedStrings,
    pub date_system: DateSystem,
}

/// Parse worksheet XML content to extract rows in document order.
pub fn parse_worksheet_xml(content: &str, ctx: CellContext<'_>) -> Result<Vec<ParsedRow>> {
    // An empty sheet may be written as <sheetData/>
    let sheet_data = match elements(content, "sheetData").next() {
        Some(element) => element.inner.unwrap_or(""),
        None => {
            return Err(XlsxError::InvalidFormat(
                "worksheet has no <sheetData> element".to_string(),
            ));
        },
    };

    parse_sheet_data(sheet_data, ctx)
}

/// Parse sheetData content to extract rows.
pub fn parse_sheet_data(sheet_data: &str, ctx: CellContext<'_>) -> Result<Vec<ParsedRow>> {
    let mut rows = Vec::new();
    let mut last_row = 0u32;

    for row in elements(sheet_data, "row") {
        // Rows without an explicit number follow the previous one
        let row_num = match attr_value(row.tag, "r") {
            Some(r) => atoi_simd::parse::<u32, false, false>(r.as_bytes())
                .map_err(|_| XlsxError::InvalidReference(format!("row {}", r)))?,
            None => last_row + 1,
        };
        last_row = row_num;

        let cells = match row.inner {
            Some(inner) => parse_row_cells(inner, ctx)?,
            None => Vec::new(),
        };
        rows.push((row_num, cells));
    }

    Ok(rows)
}

/// Parse the cells inside a single `<row>` element.
fn parse_row_cells(row_content: &str, ctx: CellContext<'_>) -> Result<Vec<(u32, CellValue)>> {
    let mut cells = Vec::new();
    let mut last_col = 0u32;

    for cell in elements(row_content, "c") {
        let col_num = match attr_value(cell.tag, "r") {
            Some(reference) => reference_to_coords(reference)?.0,
            None => last_col + 1,
        };
        last_col = col_num;

        let value = parse_cell_value(attr_value(cell.tag, "t"), cell.inner, ctx);
        cells.push((col_num, value));
    }

    Ok(cells)
}

/// Decode a cell's value from its type attribute and inner XML.
pub fn parse_cell_value(
    cell_type: Option<&str>,
    inner: Option<&str>,
    ctx: CellContext<'_>,
) -> CellValue {
    let Some(inner) = inner else {
        return CellValue::Empty;
    };

    if cell_type == Some("inlineStr") {
        return match elements(inner, "is").next().and_then(|is| is.inner) {
            Some(is) => CellValue::String(SharedStrings::extract_text_from_si(is)),
            None => CellValue::Empty,
        };
    }

    let Some(raw) = child_text(inner, "v") else {
        return CellValue::Empty;
    };

    match cell_type {
        Some("s") => match atoi_simd::parse::<usize, false, false>(raw.trim().as_bytes()) {
            Ok(index) => match ctx.shared_strings.get(index) {
                Some(s) => CellValue::String(s.to_string()),
                None => CellValue::Error(format!("shared string {} out of range", index)),
            },
            Err(_) => CellValue::Error(format!("invalid shared string index '{}'", raw)),
        },
        Some("str") => CellValue::String(unescape_xml(raw)),
        Some("b") => match raw.trim() {
            "1" | "true" => CellValue::Bool(true),
            "0" | "false" => CellValue::Bool(false),
            _ => CellValue::Error("Invalid boolean value".to_string()),
        },
        Some("e") => CellValue::Error(unescape_xml(raw)),
        Some("d") => parse_iso_cell(raw, ctx.date_system),
        _ => parse_number(raw),
    }
}

fn parse_number(raw: &str) -> CellValue {
    let raw = raw.trim();
    if raw.is_empty() {
        return CellValue::Empty;
    }
    // Performance: integers first, then fast float parsing
    if let Ok(int_val) = atoi_simd::parse::<i64, false, false>(raw.as_bytes()) {
        CellValue::Int(int_val)
    } else if let Ok(float_val) = fast_float2::parse::<f64, _>(raw) {
        CellValue::Float(float_val)
    } else {
        CellValue::String(raw.to_string())
    }
}

/// `t="d"` cells hold ISO 8601 text; convert to a serial in the workbook's system.
fn parse_iso_cell(raw: &str, system: DateSystem) -> CellValue {
    let raw = raw.trim();
    let parsed = chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .or_else(|| {
            chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        });

    match parsed {
        Some(dt) => match date::date_to_serial(dt.date(), system) {
            Some(days) => {
                let seconds = f64::from(chrono::Timelike::num_seconds_from_midnight(&dt.time()));
                CellValue::DateTime(days + seconds / SECONDS_PER_DAY)
            },
            None => CellValue::String(raw.to_string()),
        },
        None => CellValue::String(raw.to_string()),
    }
}

/// Convert Excel reference (e.g., "A1") to (column, row), both 1-based.
pub fn reference_to_coords(reference: &str) -> Result<(u32, u32)> {
    let bytes = reference.as_bytes();
    let col_str_end = bytes
        .iter()
        .position(|b| b.is_ascii_digit())
        .ok_or_else(|| XlsxError::InvalidReference(reference.to_string()))?;

    if col_str_end == 0 {
        return Err(XlsxError::InvalidReference(reference.to_string()));
    }

    // Convert column letters to number (A=1, B=2, ..., Z=26, AA=27, etc.)
    let mut col_num = 0u32;
    for &byte in &bytes[..col_str_end] {
        if !byte.is_ascii_alphabetic() {
            return Err(XlsxError::InvalidReference(reference.to_string()));
        }
        col_num = col_num
            .checked_mul(26)
            .and_then(|c| c.checked_add((byte.to_ascii_uppercase() - b'A' + 1) as u32))
            .ok_or_else(|| XlsxError::InvalidReference(reference.to_string()))?;
    }

    let row_num = atoi_simd::parse::<u32, false, false>(&bytes[col_str_end..])
        .map_err(|_| XlsxError::InvalidReference(reference.to_string()))?;

    Ok((col_num, row_num))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(sst: &SharedStrings) -> CellContext<'_> {
        CellContext {
            shared_strings: sst,
            date_system: DateSystem::Excel1900,
        }
    }

    #[test]
    fn test_reference_to_coords() {
        assert_eq!(reference_to_coords("A1").unwrap(), (1, 1));
        assert_eq!(reference_to_coords("Z10").unwrap(), (26, 10));
        assert_eq!(reference_to_coords("AA3").unwrap(), (27, 3));
        assert_eq!(reference_to_coords("ab12").unwrap(), (28, 12));
        assert!(reference_to_coords("12").is_err());
        assert!(reference_to_coords("A").is_err());
        assert!(reference_to_coords("A1B").is_err());
    }

    #[test]
    fn test_parse_sheet_with_mixed_cells() {
        let sst = SharedStrings::parse("<sst><si><t>Name</t></si><si><t>Base</t></si></sst>");
        let xml = r#"<worksheet><dimension ref="A1:D3"/><sheetData>
<row r="1" spans="1:4"><c r="A1" t="s"><v>0</v></c><c r="B1" t="inlineStr"><is><t>revenue</t></is></c></row>
<row r="2"><c r="A2" t="s"><v>1</v></c><c r="B2"><v>100</v></c><c r="C2" s="3"/><c r="D2"><v>0.0734</v></c></row>
<row r="4"><c r="A4" t="str"><f>A2</f><v>Base &amp; Co</v></c><c r="B4" t="b"><v>1</v></c><c r="C4" t="e"><v>#DIV/0!</v></c></row>
</sheetData></worksheet>"#;

        let rows = parse_worksheet_xml(xml, ctx(&sst)).unwrap();
        assert_eq!(rows.len(), 3);

        let (r1, cells1) = &rows[0];
        assert_eq!(*r1, 1);
        assert_eq!(cells1[0], (1, CellValue::String("Name".to_string())));
        assert_eq!(cells1[1], (2, CellValue::String("revenue".to_string())));

        let (_, cells2) = &rows[1];
        assert_eq!(cells2[1], (2, CellValue::Int(100)));
        assert_eq!(cells2[2], (3, CellValue::Empty));
        assert_eq!(cells2[3], (4, CellValue::Float(0.0734)));

        let (r4, cells4) = &rows[2];
        assert_eq!(*r4, 4);
        assert_eq!(cells4[0], (1, CellValue::String("Base & Co".to_string())));
        assert_eq!(cells4[1], (2, CellValue::Bool(true)));
        assert_eq!(cells4[2], (3, CellValue::Error("#DIV/0!".to_string())));
    }

    #[test]
    fn test_implicit_row_and_column_positions() {
        let sst = SharedStrings::new();
        let xml = "<worksheet><sheetData><row><c><v>1</v></c><c><v>2</v></c></row><row/></sheetData></worksheet>";
        let rows = parse_worksheet_xml(xml, ctx(&sst)).unwrap();
        assert_eq!(rows[0].0, 1);
        assert_eq!(rows[0].1, vec![(1, CellValue::Int(1)), (2, CellValue::Int(2))]);
        assert_eq!(rows[1], (2, Vec::new()));
    }

    #[test]
    fn test_empty_sheet_data() {
        let sst = SharedStrings::new();
        let rows = parse_worksheet_xml("<worksheet><sheetData/></worksheet>", ctx(&sst)).unwrap();
        assert!(rows.is_empty());
        assert!(parse_worksheet_xml("<worksheet/>", ctx(&sst)).is_err());
    }

    #[test]
    fn test_iso_date_cell_becomes_serial() {
        let sst = SharedStrings::new();
        let value = parse_cell_value(Some("d"), Some("<v>2023-03-15T18:00:00</v>"), ctx(&sst));
        assert_eq!(value, CellValue::DateTime(45000.75));
    }

    #[test]
    fn test_shared_string_out_of_range() {
        let sst = SharedStrings::new();
        let value = parse_cell_value(Some("s"), Some("<v>7</v>"), ctx(&sst));
        assert!(matches!(value, CellValue::Error(_)));
    }
}
