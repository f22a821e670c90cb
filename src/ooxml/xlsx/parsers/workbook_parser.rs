//! Parser for Excel workbook.xml files.
//!
//! This module provides parsing functionality for the main workbook.xml
//! file which contains sheet definitions and workbook-level metadata.
//!
//! Performance optimizations:
//! - Uses memchr for fast character searching
//! - Uses atoi_simd for fast integer parsing
//! - Pre-allocates vectors with reasonable capacities

use super::{attr_value, elements};
use crate::common::DateSystem;
use crate::common::xml::unescape_xml;
use crate::ooxml::xlsx::error::{Result, XlsxError};
use crate::ooxml::xlsx::worksheet::WorksheetInfo;

// Performance: Pre-allocate typical capacity for worksheets
const INITIAL_SHEETS_CAPACITY: usize = 16;

/// Workbook-level information needed to locate and decode worksheets.
#[derive(Debug, Clone, Default)]
pub struct WorkbookInfo {
    /// Sheets in tab order
    pub sheets: Vec<WorksheetInfo>,
    /// Date system used by serial date cells
    pub date_system: DateSystem,
}

/// Parse workbook.xml content to extract sheet information and the date system.
pub fn parse_workbook_xml(content: &str) -> Result<WorkbookInfo> {
    let bytes = content.as_bytes();
    let mut sheets = Vec::with_capacity(INITIAL_SHEETS_CAPACITY);

    // Look for <sheets> section - optimized search
    let sheets_start = memchr::memmem::find(bytes, b"<sheets").ok_or_else(|| {
        XlsxError::InvalidFormat("workbook.xml has no <sheets> element".to_string())
    })?;
    if let Some(sheets_end) = memchr::memmem::find(&bytes[sheets_start..], b"</sheets>") {
        let sheets_content = &content[sheets_start..sheets_start + sheets_end];
        parse_sheets_section(sheets_content, &mut sheets);
    }

    let date_system = match elements(content, "workbookPr")
        .next()
        .and_then(|pr| attr_value(pr.tag, "date1904"))
    {
        Some("1") | Some("true") => DateSystem::Excel1904,
        _ => DateSystem::Excel1900,
    };

    Ok(WorkbookInfo {
        sheets,
        date_system,
    })
}

/// Parse the sheets section to extract individual sheet information.
fn parse_sheets_section(sheets_content: &str, sheets: &mut Vec<WorksheetInfo>) {
    for element in elements(sheets_content, "sheet") {
        if let Some(info) = parse_sheet_tag(element.tag) {
            sheets.push(info);
        }
    }
}

/// Parse an individual `<sheet .../>` tag.
pub fn parse_sheet_tag(sheet_xml: &str) -> Option<WorksheetInfo> {
    let name = attr_value(sheet_xml, "name")?;
    let relationship_id = attr_value(sheet_xml, "r:id")?;
    let sheet_id = attr_value(sheet_xml, "sheetId")
        .and_then(|id| atoi_simd::parse::<u32, false, false>(id.as_bytes()).ok())?;

    Some(WorksheetInfo {
        name: unescape_xml(name),
        relationship_id: relationship_id.to_string(),
        sheet_id,
    })
}
