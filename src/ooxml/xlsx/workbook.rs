//! Excel Workbook implementation.
//!
//! This module reads the workbook-level parts of an .xlsx package and
//! parses individual worksheets on request.

use std::collections::HashMap;
use std::path::Path;

use crate::common::DateSystem;
use crate::ooxml::package::{Package, resolve_target};
use crate::ooxml::xlsx::SharedStrings;
use crate::ooxml::xlsx::error::{Result, XlsxError};

use super::parsers::rels_parser::{Relationship, parse_relationships};
use super::parsers::workbook_parser::parse_workbook_xml;
use super::parsers::worksheet_parser::{CellContext, parse_worksheet_xml};
use super::worksheet::{Worksheet, WorksheetInfo};

const WORKBOOK_PART: &str = "xl/workbook.xml";
const WORKBOOK_RELS_PART: &str = "xl/_rels/workbook.xml.rels";
const SHARED_STRINGS_PART: &str = "xl/sharedStrings.xml";
const WORKBOOK_DIR: &str = "xl";

/// An opened Excel workbook.
#[derive(Debug)]
pub struct Workbook {
    /// The underlying ZIP package
    package: Package,
    /// Worksheet entries in tab order
    worksheets: Vec<WorksheetInfo>,
    /// Cached worksheet names for zero-copy returns
    worksheet_names: Vec<String>,
    /// Workbook relationships keyed by ID
    relationships: HashMap<String, Relationship>,
    /// Shared strings table
    shared_strings: SharedStrings,
    /// Date system for serial date cells
    date_system: DateSystem,
}

impl Workbook {
    /// Open a workbook from a path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let package = Package::open(path)?;
        Self::new(package)
    }

    /// Open a workbook from in-memory bytes.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let package = Package::from_bytes(data)?;
        Self::new(package)
    }

    /// Create a workbook from a package, loading workbook.xml, its
    /// relationships and the shared strings table.
    pub fn new(mut package: Package) -> Result<Self> {
        let content = package.required_part(WORKBOOK_PART)?;
        let info = parse_workbook_xml(&content)?;

        let relationships = match package.part(WORKBOOK_RELS_PART)? {
            Some(rels) => parse_relationships(&rels),
            None => HashMap::new(),
        };

        let shared_strings = match package.part(SHARED_STRINGS_PART)? {
            Some(sst) => SharedStrings::parse(&sst),
            None => SharedStrings::new(),
        };

        Ok(Workbook {
            package,
            worksheet_names: info.sheets.iter().map(|ws| ws.name.clone()).collect(),
            worksheets: info.sheets,
            relationships,
            shared_strings,
            date_system: info.date_system,
        })
    }

    /// Get all worksheet names in tab order.
    pub fn worksheet_names(&self) -> &[String] {
        &self.worksheet_names
    }

    /// Date system declared by the workbook.
    pub fn date_system(&self) -> DateSystem {
        self.date_system
    }

    /// Parse a worksheet by name.
    pub fn worksheet_by_name(&mut self, name: &str) -> Result<Worksheet> {
        let index = self
            .worksheets
            .iter()
            .position(|ws| ws.name == name)
            .ok_or_else(|| XlsxError::SheetNotFound(name.to_string()))?;
        self.worksheet_by_index(index)
    }

    /// Parse a worksheet by index (0-based).
    pub fn worksheet_by_index(&mut self, index: usize) -> Result<Worksheet> {
        let info = self
            .worksheets
            .get(index)
            .ok_or_else(|| XlsxError::SheetNotFound(format!("index {}", index)))?
            .clone();

        let part_name = self.worksheet_part_name(&info)?;
        let content = self.package.required_part(&part_name)?;
        let ctx = CellContext {
            shared_strings: &self.shared_strings,
            date_system: self.date_system,
        };
        let rows = parse_worksheet_xml(&content, ctx)?;

        Ok(Worksheet::from_parsed(info.name, rows))
    }

    /// Resolve the ZIP entry name of a worksheet part.
    ///
    /// Falls back to the conventional `xl/worksheets/sheet{sheetId}.xml`
    /// when the relationship is missing. Chartsheets, dialog sheets and
    /// external targets are rejected.
    fn worksheet_part_name(&self, info: &WorksheetInfo) -> Result<String> {
        match self.relationships.get(&info.relationship_id) {
            Some(rel) if rel.is_internal_worksheet() => {
                Ok(resolve_target(WORKBOOK_DIR, &rel.target))
            },
            Some(rel) => Err(XlsxError::InvalidFormat(format!(
                "sheet '{}' is not a worksheet ({})",
                info.name, rel.rel_type
            ))),
            None => Ok(format!("xl/worksheets/sheet{}.xml", info.sheet_id)),
        }
    }
}
