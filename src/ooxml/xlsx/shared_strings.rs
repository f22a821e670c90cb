//! Shared strings table for Excel files.
//!
//! Excel uses a shared strings table to efficiently store string values.
//! This module provides parsing and access to the shared strings.
//!
//! Performance optimizations:
//! - Uses memchr for fast tag searching
//! - Pre-allocates the table from the `uniqueCount` attribute when present

use crate::common::xml::unescape_xml;
use crate::ooxml::xlsx::parsers::{attr_value, elements};

// Performance: Fallback capacity when uniqueCount is absent
const INITIAL_STRINGS_CAPACITY: usize = 256;

/// Shared strings table for efficient string storage.
#[derive(Debug, Default, Clone)]
pub struct SharedStrings {
    strings: Vec<String>,
}

impl SharedStrings {
    /// Create a new empty shared strings table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse shared strings from xl/sharedStrings.xml content.
    ///
    /// Each `<si>` item becomes one entry, so indexes stay aligned even for
    /// empty items. Rich-text runs are concatenated; phonetic runs (`<rPh>`)
    /// are skipped.
    pub fn parse(content: &str) -> Self {
        let capacity = elements(content, "sst")
            .next()
            .and_then(|sst| attr_value(sst.tag, "uniqueCount"))
            .and_then(|n| atoi_simd::parse::<usize, false, false>(n.as_bytes()).ok())
            .unwrap_or(INITIAL_STRINGS_CAPACITY);
        let mut strings = Vec::with_capacity(capacity);

        for item in elements(content, "si") {
            strings.push(item.inner.map(Self::extract_text_from_si).unwrap_or_default());
        }

        SharedStrings { strings }
    }

    /// Get a string by its index.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.strings.get(index).map(|s| s.as_str())
    }

    /// Get the number of strings in the table.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Extract text content from the inside of an `<si>` element.
    pub(crate) fn extract_text_from_si(si_content: &str) -> String {
        let mut text = String::new();
        let mut rest = si_content;

        // Drop phonetic guide runs before collecting <t> nodes
        while let Some(start) = memchr::memmem::find(rest.as_bytes(), b"<rPh") {
            text.push_str(&collect_runs(&rest[..start]));
            match memchr::memmem::find(&rest.as_bytes()[start..], b"</rPh>") {
                Some(end) => rest = &rest[start + end + 6..],
                None => {
                    rest = "";
                    break;
                },
            }
        }
        text.push_str(&collect_runs(rest));
        text
    }
}

fn collect_runs(content: &str) -> String {
    let mut text = String::new();
    for t in elements(content, "t") {
        if let Some(inner) = t.inner {
            text.push_str(&unescape_xml(inner));
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_and_rich_strings() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<sst xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" count="4" uniqueCount="4">
  <si><t>Name</t></si>
  <si><r><rPr><b/></rPr><t>High</t></r><r><t xml:space="preserve"> Growth</t></r></si>
  <si><t/></si>
  <si><t>R&amp;D</t><rPh sb="0" eb="1"><t>ignored</t></rPh></si>
</sst>"#;

        let sst = SharedStrings::parse(xml);
        assert_eq!(sst.len(), 4);
        assert_eq!(sst.get(0), Some("Name"));
        assert_eq!(sst.get(1), Some("High Growth"));
        assert_eq!(sst.get(2), Some(""));
        assert_eq!(sst.get(3), Some("R&D"));
        assert_eq!(sst.get(4), None);
    }

    #[test]
    fn test_empty_table() {
        let sst = SharedStrings::parse(r#"<sst count="0" uniqueCount="0"/>"#);
        assert!(sst.is_empty());
    }
}
