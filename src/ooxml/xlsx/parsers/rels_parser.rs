//! Parser for package relationship parts (`*.rels`).

use std::collections::HashMap;

use super::{attr_value, elements};
use crate::common::xml::unescape_xml;

/// A single `<Relationship>` entry; its `Id` is the map key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    /// Relationship type URI
    pub rel_type: String,
    /// Target part, relative to the source part's directory
    pub target: String,
    /// Whether TargetMode="External"
    pub external: bool,
}

// Transitional and Strict namespaces share this suffix
const WORKSHEET_REL_SUFFIX: &str = "/relationships/worksheet";

impl Relationship {
    /// Whether this relationship points at a worksheet part inside the package.
    pub fn is_internal_worksheet(&self) -> bool {
        !self.external && self.rel_type.ends_with(WORKSHEET_REL_SUFFIX)
    }
}

/// Parse a relationships part into a map keyed by relationship ID.
pub fn parse_relationships(content: &str) -> HashMap<String, Relationship> {
    let mut rels = HashMap::new();

    for element in elements(content, "Relationship") {
        let id = attr_value(element.tag, "Id");
        let target = attr_value(element.tag, "Target");
        let (Some(id), Some(target)) = (id, target) else {
            continue;
        };
        let rel_type = attr_value(element.tag, "Type").unwrap_or_default();
        let external = attr_value(element.tag, "TargetMode") == Some("External");

        rels.insert(
            id.to_string(),
            Relationship {
                rel_type: rel_type.to_string(),
                target: unescape_xml(target),
                external,
            },
        );
    }

    rels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_workbook_relationships() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet2.xml"/>
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="/xl/worksheets/sheet1.xml"/>
  <Relationship Id="rId9" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/hyperlink" Target="https://example.com/?a=1&amp;b=2" TargetMode="External"/>
</Relationships>"#;

        let rels = parse_relationships(xml);
        assert_eq!(rels.len(), 3);
        assert_eq!(rels["rId2"].target, "worksheets/sheet2.xml");
        assert_eq!(rels["rId1"].target, "/xl/worksheets/sheet1.xml");
        assert!(rels["rId1"].is_internal_worksheet());
        assert!(rels["rId9"].external);
        assert!(!rels["rId9"].is_internal_worksheet());
        assert_eq!(rels["rId9"].target, "https://example.com/?a=1&b=2");
    }
}
