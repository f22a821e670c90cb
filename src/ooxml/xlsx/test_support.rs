//! In-memory .xlsx fixtures for tests.

use std::io::{Cursor, Write};
use std::path::Path;

use zip::write::SimpleFileOptions;

use super::column_to_letters;

/// A cell written into a fixture sheet.
#[derive(Debug, Clone)]
pub(crate) enum FixtureCell {
    Text(&'static str),
    Number(f64),
    Blank,
}

pub(crate) use FixtureCell::{Blank, Number, Text};

/// Builder for a minimal but well-formed workbook package.
#[derive(Debug, Default)]
pub(crate) struct WorkbookFixture {
    sheets: Vec<(String, Vec<Vec<FixtureCell>>)>,
    date1904: bool,
}

impl WorkbookFixture {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn sheet(mut self, name: &str, rows: Vec<Vec<FixtureCell>>) -> Self {
        self.sheets.push((name.to_string(), rows));
        self
    }

    pub(crate) fn date1904(mut self) -> Self {
        self.date1904 = true;
        self
    }

    pub(crate) fn to_bytes(&self) -> Vec<u8> {
        let mut shared: Vec<&str> = Vec::new();
        let mut sheet_parts = Vec::new();

        for (_, rows) in &self.sheets {
            let mut xml = String::from(
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData>"#,
            );
            for (r, row) in rows.iter().enumerate() {
                let row_num = r + 1;
                xml.push_str(&format!(r#"<row r="{}">"#, row_num));
                for (c, cell) in row.iter().enumerate() {
                    let reference = format!("{}{}", column_to_letters(c as u32 + 1), row_num);
                    match cell {
                        Text(s) => {
                            let index = match shared.iter().position(|x| x == s) {
                                Some(i) => i,
                                None => {
                                    shared.push(*s);
                                    shared.len() - 1
                                },
                            };
                            xml.push_str(&format!(
                                r#"<c r="{}" t="s"><v>{}</v></c>"#,
                                reference, index
                            ));
                        },
                        Number(n) => {
                            xml.push_str(&format!(r#"<c r="{}"><v>{}</v></c>"#, reference, n));
                        },
                        Blank => xml.push_str(&format!(r#"<c r="{}" s="1"/>"#, reference)),
                    }
                }
                xml.push_str("</row>");
            }
            xml.push_str("</sheetData></worksheet>");
            sheet_parts.push(xml);
        }

        let mut workbook = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
        );
        if self.date1904 {
            workbook.push_str(r#"<workbookPr date1904="1"/>"#);
        }
        workbook.push_str("<sheets>");
        let mut rels = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
        );
        for (i, (name, _)) in self.sheets.iter().enumerate() {
            let id = i + 1;
            let escaped = name.replace('&', "&amp;");
            workbook.push_str(&format!(
                r#"<sheet name="{}" sheetId="{}" r:id="rId{}"/>"#,
                escaped, id, id
            ));
            rels.push_str(&format!(
                r#"<Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet{}.xml"/>"#,
                id, id
            ));
        }
        workbook.push_str("</sheets></workbook>");
        rels.push_str("</Relationships>");

        let mut sst = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><sst xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" count="{0}" uniqueCount="{0}">"#,
            shared.len()
        );
        for s in &shared {
            sst.push_str(&format!("<si><t>{}</t></si>", s.replace('&', "&amp;")));
        }
        sst.push_str("</sst>");

        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default();
        let mut add = |name: &str, content: &str| {
            writer.start_file(name, options).expect("start fixture entry");
            writer.write_all(content.as_bytes()).expect("write fixture entry");
        };
        add("xl/workbook.xml", &workbook);
        add("xl/_rels/workbook.xml.rels", &rels);
        add("xl/sharedStrings.xml", &sst);
        for (i, part) in sheet_parts.iter().enumerate() {
            add(&format!("xl/worksheets/sheet{}.xml", i + 1), part);
        }
        writer.finish().expect("finish fixture").into_inner()
    }

    pub(crate) fn write_to(&self, path: &Path) {
        std::fs::write(path, self.to_bytes()).expect("write fixture file");
    }
}

/// The standard scenario sheet header row.
pub(crate) fn scenario_header() -> Vec<FixtureCell> {
    vec![
        Text("Name"),
        Text("Created Date"),
        Text("revenue"),
        Text("cost"),
        Text("inv_cost"),
        Text("profit"),
        Text("prec_profit"),
    ]
}

/// A scenario data row; `created` is an Excel serial date.
pub(crate) fn scenario_row(
    name: &'static str,
    created: f64,
    revenue: f64,
    cost: f64,
    profit: f64,
    fraction: f64,
) -> Vec<FixtureCell> {
    vec![
        Text(name),
        Number(created),
        Number(revenue),
        Number(cost),
        Number(cost / 2.0),
        Number(profit),
        Number(fraction),
    ]
}
