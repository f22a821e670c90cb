//! XML parsing modules for Excel files.
//!
//! This module contains specialized parsers for the XML parts of an Excel
//! workbook (.xlsx) that the scenario loader needs.
//!
//! Performance optimizations:
//! - Uses memchr for fast tag and attribute searching
//! - Works on borrowed slices of the part content

pub mod rels_parser;
pub mod workbook_parser;
pub mod worksheet_parser;

/// Find the value of attribute `name` inside a single start tag.
///
/// The attribute must be preceded by whitespace so that `id` does not
/// match inside `r:id` or `sheetId`. Both quote styles are accepted.
pub(crate) fn attr_value<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    let bytes = tag.as_bytes();
    let needle = name.as_bytes();
    let mut pos = 0;

    while let Some(found) = memchr::memmem::find(&bytes[pos..], needle) {
        let start = pos + found;
        let after = start + needle.len();
        pos = start + 1;

        if start == 0 || !bytes[start - 1].is_ascii_whitespace() {
            continue;
        }

        let mut eq = after;
        while eq < bytes.len() && bytes[eq].is_ascii_whitespace() {
            eq += 1;
        }
        if eq >= bytes.len() || bytes[eq] != b'=' {
            continue;
        }
        let mut quote = eq + 1;
        while quote < bytes.len() && bytes[quote].is_ascii_whitespace() {
            quote += 1;
        }
        if quote >= bytes.len() || (bytes[quote] != b'"' && bytes[quote] != b'\'') {
            continue;
        }

        let value_start = quote + 1;
        let end = memchr::memchr(bytes[quote], &bytes[value_start..])?;
        return Some(&tag[value_start..value_start + end]);
    }
    None
}

/// Iterate over every element `<name ...>` or `<name .../>` in `content`,
/// yielding the start tag and, for non-empty elements, the inner content.
pub(crate) fn elements<'a>(content: &'a str, name: &str) -> ElementIter<'a> {
    ElementIter {
        content,
        open: format!("<{}", name),
        close: format!("</{}>", name),
        pos: 0,
    }
}

/// An element located by [`elements`].
pub(crate) struct Element<'a> {
    /// The start tag including `<` and `>`
    pub tag: &'a str,
    /// Content between the start and end tags; `None` for `<name/>`
    pub inner: Option<&'a str>,
}

pub(crate) struct ElementIter<'a> {
    content: &'a str,
    open: String,
    close: String,
    pos: usize,
}

impl<'a> Iterator for ElementIter<'a> {
    type Item = Element<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.content.as_bytes();

        loop {
            let found = memchr::memmem::find(&bytes[self.pos..], self.open.as_bytes())?;
            let start = self.pos + found;
            let name_end = start + self.open.len();

            // Reject prefix matches such as `<cols` when looking for `<c`
            match bytes.get(name_end) {
                Some(b) if b.is_ascii_whitespace() || *b == b'>' || *b == b'/' => {},
                _ => {
                    self.pos = name_end;
                    continue;
                },
            }

            let tag_end = name_end + memchr::memchr(b'>', &bytes[name_end..])?;
            let tag = &self.content[start..=tag_end];

            if bytes[tag_end - 1] == b'/' {
                self.pos = tag_end + 1;
                return Some(Element { tag, inner: None });
            }

            let inner_start = tag_end + 1;
            let inner_len = memchr::memmem::find(&bytes[inner_start..], self.close.as_bytes())?;
            self.pos = inner_start + inner_len + self.close.len();
            return Some(Element {
                tag,
                inner: Some(&self.content[inner_start..inner_start + inner_len]),
            });
        }
    }
}

/// Text of the first `<name>...</name>` child, if present.
pub(crate) fn child_text<'a>(content: &'a str, name: &str) -> Option<&'a str> {
    elements(content, name).next().map(|e| e.inner.unwrap_or(""))
}
