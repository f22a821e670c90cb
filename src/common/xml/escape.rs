use aho_corasick::{AhoCorasick, MatchKind};
use once_cell::sync::Lazy;

// Use LeftmostLongest to ensure longer entities are matched first (e.g., &amp; instead of &lt;)
static XML_UNESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .match_kind(MatchKind::LeftmostLongest)
        .build(["&amp;", "&lt;", "&gt;", "&quot;", "&apos;", "&#"])
        .expect("Failed to build XML unescaper")
});

const NAMED_REPLACEMENTS: [char; 5] = ['&', '<', '>', '"', '\''];
const NUMERIC_PATTERN: usize = 5;

/// Unescape XML special characters.
///
/// Replaces the five standard XML entities and numeric character references
/// (`&#10;`, `&#x41;`) with their corresponding characters in a single pass.
/// Unknown or malformed entities are left unchanged.
///
/// # Examples
///
/// ```
/// use scenario_compare::common::xml::unescape_xml;
/// assert_eq!(unescape_xml("R&amp;D"), "R&D");
/// assert_eq!(unescape_xml("&lt;b&gt;"), "<b>");
/// assert_eq!(unescape_xml("line&#10;break"), "line\nbreak");
/// assert_eq!(unescape_xml("&invalid;"), "&invalid;");
/// ```
pub fn unescape_xml(s: &str) -> String {
    if memchr::memchr(b'&', s.as_bytes()).is_none() {
        return s.to_string();
    }

    let mut out = String::with_capacity(s.len());
    let mut last = 0;

    for m in XML_UNESCAPER.find_iter(s) {
        if m.start() < last {
            continue;
        }
        out.push_str(&s[last..m.start()]);
        let pattern = m.pattern().as_usize();

        if pattern == NUMERIC_PATTERN {
            match decode_numeric(&s[m.end()..]) {
                Some((ch, consumed)) => {
                    out.push(ch);
                    last = m.end() + consumed;
                },
                None => {
                    out.push_str("&#");
                    last = m.end();
                },
            }
        } else {
            out.push(NAMED_REPLACEMENTS[pattern]);
            last = m.end();
        }
    }
    out.push_str(&s[last..]);
    out
}

/// Decode the body of a numeric reference following `&#`.
/// Returns the character and the number of bytes consumed including `;`.
fn decode_numeric(candidate: &str) -> Option<(char, usize)> {
    let end = memchr::memchr(b';', candidate.as_bytes())?;
    let body = &candidate[..end];
    let code = match body.strip_prefix('x').or_else(|| body.strip_prefix('X')) {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => body.parse::<u32>().ok()?,
    };
    char::from_u32(code).map(|ch| (ch, end + 1))
}
