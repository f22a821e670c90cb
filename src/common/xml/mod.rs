//! XML text helpers shared by the OOXML part parsers.

mod escape;

pub use escape::unescape_xml;
