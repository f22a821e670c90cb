//! Physical OOXML package (ZIP container) access.
//!
//! An `.xlsx` file is a ZIP archive of XML parts. This module owns the raw
//! archive bytes and hands out part contents by name, normalizing the
//! leading-slash and `..` forms used by relationship targets.

use std::io::{Cursor, Read};
use std::path::Path;

use zip::ZipArchive;

use crate::ooxml::xlsx::error::{Result, XlsxError};

/// Reader over the parts of a ZIP-based OOXML package.
pub struct Package {
    archive: ZipArchive<Cursor<Vec<u8>>>,
}

impl std::fmt::Debug for Package {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Package")
            .field("parts", &self.archive.len())
            .finish()
    }
}

impl Package {
    /// Open a package from a file path.
    ///
    /// # Errors
    /// Returns an error if the file doesn't exist, cannot be read, or isn't
    /// a valid ZIP archive.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(XlsxError::PackageNotFound(path.display().to_string()));
        }

        let data = std::fs::read(path)?;
        Self::from_bytes(data)
    }

    /// Create a package from owned bytes.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let archive = ZipArchive::new(Cursor::new(data))?;
        Ok(Self { archive })
    }

    /// Read a part as UTF-8 text.
    ///
    /// Returns `Ok(None)` when the part does not exist.
    pub fn part(&mut self, name: &str) -> Result<Option<String>> {
        let name = normalize_part_name(name);
        let mut file = match self.archive.by_name(&name) {
            Ok(file) => file,
            Err(zip::result::ZipError::FileNotFound) => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let mut bytes = Vec::with_capacity(file.size() as usize);
        file.read_to_end(&mut bytes)?;
        let text = String::from_utf8(bytes)
            .map_err(|e| XlsxError::Xml(format!("part {} is not valid UTF-8: {}", name, e)))?;
        Ok(Some(strip_bom(text)))
    }

    /// Read a part that must exist.
    pub fn required_part(&mut self, name: &str) -> Result<String> {
        self.part(name)?
            .ok_or_else(|| XlsxError::PartNotFound(normalize_part_name(name)))
    }
}

/// Normalize a part name to the archive's entry form (no leading slash,
/// `.` and `..` segments resolved).
pub fn normalize_part_name(name: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in name.split('/') {
        match segment {
            "" | "." => {},
            ".." => {
                segments.pop();
            },
            s => segments.push(s),
        }
    }
    segments.join("/")
}

/// Resolve a relationship target against the directory of its source part.
///
/// Absolute targets (`/xl/worksheets/sheet1.xml`) are taken as-is.
pub fn resolve_target(base_dir: &str, target: &str) -> String {
    if target.starts_with('/') {
        normalize_part_name(target)
    } else {
        normalize_part_name(&format!("{}/{}", base_dir, target))
    }
}

fn strip_bom(text: String) -> String {
    match text.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => text,
    }
}
