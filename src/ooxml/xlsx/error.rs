/// Error types for xlsx package operations
use thiserror::Error;

#[derive(Error, Debug)]
pub enum XlsxError {
    #[error("Package not found: {0}")]
    PackageNotFound(String),

    #[error("Part not found: {0}")]
    PartNotFound(String),

    #[error("Worksheet not found: {0}")]
    SheetNotFound(String),

    #[error("Invalid cell reference: {0}")]
    InvalidReference(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("XML parsing error: {0}")]
    Xml(String),

    #[error("ZIP error: {0}")]
    Zip(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<zip::result::ZipError> for XlsxError {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(e) => XlsxError::Io(e),
            other => XlsxError::Zip(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, XlsxError>;
