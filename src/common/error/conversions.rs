//! Error conversion implementations.
//!
//! This module contains From trait implementations to convert from internal
//! and third-party error types to the unified error types.

use super::types::{DataSourceError, Error};
use crate::ooxml::xlsx::XlsxError;

impl From<XlsxError> for DataSourceError {
    fn from(err: XlsxError) -> Self {
        match err {
            XlsxError::Io(e) => DataSourceError::Io(e),
            XlsxError::PackageNotFound(s) => DataSourceError::NotFound(s),
            XlsxError::Zip(s) => DataSourceError::Zip(s),
            XlsxError::Xml(s) => DataSourceError::Xml(s),
            XlsxError::PartNotFound(s) => {
                DataSourceError::InvalidFormat(format!("missing part {}", s))
            },
            XlsxError::SheetNotFound(s) => DataSourceError::SheetNotFound(s),
            XlsxError::InvalidReference(s) => {
                DataSourceError::InvalidFormat(format!("invalid cell reference {}", s))
            },
            XlsxError::InvalidFormat(s) => DataSourceError::InvalidFormat(s),
        }
    }
}

impl From<XlsxError> for Error {
    fn from(err: XlsxError) -> Self {
        Error::DataSource(err.into())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::DataSource(DataSourceError::Io(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xlsx_sheet_error_maps_to_sheet_not_found() {
        let err: DataSourceError = XlsxError::SheetNotFound("Summary".to_string()).into();
        assert!(matches!(err, DataSourceError::SheetNotFound(ref s) if s == "Summary"));
    }

    #[test]
    fn test_xlsx_error_wraps_into_data_source() {
        let err: Error = XlsxError::PackageNotFound("x.xlsx".to_string()).into();
        assert!(matches!(
            err,
            Error::DataSource(DataSourceError::NotFound(ref s)) if s == "x.xlsx"
        ));
    }
}
