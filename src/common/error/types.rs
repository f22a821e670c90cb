//! Error types for loading and comparing scenarios.
//!
//! [`DataSourceError`] covers everything that can go wrong while turning a
//! workbook on disk into a [`ScenarioTable`](crate::scenario::ScenarioTable).
//! It is fatal to session start. [`Error`] wraps it together with the
//! recoverable errors raised while handling selection events.
use thiserror::Error;

/// Failure to produce a scenario table from the source workbook.
#[derive(Error, Debug)]
pub enum DataSourceError {
    /// Source file does not exist
    #[error("Source not found: {0}")]
    NotFound(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    Zip(String),

    /// XML parsing error
    #[error("XML error: {0}")]
    Xml(String),

    /// Invalid or unsupported workbook structure
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Requested worksheet is missing
    #[error("Worksheet '{0}' not found")]
    SheetNotFound(String),

    /// Required header column is missing
    #[error("Missing required column '{0}'")]
    MissingColumn(String),

    /// A required cell could not be interpreted
    #[error("Invalid cell at row {row}, column '{column}': {reason}")]
    InvalidCell {
        row: u32,
        column: String,
        reason: String,
    },

    /// Two rows share the same scenario name
    #[error("Duplicate scenario name '{0}'")]
    DuplicateScenario(String),
}

/// Main error type for scenario comparison operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The scenario table could not be loaded
    #[error("Data source error: {0}")]
    DataSource(#[from] DataSourceError),

    /// A selection referenced a scenario that is not in the table
    #[error("Unknown scenario: {0}")]
    UnknownScenario(String),

    /// A row payload from the UI could not be mapped to a typed row
    #[error("Malformed row: {0}")]
    MalformedRow(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON payload error
    #[error("JSON error: {0}")]
    Json(String),
}

/// Result type for scenario comparison operations.
pub type Result<T> = std::result::Result<T, Error>;
