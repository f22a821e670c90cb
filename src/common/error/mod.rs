//! Unified error types for the scenario comparison pipeline.
//!
//! This module provides the error taxonomy shared by the workbook reader,
//! the loader and the selection pipeline.

// Submodule declarations
pub mod conversions;
pub mod types;

// Re-exports
pub use types::{DataSourceError, Error, Result};
