//! Common types and utilities shared by the workbook reader and the
//! scenario pipeline.

// Submodule declarations
pub mod date;
pub mod error;
pub mod xml;

// Re-exports for convenience
pub use date::DateSystem;
pub use error::{DataSourceError, Error, Result};
