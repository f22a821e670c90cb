//! Office Open XML (OOXML) package reading.
//!
//! The implementation follows the Open Packaging Conventions (OPC): a ZIP
//! container (`package`) whose XML parts are located through relationship
//! parts and parsed by the format-specific `xlsx` module.

pub mod package;
pub mod xlsx;

pub use package::Package;
