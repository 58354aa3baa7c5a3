//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod json_export;
pub mod spreadsheet;

pub use json_export::{export_document, export_json, verify_export, ExportSummary};
pub use spreadsheet::SpreadsheetSource;
