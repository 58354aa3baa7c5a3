//! Spreadsheet adapters
//!
//! Implementation of `DatasetSource` over CSV and Excel files on disk.

pub mod csv_reader;
pub mod excel_reader;
pub mod loader;

pub use csv_reader::{read_csv, read_csv_from};
pub use excel_reader::read_workbook;
pub use loader::{read_file, SpreadsheetSource, SUPPORTED_EXTENSIONS};
