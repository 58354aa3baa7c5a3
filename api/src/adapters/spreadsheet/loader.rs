//! Spreadsheet dataset source
//!
//! Locates `<name>.xlsx`, `<name>.xls` or `<name>.csv` in a data directory,
//! in that order. A file that fails to parse or has no rows is reported and
//! the next extension is tried.

use std::path::{Path, PathBuf};

use super::csv_reader::read_csv;
use super::excel_reader::read_workbook;
use crate::domain::entities::Table;
use crate::domain::ports::{DatasetLoad, DatasetSource, LoadStatus};
use crate::error::LoadError;

/// Extensions probed for each dataset, in priority order
pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["xlsx", "xls", "csv"];

/// Read any supported file, dispatching on its extension
pub fn read_file(path: &Path) -> Result<Table, LoadError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "csv" => read_csv(path),
        "xlsx" | "xls" => read_workbook(path),
        other => Err(LoadError::UnsupportedFormat(format!(".{}", other))),
    }
}

/// Filesystem-backed dataset source
#[derive(Debug, Clone)]
pub struct SpreadsheetSource {
    data_dir: PathBuf,
}

impl SpreadsheetSource {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

impl DatasetSource for SpreadsheetSource {
    fn load(&self, dataset: &str) -> DatasetLoad {
        let mut outcome = DatasetLoad::missing();

        for ext in SUPPORTED_EXTENSIONS {
            let path = self.data_dir.join(format!("{}.{}", dataset, ext));
            if !path.exists() {
                continue;
            }
            let shown = path.display().to_string();

            match read_file(&path) {
                Ok(table) if !table.is_empty() => {
                    tracing::info!(
                        path = %shown,
                        rows = table.len(),
                        columns = ?table.columns,
                        "Successfully read dataset"
                    );
                    let status = LoadStatus::Loaded {
                        path: shown,
                        rows: table.len(),
                        columns: table.columns.clone(),
                    };
                    return DatasetLoad { table, status };
                }
                Ok(_) => {
                    tracing::warn!(path = %shown, "Dataset file has no rows");
                    outcome.status = LoadStatus::Empty { path: shown };
                }
                Err(e) => {
                    tracing::warn!(path = %shown, error = %e, "Error reading dataset file");
                    outcome.status = LoadStatus::Failed {
                        path: shown,
                        error: e.to_string(),
                    };
                }
            }
        }

        tracing::warn!(dataset, status = %outcome.status, "Couldn't read data");
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::CellValue;
    use crate::test_utils::fixtures::write_workbook;

    #[test]
    fn loads_csv_when_no_workbook_exists() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("products_indian.csv"),
            "Product ID,Product Name,Price,Stock\n1,Kurta,799,12\n",
        )
        .unwrap();

        let source = SpreadsheetSource::new(dir.path());
        let load = source.load("products_indian");

        assert!(load.status.is_loaded());
        assert_eq!(load.table.len(), 1);
        assert_eq!(
            load.table.rows[0]["Product Name"],
            CellValue::Text("Kurta".to_string())
        );
    }

    #[test]
    fn workbook_wins_over_csv() {
        let dir = tempfile::tempdir().unwrap();
        write_workbook(
            &dir.path().join("products.xlsx"),
            &["Product ID", "Product Name"],
            &[&["1", "Kurta"], &["2", "Saree"]],
        );
        std::fs::write(
            dir.path().join("products.csv"),
            "Product ID,Product Name\n9,Dhoti\n",
        )
        .unwrap();

        let load = SpreadsheetSource::new(dir.path()).load("products");
        match &load.status {
            LoadStatus::Loaded { path, rows, .. } => {
                assert!(path.ends_with("products.xlsx"), "{}", path);
                assert_eq!(*rows, 2);
            }
            other => panic!("expected workbook to load, got {:?}", other),
        }
        assert_eq!(
            load.table.rows[0]["Product Name"],
            CellValue::Text("Kurta".to_string())
        );
    }

    #[test]
    fn falls_through_broken_workbook_to_csv() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("stores.xlsx"), b"garbage").unwrap();
        std::fs::write(dir.path().join("stores.csv"), "Store ID,City\n1,Pune\n").unwrap();

        let load = SpreadsheetSource::new(dir.path()).load("stores");
        match load.status {
            LoadStatus::Loaded { path, rows, .. } => {
                assert!(path.ends_with("stores.csv"));
                assert_eq!(rows, 1);
            }
            other => panic!("expected csv to load, got {:?}", other),
        }
    }

    #[test]
    fn reports_failure_when_only_file_is_broken() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("orders.xlsx"), b"garbage").unwrap();

        let load = SpreadsheetSource::new(dir.path()).load("orders");
        assert!(matches!(load.status, LoadStatus::Failed { .. }));
        assert!(load.table.is_empty());
    }

    #[test]
    fn empty_csv_is_reported_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("customers.csv"), "Customer ID,Name\n").unwrap();

        let load = SpreadsheetSource::new(dir.path()).load("customers");
        assert!(matches!(load.status, LoadStatus::Empty { .. }));
    }

    #[test]
    fn missing_dataset_is_reported_as_missing() {
        let dir = tempfile::tempdir().unwrap();
        let load = SpreadsheetSource::new(dir.path()).load("nothing_here");
        assert_eq!(load.status, LoadStatus::Missing);
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let err = read_file(Path::new("products.txt")).unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedFormat(ext) if ext == ".txt"));
    }
}
