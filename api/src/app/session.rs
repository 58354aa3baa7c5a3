//! Session bootstrap
//!
//! Loads the four datasets once, builds the immutable data store from them
//! and optionally writes the JSON export. Nothing here is re-read during the
//! session.

use serde::Serialize;

use crate::adapters::{export_json, SpreadsheetSource};
use crate::config::{Config, DatasetNames};
use crate::domain::entities::{DatasetKind, DatasetTables};
use crate::domain::ports::{DatasetSource, LoadStatus};
use crate::domain::{ColumnMapping, DataStore};
use crate::error::LoadError;

/// Load outcome for one dataset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetReport {
    pub kind: DatasetKind,
    pub dataset: String,
    #[serde(flatten)]
    pub status: LoadStatus,
}

/// Raw tables plus how each was obtained
#[derive(Debug, Clone, Default)]
pub struct LoadedData {
    pub tables: DatasetTables,
    pub report: Vec<DatasetReport>,
}

impl LoadedData {
    pub fn loaded_count(&self) -> usize {
        self.report.iter().filter(|r| r.status.is_loaded()).count()
    }
}

/// Load every dataset; a failure only empties that dataset's table
pub fn load_all<S: DatasetSource>(source: &S, names: &DatasetNames) -> LoadedData {
    let mut data = LoadedData::default();

    for kind in DatasetKind::ALL {
        let dataset = names.name(kind);
        let load = source.load(dataset);
        *data.tables.get_mut(kind) = load.table;
        data.report.push(DatasetReport {
            kind,
            dataset: dataset.to_string(),
            status: load.status,
        });
    }

    data
}

pub struct Session {
    pub data: LoadedData,
    pub store: DataStore,
}

impl Session {
    pub fn from_source<S: DatasetSource>(
        source: &S,
        names: &DatasetNames,
        mapping: &ColumnMapping,
    ) -> Self {
        let data = load_all(source, names);
        let store = DataStore::from_tables(&data.tables, mapping);

        let counts = store.counts();
        tracing::info!(
            products = counts.products,
            stores = counts.stores,
            customers = counts.customers,
            orders = counts.orders,
            "Data loaded"
        );

        Self { data, store }
    }

    /// Load from the configured data directory. Only a broken column-mapping
    /// file is fatal; dataset failures are in the report.
    pub fn open(config: &Config) -> Result<Self, LoadError> {
        let mapping = config.column_mapping()?;
        let source = SpreadsheetSource::new(&config.data_dir);
        let session = Self::from_source(&source, &config.datasets, &mapping);

        if config.export_on_load {
            if let Err(e) = export_json(&session.data.tables, &config.export_path) {
                tracing::warn!(
                    path = %config.export_path.display(),
                    error = %e,
                    "JSON export failed"
                );
            }
        }

        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::{sample_tables, text_table};
    use crate::test_utils::mocks::InMemoryDatasetSource;

    fn names() -> DatasetNames {
        DatasetNames::default()
    }

    #[test]
    fn one_failure_only_empties_that_table() {
        let tables = sample_tables();
        let source = InMemoryDatasetSource::new()
            .with_table("products_indian", tables.products)
            .with_table("stores_indian", tables.stores)
            .with_failure("customers_indian", "corrupt workbook")
            .with_table("orders_indian", tables.orders);

        let session = Session::from_source(&source, &names(), &ColumnMapping::default());

        assert_eq!(
            source.requested(),
            vec![
                "products_indian",
                "stores_indian",
                "customers_indian",
                "orders_indian"
            ]
        );
        assert_eq!(session.data.loaded_count(), 3);
        assert!(matches!(
            session.data.report[2].status,
            LoadStatus::Failed { .. }
        ));
        let counts = session.store.counts();
        assert_eq!(counts.products, 2);
        assert_eq!(counts.customers, 0);
        assert_eq!(counts.orders, 1);
    }

    #[test]
    fn missing_datasets_are_reported() {
        let source = InMemoryDatasetSource::new().with_table(
            "products_indian",
            text_table(&["ProductName", "Price"], &[&["Kurta", "799"]]),
        );
        let data = load_all(&source, &names());

        assert_eq!(data.report.len(), 4);
        assert!(data.report[0].status.is_loaded());
        assert_eq!(data.report[1].status, LoadStatus::Missing);
        assert_eq!(data.tables.products.len(), 1);
    }

    #[test]
    fn open_reads_data_dir_and_exports() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("products_indian.csv"),
            "Product ID,Product Name,Price,Stock\n1,Kurta,799,12\n",
        )
        .unwrap();

        let config = Config {
            data_dir: dir.path().to_path_buf(),
            export_path: dir.path().join("out.json"),
            export_on_load: true,
            ..Config::default()
        };
        let session = Session::open(&config).unwrap();

        assert_eq!(session.store.products().len(), 1);
        assert!(config.export_path.exists());
    }

    #[test]
    fn report_serializes_flat() {
        let report = DatasetReport {
            kind: DatasetKind::Orders,
            dataset: "orders_indian".to_string(),
            status: LoadStatus::Missing,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"kind": "orders", "dataset": "orders_indian", "status": "missing"})
        );
    }
}
