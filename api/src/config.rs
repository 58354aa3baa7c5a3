use std::env;
use std::path::PathBuf;

use crate::app::FrontEnd;
use crate::domain::entities::DatasetKind;
use crate::domain::ColumnMapping;
use crate::error::LoadError;

/// Default low-stock threshold for inventory monitoring
pub const DEFAULT_LOW_STOCK_THRESHOLD: u32 = 5;

/// Logical dataset names (file stems without extension)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetNames {
    pub products: String,
    pub stores: String,
    pub customers: String,
    pub orders: String,
}

impl DatasetNames {
    pub fn name(&self, kind: DatasetKind) -> &str {
        match kind {
            DatasetKind::Products => &self.products,
            DatasetKind::Stores => &self.stores,
            DatasetKind::Customers => &self.customers,
            DatasetKind::Orders => &self.orders,
        }
    }
}

impl Default for DatasetNames {
    fn default() -> Self {
        Self {
            products: "products_indian".to_string(),
            stores: "stores_indian".to_string(),
            customers: "customers_indian".to_string(),
            orders: "orders_indian".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory searched for dataset files
    pub data_dir: PathBuf,
    pub datasets: DatasetNames,
    /// Optional JSON file overriding the column mapping
    pub column_map_path: Option<PathBuf>,
    /// Where the JSON export is written
    pub export_path: PathBuf,
    /// Write the JSON export right after loading
    pub export_on_load: bool,
    pub low_stock_threshold: u32,
    /// Use the lemma dictionary in the keyword resolver
    pub lemmatize: bool,
    pub front_end: FrontEnd,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            datasets: DatasetNames::default(),
            column_map_path: None,
            export_path: PathBuf::from("retailx_data.json"),
            export_on_load: false,
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
            lemmatize: true,
            front_end: FrontEnd::Auto,
            port: 8080,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup; unset or unparseable values keep
    /// their defaults.
    pub fn from_vars<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let default_names = defaults.datasets.clone();

        Self {
            data_dir: var("RETAILX_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            datasets: DatasetNames {
                products: var("RETAILX_PRODUCTS_DATASET").unwrap_or(default_names.products),
                stores: var("RETAILX_STORES_DATASET").unwrap_or(default_names.stores),
                customers: var("RETAILX_CUSTOMERS_DATASET").unwrap_or(default_names.customers),
                orders: var("RETAILX_ORDERS_DATASET").unwrap_or(default_names.orders),
            },
            column_map_path: var("RETAILX_COLUMN_MAP").map(PathBuf::from),
            export_path: var("RETAILX_EXPORT_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.export_path),
            export_on_load: var("RETAILX_EXPORT_ON_LOAD")
                .and_then(|v| parse_bool(&v))
                .unwrap_or(defaults.export_on_load),
            low_stock_threshold: var("RETAILX_LOW_STOCK_THRESHOLD")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.low_stock_threshold),
            lemmatize: var("RETAILX_LEMMATIZE")
                .and_then(|v| parse_bool(&v))
                .unwrap_or(defaults.lemmatize),
            front_end: var("RETAILX_FRONT_END")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.front_end),
            port: var("PORT")
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(defaults.port),
        }
    }

    /// Column mapping from `RETAILX_COLUMN_MAP`, or the built-in defaults
    pub fn column_mapping(&self) -> Result<ColumnMapping, LoadError> {
        match &self.column_map_path {
            Some(path) => ColumnMapping::from_file(path),
            None => Ok(ColumnMapping::default()),
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
