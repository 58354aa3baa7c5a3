//! Column mapping
//!
//! Maps each logical record field to an ordered list of candidate source
//! column names. Sources disagree on spelling ("Product Name" vs
//! "ProductName"), so every known spelling is a candidate and the first one
//! present in a table's header wins. A JSON file can replace any list.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::entities::{DatasetKind, Table};
use crate::error::LoadError;

fn candidates(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductColumns {
    pub id: Vec<String>,
    pub name: Vec<String>,
    pub price: Vec<String>,
    pub stock: Vec<String>,
}

impl Default for ProductColumns {
    fn default() -> Self {
        Self {
            id: candidates(&["Product ID", "ProductID"]),
            name: candidates(&["Product Name", "ProductName"]),
            price: candidates(&["Price"]),
            stock: candidates(&["Stock"]),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreColumns {
    pub id: Vec<String>,
    pub branch_name: Vec<String>,
    pub city: Vec<String>,
    pub state: Vec<String>,
    pub address: Vec<String>,
}

impl Default for StoreColumns {
    fn default() -> Self {
        Self {
            id: candidates(&["Store ID", "StoreID"]),
            branch_name: candidates(&["Branch Name", "BranchName", "Store Name", "StoreName"]),
            city: candidates(&["City"]),
            state: candidates(&["State"]),
            address: candidates(&["Address"]),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerColumns {
    pub id: Vec<String>,
    pub name: Vec<String>,
    pub loyalty_points: Vec<String>,
    pub last_order_date: Vec<String>,
}

impl Default for CustomerColumns {
    fn default() -> Self {
        Self {
            id: candidates(&["Customer ID", "CustomerID"]),
            name: candidates(&["Customer Name", "CustomerName", "Name"]),
            loyalty_points: candidates(&["Loyalty Points", "LoyaltyPoints"]),
            last_order_date: candidates(&["Last Order Date", "LastOrderDate"]),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderColumns {
    pub id: Vec<String>,
    pub customer_id: Vec<String>,
    pub product_id: Vec<String>,
    pub status: Vec<String>,
}

impl Default for OrderColumns {
    fn default() -> Self {
        Self {
            id: candidates(&["Order ID", "OrderID"]),
            customer_id: candidates(&["Customer ID", "CustomerID"]),
            product_id: candidates(&["Product ID", "ProductID"]),
            status: candidates(&["Status", "Order Status", "OrderStatus"]),
        }
    }
}

/// Logical field → candidate source columns, for all four datasets
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnMapping {
    pub products: ProductColumns,
    pub stores: StoreColumns,
    pub customers: CustomerColumns,
    pub orders: OrderColumns,
}

impl ColumnMapping {
    /// Parse a mapping from JSON. Omitted datasets/fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, LoadError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Logical fields of a dataset with their candidate columns
    pub fn fields(&self, kind: DatasetKind) -> Vec<(&'static str, &[String])> {
        match kind {
            DatasetKind::Products => vec![
                ("id", &self.products.id[..]),
                ("name", &self.products.name[..]),
                ("price", &self.products.price[..]),
                ("stock", &self.products.stock[..]),
            ],
            DatasetKind::Stores => vec![
                ("id", &self.stores.id[..]),
                ("branch_name", &self.stores.branch_name[..]),
                ("city", &self.stores.city[..]),
                ("state", &self.stores.state[..]),
                ("address", &self.stores.address[..]),
            ],
            DatasetKind::Customers => vec![
                ("id", &self.customers.id[..]),
                ("name", &self.customers.name[..]),
                ("loyalty_points", &self.customers.loyalty_points[..]),
                ("last_order_date", &self.customers.last_order_date[..]),
            ],
            DatasetKind::Orders => vec![
                ("id", &self.orders.id[..]),
                ("customer_id", &self.orders.customer_id[..]),
                ("product_id", &self.orders.product_id[..]),
                ("status", &self.orders.status[..]),
            ],
        }
    }

    /// Logical fields with no matching column in the table header
    pub fn missing_columns(&self, kind: DatasetKind, table: &Table) -> Vec<&'static str> {
        self.fields(kind)
            .into_iter()
            .filter(|(_, cands)| table.find_column(cands).is_none())
            .map(|(field, _)| field)
            .collect()
    }
}
