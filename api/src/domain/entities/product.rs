//! Product domain entity
//!
//! A catalogue item with optional price and stock. Numeric fields that could
//! not be parsed from the source are `None`, never zero.

use serde::{Deserialize, Serialize};

/// Unique identifier for a product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A product in the catalogue
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: Option<ProductId>,
    pub name: Option<String>,
    pub price: Option<f64>,
    /// Units in stock; negative source values are treated as absent
    pub stock: Option<u32>,
}

impl Product {
    /// Case-insensitive substring match on the product name
    pub fn name_contains(&self, needle: &str) -> bool {
        super::contains_ci(self.name.as_deref(), needle)
    }

    /// Whether the price lies in `[low, high]`; unknown prices never match
    pub fn price_within(&self, low: f64, high: f64) -> bool {
        self.price.is_some_and(|p| p >= low && p <= high)
    }
}

/// Name and stock of a product, as reported by an availability check
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockLevel {
    pub name: String,
    pub stock: Option<u32>,
}

impl From<&Product> for StockLevel {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone().unwrap_or_default(),
            stock: product.stock,
        }
    }
}
