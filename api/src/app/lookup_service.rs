//! Read-only lookups over the data store
//!
//! Each lookup returns a `LookupResult`: matching records, a human-readable
//! message, or a not-found/invalid-input message. Text matching is
//! case-insensitive substring containment.

use serde::Serialize;

use crate::domain::entities::{Branch, CustomerId, Order, OrderId, Product, StockLevel};
use crate::domain::DataStore;

/// Loyalty points above which a customer earns the discount
pub const LOYALTY_THRESHOLD: i64 = 100;

pub const NO_PRODUCTS_FOUND: &str = "No products found.";
pub const PRODUCT_NOT_AVAILABLE: &str = "Product not available.";
pub const ORDER_NOT_FOUND: &str = "Order not found.";
pub const ORDER_DETAILS_NOT_FOUND: &str = "Order details not found.";
pub const CUSTOMER_NOT_FOUND: &str = "Customer not found.";
pub const LOYALTY_DISCOUNT: &str = "You have a 10% discount on your next purchase!";
pub const NO_PROMOTIONS: &str = "No promotions available.";
pub const SUFFICIENTLY_STOCKED: &str = "All products are sufficiently stocked.";

/// Records returned by a lookup
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Records {
    Products(Vec<Product>),
    StockLevels(Vec<StockLevel>),
    Orders(Vec<Order>),
    Branches(Vec<Branch>),
}

impl Records {
    pub fn len(&self) -> usize {
        match self {
            Records::Products(items) => items.len(),
            Records::StockLevels(items) => items.len(),
            Records::Orders(items) => items.len(),
            Records::Branches(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LookupResult {
    Records(Records),
    Message(String),
    NotFound(String),
    Invalid(String),
}

impl LookupResult {
    fn not_found(message: &str) -> Self {
        LookupResult::NotFound(message.to_string())
    }

    fn message(message: &str) -> Self {
        LookupResult::Message(message.to_string())
    }
}

pub fn invalid_format(detail: &str) -> String {
    format!("Invalid format: {}", detail)
}

pub fn find_product(store: &DataStore, phrase: &str) -> LookupResult {
    let matches: Vec<Product> = store
        .products()
        .iter()
        .filter(|p| p.name_contains(phrase))
        .cloned()
        .collect();

    if matches.is_empty() {
        LookupResult::not_found(NO_PRODUCTS_FOUND)
    } else {
        LookupResult::Records(Records::Products(matches))
    }
}

pub fn check_availability(store: &DataStore, phrase: &str) -> LookupResult {
    let levels: Vec<StockLevel> = store
        .products()
        .iter()
        .filter(|p| p.name_contains(phrase))
        .map(StockLevel::from)
        .collect();

    if levels.is_empty() {
        LookupResult::not_found(PRODUCT_NOT_AVAILABLE)
    } else {
        LookupResult::Records(Records::StockLevels(levels))
    }
}

/// Products matching `phrase` priced within `[low, high]`
pub fn filter_by_budget(store: &DataStore, phrase: &str, low: f64, high: f64) -> LookupResult {
    if low.is_nan() || high.is_nan() || low > high {
        return LookupResult::Invalid(invalid_format(&format!(
            "the budget range {} to {} is empty",
            low, high
        )));
    }

    let matches: Vec<Product> = store
        .products()
        .iter()
        .filter(|p| p.name_contains(phrase) && p.price_within(low, high))
        .cloned()
        .collect();

    if matches.is_empty() {
        LookupResult::not_found(NO_PRODUCTS_FOUND)
    } else {
        LookupResult::Records(Records::Products(matches))
    }
}

pub fn track_order(store: &DataStore, order_id: OrderId) -> LookupResult {
    match store.orders().iter().find(|o| o.id == Some(order_id)) {
        Some(order) => LookupResult::Records(Records::Orders(vec![order.clone()])),
        None => LookupResult::not_found(ORDER_NOT_FOUND),
    }
}

/// Status of a customer's order for a product named like `product`
pub fn customer_order_status(
    store: &DataStore,
    customer_id: CustomerId,
    product: Option<&str>,
) -> LookupResult {
    let Some(product) = product.filter(|p| !p.trim().is_empty()) else {
        return LookupResult::not_found(ORDER_DETAILS_NOT_FOUND);
    };

    let candidates: Vec<&Product> = store
        .products()
        .iter()
        .filter(|p| p.id.is_some() && p.name_contains(product))
        .collect();

    for order in store
        .orders()
        .iter()
        .filter(|o| o.customer_id == Some(customer_id))
    {
        let Some(matched) = candidates.iter().find(|p| p.id == order.product_id) else {
            continue;
        };
        let name = matched.name.as_deref().unwrap_or(product);
        let status = order.status.as_deref().unwrap_or("unknown");
        return LookupResult::Message(format!(
            "The status of your order for {} is {}.",
            name, status
        ));
    }

    LookupResult::not_found(ORDER_DETAILS_NOT_FOUND)
}

pub fn personalized_promotions(store: &DataStore, customer_id: CustomerId) -> LookupResult {
    let Some(customer) = store
        .customers()
        .iter()
        .find(|c| c.id == Some(customer_id))
    else {
        return LookupResult::not_found(CUSTOMER_NOT_FOUND);
    };

    if customer
        .loyalty_points
        .is_some_and(|points| points > LOYALTY_THRESHOLD)
    {
        LookupResult::message(LOYALTY_DISCOUNT)
    } else {
        LookupResult::message(NO_PROMOTIONS)
    }
}

pub fn count_stores_in(store: &DataStore, state: &str) -> LookupResult {
    let count = store
        .stores()
        .iter()
        .filter(|s| s.state_contains(state))
        .count();

    let message = if count == 1 {
        format!("There is 1 store in {}.", state)
    } else {
        format!("There are {} stores in {}.", count, state)
    };
    LookupResult::Message(message)
}

pub fn check_branch_availability(store: &DataStore, location: &str) -> LookupResult {
    let branches: Vec<Branch> = store
        .stores()
        .iter()
        .filter(|s| s.city_contains(location))
        .map(Branch::from)
        .collect();

    if branches.is_empty() {
        LookupResult::NotFound(format!("No branches found in {}.", location))
    } else {
        LookupResult::Records(Records::Branches(branches))
    }
}

/// Most recent order date of the first customer whose name matches
pub fn last_order_date(store: &DataStore, name: &str) -> LookupResult {
    let Some(customer) = store
        .customers()
        .iter()
        .find(|c| c.name_contains(name))
    else {
        return LookupResult::not_found(CUSTOMER_NOT_FOUND);
    };

    let display = customer.name.as_deref().unwrap_or(name);
    match customer.last_order_date.as_deref() {
        Some(date) => {
            LookupResult::Message(format!("The last order date for {} is {}.", display, date))
        }
        None => LookupResult::Message(format!("No last order date is recorded for {}.", display)),
    }
}

/// Products whose known stock is strictly below `threshold`
pub fn monitor_inventory(store: &DataStore, threshold: u32) -> LookupResult {
    let low: Vec<Product> = store
        .products()
        .iter()
        .filter(|p| p.stock.is_some_and(|stock| stock < threshold))
        .cloned()
        .collect();

    if low.is_empty() {
        LookupResult::message(SUFFICIENTLY_STOCKED)
    } else {
        LookupResult::Records(Records::Products(low))
    }
}
