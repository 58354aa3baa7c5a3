//! Shared assistant for the loop tests

use retailx_api::app::{AssistantService, FrontEnd, IntentResolver};
use retailx_api::domain::entities::{
    Customer, CustomerId, Order, OrderId, Product, ProductId, Store, StoreId,
};
use retailx_api::domain::DataStore;

fn product(id: i64, name: &str, price: f64, stock: u32) -> Product {
    Product {
        id: Some(ProductId(id)),
        name: Some(name.to_string()),
        price: Some(price),
        stock: Some(stock),
    }
}

fn customer(id: i64, name: &str, points: i64) -> Customer {
    Customer {
        id: Some(CustomerId(id)),
        name: Some(name.to_string()),
        loyalty_points: Some(points),
        last_order_date: None,
    }
}

/// Two products, one Pune branch, two customers (150 and 100 points) and
/// order 1001 for the smartphone
pub fn assistant() -> AssistantService {
    let store = DataStore::new(
        vec![
            product(1, "Smartphone X", 15000.0, 10),
            product(2, "Charger", 499.0, 3),
        ],
        vec![Store {
            id: Some(StoreId(1)),
            branch_name: Some("Pune Central".to_string()),
            city: Some("Pune".to_string()),
            state: Some("Maharashtra".to_string()),
            address: Some("1 FC Road".to_string()),
        }],
        vec![customer(1, "Asha Rao", 150), customer(2, "Vikram Singh", 100)],
        vec![Order {
            id: Some(OrderId(1001)),
            customer_id: Some(CustomerId(1)),
            product_id: Some(ProductId(1)),
            status: Some("Shipped".to_string()),
        }],
    );
    AssistantService::new(store, IntentResolver::with_lemmatizer(), FrontEnd::Auto, 5)
}
