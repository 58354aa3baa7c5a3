//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! `sample_store` is the small shop most lookup tests run against.

use std::path::Path;

use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};

use crate::domain::entities::{
    CellValue, Customer, CustomerId, DatasetTables, Order, OrderId, Product, ProductId, Store,
    StoreId, Table,
};
use crate::domain::DataStore;

/// Create a test product
pub fn test_product(id: i64, name: &str, price: f64, stock: u32) -> Product {
    Product {
        id: Some(ProductId(id)),
        name: Some(name.to_string()),
        price: Some(price),
        stock: Some(stock),
    }
}

/// Create a test store; the branch name defaults to "<city> Central"
pub fn test_store(id: i64, city: &str, state: &str) -> Store {
    Store {
        id: Some(StoreId(id)),
        branch_name: Some(format!("{} Central", city)),
        city: Some(city.to_string()),
        state: Some(state.to_string()),
        address: Some(format!("{} Main Road, {}", id, city)),
    }
}

/// Create a test customer
pub fn test_customer(id: i64, name: &str, loyalty_points: i64) -> Customer {
    Customer {
        id: Some(CustomerId(id)),
        name: Some(name.to_string()),
        loyalty_points: Some(loyalty_points),
        last_order_date: None,
    }
}

/// Create a test order
pub fn test_order(id: i64, customer_id: i64, product_id: i64, status: &str) -> Order {
    Order {
        id: Some(OrderId(id)),
        customer_id: Some(CustomerId(customer_id)),
        product_id: Some(ProductId(product_id)),
        status: Some(status.to_string()),
    }
}

/// A small shop:
/// - products: Smartphone X (15000, 10), Charger (499, 3),
///   Headphones Pro (2999, 5), Laptop Stand (no price or stock)
/// - stores: Mumbai and Pune in Maharashtra, Bengaluru in Karnataka
/// - customers: Asha Rao (150 points), Vikram Singh (100), Meera Iyer (unknown)
/// - orders: 1001 Asha/Smartphone Shipped, 1002 Vikram/Charger Pending,
///   1003 Meera/Headphones Delivered
pub fn sample_store() -> DataStore {
    let products = vec![
        test_product(1, "Smartphone X", 15000.0, 10),
        test_product(2, "Charger", 499.0, 3),
        test_product(3, "Headphones Pro", 2999.0, 5),
        Product {
            id: Some(ProductId(4)),
            name: Some("Laptop Stand".to_string()),
            price: None,
            stock: None,
        },
    ];

    let mut bengaluru = test_store(3, "Bengaluru", "Karnataka");
    bengaluru.branch_name = Some("Bengaluru MG Road".to_string());
    let stores = vec![
        test_store(1, "Mumbai", "Maharashtra"),
        test_store(2, "Pune", "Maharashtra"),
        bengaluru,
    ];

    let mut asha = test_customer(1, "Asha Rao", 150);
    asha.last_order_date = Some("2024-03-15".to_string());
    let mut meera = test_customer(3, "Meera Iyer", 0);
    meera.loyalty_points = None;
    meera.last_order_date = Some("2024-01-02".to_string());
    let customers = vec![asha, test_customer(2, "Vikram Singh", 100), meera];

    let orders = vec![
        test_order(1001, 1, 1, "Shipped"),
        test_order(1002, 2, 2, "Pending"),
        test_order(1003, 3, 3, "Delivered"),
    ];

    DataStore::new(products, stores, customers, orders)
}

/// Build a raw table from header names and textual cells
pub fn text_table(columns: &[&str], rows: &[&[&str]]) -> Table {
    let mut table = Table::new(columns.iter().map(|c| c.to_string()).collect());
    for row in rows {
        table.push_cells(row.iter().map(|cell| CellValue::from_text(cell)));
    }
    table
}

/// Raw tables with spreadsheet-style headers, as a loader would produce them
pub fn sample_tables() -> DatasetTables {
    DatasetTables {
        products: text_table(
            &["Product ID", "Product Name", "Price", "Stock"],
            &[
                &["1", "Smartphone X", "15000", "10"],
                &["2", "Charger", "499.0", "3"],
            ],
        ),
        stores: text_table(
            &["Store ID", "Branch Name", "City", "State", "Address"],
            &[&["1", "Pune Central", "Pune", "Maharashtra", "1 FC Road"]],
        ),
        customers: text_table(
            &["Customer ID", "Customer Name", "Loyalty Points", "Last Order Date"],
            &[&["1", "Asha Rao", "150", "2024-03-15"]],
        ),
        orders: text_table(
            &["Order ID", "Customer ID", "Product ID", "Status"],
            &[&["1001", "1", "1", "Shipped"]],
        ),
    }
}

/// Write a one-sheet workbook. Numeric cells are written as numbers and
/// `YYYY-MM-DD` cells as dates; everything else is text.
pub fn write_workbook(path: &Path, columns: &[&str], rows: &[&[&str]]) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    let date_format = Format::new().set_num_format("yyyy-mm-dd");

    for (col, name) in columns.iter().enumerate() {
        sheet.write_string(0, col as u16, *name).unwrap();
    }
    for (row_idx, row) in rows.iter().enumerate() {
        let row_num = row_idx as u32 + 1;
        for (col, cell) in row.iter().enumerate() {
            let col = col as u16;
            if let Ok(number) = cell.parse::<f64>() {
                sheet.write_number(row_num, col, number).unwrap();
            } else if let Ok(date) = ExcelDateTime::parse_from_str(cell) {
                sheet
                    .write_datetime_with_format(row_num, col, &date, &date_format)
                    .unwrap();
            } else {
                sheet.write_string(row_num, col, *cell).unwrap();
            }
        }
    }

    workbook.save(path).unwrap();
}
