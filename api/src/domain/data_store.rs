//! Data store
//!
//! The immutable, per-session collection of the four typed tables. Built once
//! from raw tables and then only read; every lookup receives it explicitly.

use crate::domain::entities::{
    CellValue, Customer, CustomerId, DatasetKind, DatasetTables, Order, OrderId, Product,
    ProductId, Row, Store, StoreId, Table,
};
use crate::domain::schema::ColumnMapping;

/// Typed, read-only view of all datasets
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataStore {
    products: Vec<Product>,
    stores: Vec<Store>,
    customers: Vec<Customer>,
    orders: Vec<Order>,
}

/// Record counts per dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct StoreCounts {
    pub products: usize,
    pub stores: usize,
    pub customers: usize,
    pub orders: usize,
}

impl DataStore {
    pub fn new(
        products: Vec<Product>,
        stores: Vec<Store>,
        customers: Vec<Customer>,
        orders: Vec<Order>,
    ) -> Self {
        Self {
            products,
            stores,
            customers,
            orders,
        }
    }

    /// Build typed records from raw tables using the column mapping.
    /// Missing columns leave the corresponding field `None` on every record.
    pub fn from_tables(tables: &DatasetTables, mapping: &ColumnMapping) -> Self {
        for kind in DatasetKind::ALL {
            let table = tables.get(kind);
            if table.is_empty() {
                continue;
            }
            let missing = mapping.missing_columns(kind, table);
            if !missing.is_empty() {
                tracing::warn!(
                    dataset = %kind,
                    missing = ?missing,
                    columns = ?table.columns,
                    "Mapped columns not found; fields will be absent"
                );
            }
        }

        Self {
            products: build_products(&tables.products, mapping),
            stores: build_stores(&tables.stores, mapping),
            customers: build_customers(&tables.customers, mapping),
            orders: build_orders(&tables.orders, mapping),
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn stores(&self) -> &[Store] {
        &self.stores
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn counts(&self) -> StoreCounts {
        StoreCounts {
            products: self.products.len(),
            stores: self.stores.len(),
            customers: self.customers.len(),
            orders: self.orders.len(),
        }
    }
}

/// Resolved source column for one logical field
struct Column<'a>(Option<&'a str>);

impl<'a> Column<'a> {
    fn resolve(table: &'a Table, candidates: &[String]) -> Self {
        Self(table.find_column(candidates))
    }

    fn cell<'r>(&self, row: &'r Row) -> Option<&'r CellValue> {
        row.get(self.0?)
    }

    fn text(&self, row: &Row) -> Option<String> {
        self.cell(row)?.as_text()
    }

    fn int(&self, row: &Row) -> Option<i64> {
        self.cell(row)?.as_i64()
    }

    fn float(&self, row: &Row) -> Option<f64> {
        self.cell(row)?.as_f64()
    }
}

fn build_products(table: &Table, mapping: &ColumnMapping) -> Vec<Product> {
    let cols = &mapping.products;
    let id = Column::resolve(table, &cols.id);
    let name = Column::resolve(table, &cols.name);
    let price = Column::resolve(table, &cols.price);
    let stock = Column::resolve(table, &cols.stock);

    table
        .rows
        .iter()
        .map(|row| Product {
            id: id.int(row).map(ProductId),
            name: name.text(row),
            price: price.float(row),
            stock: stock.int(row).and_then(|s| u32::try_from(s).ok()),
        })
        .collect()
}

fn build_stores(table: &Table, mapping: &ColumnMapping) -> Vec<Store> {
    let cols = &mapping.stores;
    let id = Column::resolve(table, &cols.id);
    let branch_name = Column::resolve(table, &cols.branch_name);
    let city = Column::resolve(table, &cols.city);
    let state = Column::resolve(table, &cols.state);
    let address = Column::resolve(table, &cols.address);

    table
        .rows
        .iter()
        .map(|row| Store {
            id: id.int(row).map(StoreId),
            branch_name: branch_name.text(row),
            city: city.text(row),
            state: state.text(row),
            address: address.text(row),
        })
        .collect()
}

fn build_customers(table: &Table, mapping: &ColumnMapping) -> Vec<Customer> {
    let cols = &mapping.customers;
    let id = Column::resolve(table, &cols.id);
    let name = Column::resolve(table, &cols.name);
    let loyalty_points = Column::resolve(table, &cols.loyalty_points);
    let last_order_date = Column::resolve(table, &cols.last_order_date);

    table
        .rows
        .iter()
        .map(|row| Customer {
            id: id.int(row).map(CustomerId),
            name: name.text(row),
            loyalty_points: loyalty_points.int(row),
            last_order_date: last_order_date.text(row),
        })
        .collect()
}

fn build_orders(table: &Table, mapping: &ColumnMapping) -> Vec<Order> {
    let cols = &mapping.orders;
    let id = Column::resolve(table, &cols.id);
    let customer_id = Column::resolve(table, &cols.customer_id);
    let product_id = Column::resolve(table, &cols.product_id);
    let status = Column::resolve(table, &cols.status);

    table
        .rows
        .iter()
        .map(|row| Order {
            id: id.int(row).map(OrderId),
            customer_id: customer_id.int(row).map(CustomerId),
            product_id: product_id.int(row).map(ProductId),
            status: status.text(row),
        })
        .collect()
}
