//! Response renderer
//!
//! Renders formatted responses to readable text, one record per line.

use crate::adapters::ExportSummary;
use crate::app::{DatasetReport, Payload, Records, Response};
use crate::domain::entities::{Branch, Order, Product, StockLevel};
use crate::domain::StoreCounts;

/// Render a response; messages are returned verbatim
pub fn render_response(response: &Response) -> String {
    match &response.payload {
        Payload::Text(text) => text.clone(),
        Payload::Records(records) => render_records(records),
    }
}

fn render_records(records: &Records) -> String {
    let (noun, lines): (&str, Vec<String>) = match records {
        Records::Products(items) => ("product", items.iter().map(render_product).collect()),
        Records::StockLevels(items) => ("product", items.iter().map(render_stock).collect()),
        Records::Orders(items) => ("order", items.iter().map(render_order).collect()),
        Records::Branches(items) => ("branch", items.iter().map(render_branch).collect()),
    };

    let plural = match (lines.len(), noun) {
        (1, _) => noun.to_string(),
        (_, "branch") => "branches".to_string(),
        _ => format!("{}s", noun),
    };

    let mut buf = format!("Found {} {}:\n", lines.len(), plural);
    for line in lines {
        buf.push_str("- ");
        buf.push_str(&line);
        buf.push('\n');
    }
    buf
}

fn render_product(product: &Product) -> String {
    let id = product
        .id
        .map(|id| format!(" (ID {})", id))
        .unwrap_or_default();
    format!(
        "{}{} | Price: {} | Stock: {}",
        product.name.as_deref().unwrap_or("Unnamed product"),
        id,
        product.price.map(format_price).unwrap_or_else(|| "n/a".to_string()),
        or_na(product.stock),
    )
}

fn render_stock(level: &StockLevel) -> String {
    format!("{}: {} in stock", level.name, or_na(level.stock))
}

fn render_order(order: &Order) -> String {
    format!(
        "Order {} | Customer {} | Product {} | Status: {}",
        or_na(order.id),
        or_na(order.customer_id),
        or_na(order.product_id),
        order.status.as_deref().unwrap_or("n/a"),
    )
}

fn render_branch(branch: &Branch) -> String {
    if branch.address.is_empty() {
        branch.branch_name.clone()
    } else {
        format!("{}, {}", branch.branch_name, branch.address)
    }
}

fn or_na<T: std::fmt::Display>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| "n/a".to_string())
}

/// Rupee amount; whole amounts drop the decimals
fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("₹{}", price as i64)
    } else {
        format!("₹{:.2}", price)
    }
}

/// Per-dataset load status followed by record counts
pub fn render_load_report(report: &[DatasetReport], counts: &StoreCounts) -> String {
    let mut buf = String::from("# Datasets\n\n");
    for entry in report {
        buf.push_str(&format!(
            "- {} ({}): {}\n",
            entry.kind, entry.dataset, entry.status
        ));
    }

    buf.push_str("\n## Records\n\n");
    buf.push_str(&format!("- Products: {}\n", counts.products));
    buf.push_str(&format!("- Stores: {}\n", counts.stores));
    buf.push_str(&format!("- Customers: {}\n", counts.customers));
    buf.push_str(&format!("- Orders: {}\n", counts.orders));
    buf
}

pub fn render_export_summary(summary: &ExportSummary) -> String {
    let mut buf = format!("Exported to {}\n", summary.path.display());
    for (key, count) in &summary.counts {
        buf.push_str(&format!("- {}: {} records\n", key, count));
    }
    match &summary.first_product {
        Some(product) => buf.push_str(&format!("First product: {}\n", product)),
        None => buf.push_str("No products exported.\n"),
    }
    buf
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::LookupResult;
    use crate::domain::entities::{DatasetKind, ProductId};
    use crate::domain::ports::LoadStatus;
    use crate::test_utils::fixtures::test_product;

    #[test]
    fn renders_messages_verbatim() {
        let response = Response::message("Order not found.");
        assert_eq!(render_response(&response), "Order not found.");
    }

    #[test]
    fn renders_products() {
        let response = Response::from(LookupResult::Records(Records::Products(vec![
            test_product(1, "Smartphone X", 15000.0, 10),
            Product {
                id: Some(ProductId(2)),
                name: Some("Charger".to_string()),
                price: Some(499.5),
                stock: None,
            },
        ])));
        let text = render_response(&response);
        assert_eq!(
            text,
            "Found 2 products:\n\
             - Smartphone X (ID 1) | Price: ₹15000 | Stock: 10\n\
             - Charger (ID 2) | Price: ₹499.50 | Stock: n/a\n"
        );
    }

    #[test]
    fn renders_single_branch() {
        let response = Response::records(Records::Branches(vec![Branch {
            branch_name: "Pune Central".to_string(),
            address: "1 FC Road".to_string(),
        }]));
        assert_eq!(
            render_response(&response),
            "Found 1 branch:\n- Pune Central, 1 FC Road\n"
        );
    }

    #[test]
    fn renders_load_report() {
        let report = vec![DatasetReport {
            kind: DatasetKind::Stores,
            dataset: "stores_indian".to_string(),
            status: LoadStatus::Missing,
        }];
        let counts = StoreCounts {
            products: 0,
            stores: 0,
            customers: 0,
            orders: 0,
        };
        let text = render_load_report(&report, &counts);
        assert!(text.contains("- stores (stores_indian): "));
        assert!(text.contains("- Orders: 0"));
    }
}
