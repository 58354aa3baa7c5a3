//! Resolved queries
//!
//! A `Query` is a fully parameterised request for one lookup. Both front ends
//! (keyword and phrase) and the explicit-parameter surfaces produce queries;
//! the constructors here validate raw parameter text.

use serde::Serialize;

use crate::domain::entities::{CustomerId, OrderId};
use crate::error::ParseError;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "lookup", rename_all = "snake_case")]
pub enum Query {
    FindProduct {
        phrase: String,
    },
    CheckAvailability {
        phrase: String,
    },
    FilterByBudget {
        phrase: String,
        low: f64,
        high: f64,
    },
    TrackOrder {
        order_id: OrderId,
    },
    CustomerOrderStatus {
        customer_id: CustomerId,
        product: Option<String>,
    },
    Promotions {
        customer_id: CustomerId,
    },
    CountStores {
        state: String,
    },
    BranchAvailability {
        location: String,
    },
    LastOrderDate {
        name: String,
    },
    LowStock {
        threshold: Option<u32>,
    },
}

impl Query {
    pub fn find_product(phrase: &str) -> Result<Self, ParseError> {
        Ok(Query::FindProduct {
            phrase: require_text(phrase, "product name")?,
        })
    }

    pub fn check_availability(phrase: &str) -> Result<Self, ParseError> {
        Ok(Query::CheckAvailability {
            phrase: require_text(phrase, "product name")?,
        })
    }

    pub fn filter_by_budget(phrase: &str, low: &str, high: &str) -> Result<Self, ParseError> {
        Ok(Query::FilterByBudget {
            phrase: require_text(phrase, "product name")?,
            low: parse_amount(low, "budget")?,
            high: parse_amount(high, "budget")?,
        })
    }

    pub fn track_order(order_id: &str) -> Result<Self, ParseError> {
        Ok(Query::TrackOrder {
            order_id: OrderId(parse_id(order_id, "order id")?),
        })
    }

    pub fn customer_order_status(
        customer_id: &str,
        product: Option<&str>,
    ) -> Result<Self, ParseError> {
        Ok(Query::CustomerOrderStatus {
            customer_id: CustomerId(parse_id(customer_id, "customer id")?),
            product: product
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::to_string),
        })
    }

    pub fn promotions(customer_id: &str) -> Result<Self, ParseError> {
        Ok(Query::Promotions {
            customer_id: CustomerId(parse_id(customer_id, "customer id")?),
        })
    }

    pub fn count_stores(state: &str) -> Result<Self, ParseError> {
        Ok(Query::CountStores {
            state: require_text(state, "state")?,
        })
    }

    pub fn branch_availability(location: &str) -> Result<Self, ParseError> {
        Ok(Query::BranchAvailability {
            location: require_text(location, "location")?,
        })
    }

    pub fn last_order_date(name: &str) -> Result<Self, ParseError> {
        Ok(Query::LastOrderDate {
            name: require_text(name, "customer name")?,
        })
    }

    pub fn low_stock(threshold: Option<&str>) -> Result<Self, ParseError> {
        let threshold = match threshold.map(str::trim).filter(|t| !t.is_empty()) {
            Some(raw) => Some(raw.parse::<u32>().map_err(|_| {
                ParseError::InvalidArgument(format!("'{}' is not a valid stock threshold", raw))
            })?),
            None => None,
        };
        Ok(Query::LowStock { threshold })
    }
}

/// Trimmed, non-empty text parameter
pub fn require_text(raw: &str, what: &str) -> Result<String, ParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ParseError::MissingArgument(what.to_string()));
    }
    Ok(trimmed.to_string())
}

/// Numeric identifier. A leading `#` is accepted ("#123").
pub fn parse_id(raw: &str, what: &str) -> Result<i64, ParseError> {
    let trimmed = raw.trim().trim_start_matches('#');
    if trimmed.is_empty() {
        return Err(ParseError::MissingArgument(what.to_string()));
    }
    if !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(ParseError::InvalidArgument(format!(
            "'{}' is not a valid {}",
            raw.trim(),
            what
        )));
    }
    Ok(trimmed.parse::<i64>()?)
}

/// Non-negative money amount; currency markers and thousands separators
/// are ignored ("₹1,500", "rs.200").
pub fn parse_amount(raw: &str, what: &str) -> Result<f64, ParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ParseError::MissingArgument(what.to_string()));
    }
    let cleaned = trimmed
        .trim_start_matches('₹')
        .trim_start_matches('$')
        .trim_start_matches("rs.")
        .trim_start_matches("rs")
        .replace(',', "");

    match cleaned.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(ParseError::InvalidArgument(format!(
            "'{}' is not a valid {}",
            trimmed, what
        ))),
    }
}
