//! Phrase-trigger front end
//!
//! Recognises fixed sentence shapes ("how many stores are there in X",
//! "looking for X between LOW to HIGH", ...) and extracts their parameters
//! with the caller's original casing. Anything else is left to the keyword
//! resolver.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::query::Query;
use crate::error::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Trigger {
    CountStores,
    CustomerOrderStatus,
    TrackOrder,
    Promotions,
    LastOrderDate,
    StockLeft,
    Branches,
    Budget,
    FindProduct,
    LowStock,
}

/// Checked in order; the first match wins
static TRIGGERS: LazyLock<Vec<(Trigger, Regex)>> = LazyLock::new(|| {
    [
        (
            Trigger::CountStores,
            r"(?i)\bhow many stores (?:are there |do you have |are )?in (?P<state>.+)$",
        ),
        (
            Trigger::CustomerOrderStatus,
            r"(?i)\border status (?:for|of) customer (?P<customer>\S+)(?: (?:for|of|on) (?P<product>.+))?$",
        ),
        (
            Trigger::TrackOrder,
            r"(?i)\b(?:track|status of|where is)(?: my| the)? order(?: id| number| no\.?)? (?P<order>\S+)$",
        ),
        (
            Trigger::Promotions,
            r"(?i)\b(?:promotions?|offers?|discounts?) (?:available )?for customer (?P<customer>\S+)$",
        ),
        (
            Trigger::LastOrderDate,
            r"(?i)\blast order date (?:for|of) (?P<name>.+)$",
        ),
        (
            Trigger::StockLeft,
            r"(?i)\bstock is left (?:for|of|in) (?P<product>.+)$",
        ),
        (
            Trigger::Branches,
            r"(?i)\bbranch(?:es)? in (?P<location>.+)$",
        ),
        (
            Trigger::Budget,
            r"(?i)\blooking for (?P<product>.+?) (?:between|from|within|in the range of|in range) (?P<low>\S+) (?:to|and|-) (?P<high>\S+)$",
        ),
        (
            Trigger::Budget,
            r"(?i)\blooking for (?P<product>.+?) (?P<low>[₹$]?\d[\d,.]*) (?:to|-) (?P<high>\S+)$",
        ),
        (
            Trigger::FindProduct,
            r"(?i)\blooking for (?P<product>.+)$",
        ),
        (
            Trigger::LowStock,
            r"(?i)^(?:(?:show|check|list)(?: me)?(?: the)? )?(?:low stock|monitor inventory|inventory report|running low)(?: items| products)?$",
        ),
    ]
    .into_iter()
    .map(|(trigger, pattern)| (trigger, Regex::new(pattern).unwrap()))
    .collect()
});

/// Parse a trigger phrase. `None` when no trigger matches.
pub fn parse_phrase(utterance: &str) -> Option<Result<Query, ParseError>> {
    let text = utterance
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let text = text.trim_end_matches(&['?', '.', '!'][..]);

    let (trigger, caps) = TRIGGERS
        .iter()
        .find_map(|(trigger, re)| re.captures(text).map(|caps| (*trigger, caps)))?;

    tracing::debug!(?trigger, "Matched trigger phrase");

    let query = match trigger {
        Trigger::CountStores => Query::count_stores(&group(&caps, "state")),
        Trigger::CustomerOrderStatus => {
            let product = caps.name("product").map(|m| strip_articles(m.as_str()));
            Query::customer_order_status(&group(&caps, "customer"), product.as_deref())
        }
        Trigger::TrackOrder => Query::track_order(&group(&caps, "order")),
        Trigger::Promotions => Query::promotions(&group(&caps, "customer")),
        Trigger::LastOrderDate => Query::last_order_date(&group(&caps, "name")),
        Trigger::StockLeft => Query::check_availability(&group(&caps, "product")),
        Trigger::Branches => Query::branch_availability(&group(&caps, "location")),
        Trigger::Budget => Query::filter_by_budget(
            &group(&caps, "product"),
            &group(&caps, "low"),
            &group(&caps, "high"),
        ),
        Trigger::FindProduct => Query::find_product(&group(&caps, "product")),
        Trigger::LowStock => Query::low_stock(None),
    };
    Some(query)
}

fn group(caps: &Captures<'_>, name: &str) -> String {
    caps.name(name)
        .map(|m| strip_articles(m.as_str()))
        .unwrap_or_default()
}

/// Drop a leading article so "a smartphone" still matches "Smartphone X"
fn strip_articles(text: &str) -> String {
    let text = text.trim();
    for article in ["a ", "an ", "the ", "some ", "my "] {
        let Some(head) = text.get(..article.len()) else {
            continue;
        };
        if text.len() > article.len() && head.eq_ignore_ascii_case(article) {
            return text[article.len()..].trim().to_string();
        }
    }
    text.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{CustomerId, OrderId};

    fn parse(utterance: &str) -> Query {
        parse_phrase(utterance).unwrap().unwrap()
    }

    #[test]
    fn count_stores_keeps_casing() {
        assert_eq!(
            parse("How many stores are there in Maharashtra?"),
            Query::CountStores {
                state: "Maharashtra".to_string()
            }
        );
    }

    #[test]
    fn branches_in_city() {
        assert_eq!(
            parse("Is there a branch in Pune"),
            Query::BranchAvailability {
                location: "Pune".to_string()
            }
        );
    }

    #[test]
    fn budget_with_keyword() {
        assert_eq!(
            parse("I'm looking for a shirt between 100 to 500"),
            Query::FilterByBudget {
                phrase: "shirt".to_string(),
                low: 100.0,
                high: 500.0
            }
        );
    }

    #[test]
    fn budget_with_currency_and_no_keyword() {
        assert_eq!(
            parse("looking for headphones ₹1,000 to ₹2,500"),
            Query::FilterByBudget {
                phrase: "headphones".to_string(),
                low: 1000.0,
                high: 2500.0
            }
        );
    }

    #[test]
    fn non_numeric_budget_is_invalid() {
        let result = parse_phrase("looking for shirt between cheap to 500").unwrap();
        assert!(matches!(result, Err(ParseError::InvalidArgument(_))));
    }

    #[test]
    fn plain_looking_for() {
        assert_eq!(
            parse("I am looking for Smartphone X"),
            Query::FindProduct {
                phrase: "Smartphone X".to_string()
            }
        );
    }

    #[test]
    fn stock_left() {
        assert_eq!(
            parse("How much stock is left for the Charger?"),
            Query::CheckAvailability {
                phrase: "Charger".to_string()
            }
        );
    }

    #[test]
    fn last_order_date() {
        assert_eq!(
            parse("What is the last order date for Asha Rao"),
            Query::LastOrderDate {
                name: "Asha Rao".to_string()
            }
        );
    }

    #[test]
    fn track_order_variants() {
        let expected = Query::TrackOrder {
            order_id: OrderId(1001),
        };
        assert_eq!(parse("track order 1001"), expected);
        assert_eq!(parse("Where is my order #1001?"), expected);
        assert_eq!(parse("status of order number 1001"), expected);
    }

    #[test]
    fn customer_order_status() {
        assert_eq!(
            parse("order status for customer 3 for the Charger"),
            Query::CustomerOrderStatus {
                customer_id: CustomerId(3),
                product: Some("Charger".to_string())
            }
        );
        assert_eq!(
            parse("order status for customer 3"),
            Query::CustomerOrderStatus {
                customer_id: CustomerId(3),
                product: None
            }
        );
    }

    #[test]
    fn promotions_for_customer() {
        assert_eq!(
            parse("Any promotions for customer 12?"),
            Query::Promotions {
                customer_id: CustomerId(12)
            }
        );
        let result = parse_phrase("promotions for customer abc").unwrap();
        assert!(matches!(result, Err(ParseError::InvalidArgument(_))));
    }

    #[test]
    fn low_stock() {
        assert_eq!(
            parse("show me low stock items"),
            Query::LowStock { threshold: None }
        );
        assert_eq!(parse("Monitor inventory"), Query::LowStock { threshold: None });
    }

    #[test]
    fn low_stock_must_be_the_whole_request() {
        assert!(parse_phrase("find smartphone with low stock").is_none());
        assert!(parse_phrase("is the charger low stock").is_none());
    }

    #[test]
    fn unmatched_returns_none() {
        assert!(parse_phrase("find phones").is_none());
        assert!(parse_phrase("").is_none());
    }
}
