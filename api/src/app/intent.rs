//! Intent vocabulary
//!
//! The five fixed intents, their trigger keywords, and the priority order in
//! which they are checked. Keywords are in lemma (base) form.

use serde::Serialize;

/// What the user is asking for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    ProductSearch,
    CheckAvailability,
    OrderStatus,
    Promotions,
    Inventory,
    /// Fallback when no keyword set matches
    GeneralInquiry,
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Intent::ProductSearch => write!(f, "product_search"),
            Intent::CheckAvailability => write!(f, "check_availability"),
            Intent::OrderStatus => write!(f, "order_status"),
            Intent::Promotions => write!(f, "promotions"),
            Intent::Inventory => write!(f, "inventory"),
            Intent::GeneralInquiry => write!(f, "general_inquiry"),
        }
    }
}

impl std::str::FromStr for Intent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "product_search" => Ok(Intent::ProductSearch),
            "check_availability" => Ok(Intent::CheckAvailability),
            "order_status" => Ok(Intent::OrderStatus),
            "promotions" => Ok(Intent::Promotions),
            "inventory" => Ok(Intent::Inventory),
            "general_inquiry" => Ok(Intent::GeneralInquiry),
            _ => Err(format!("Unknown intent: {}", s)),
        }
    }
}

/// An intent and the keywords that trigger it
#[derive(Debug, Clone, Copy)]
pub struct IntentRule {
    pub intent: Intent,
    pub keywords: &'static [&'static str],
}

impl IntentRule {
    pub fn is_keyword(&self, token: &str) -> bool {
        self.keywords.contains(&token)
    }
}

/// Trigger keywords in priority order. The first rule with any matching
/// token wins, so an utterance with "find" and "stock" is a product search.
pub const INTENT_RULES: [IntentRule; 5] = [
    IntentRule {
        intent: Intent::ProductSearch,
        keywords: &["find", "search", "look", "recommend", "buy", "browse", "shop"],
    },
    IntentRule {
        intent: Intent::CheckAvailability,
        keywords: &["available", "availability", "stock", "instock"],
    },
    IntentRule {
        intent: Intent::OrderStatus,
        keywords: &["order", "track", "status", "delivery", "shipment"],
    },
    IntentRule {
        intent: Intent::Promotions,
        keywords: &["promotion", "promo", "discount", "offer", "deal", "coupon", "loyalty"],
    },
    IntentRule {
        intent: Intent::Inventory,
        keywords: &["inventory", "restock", "replenish", "shortage", "low"],
    },
];

/// Generate help text for supported requests
pub fn help_text() -> String {
    r#"# RetailX Assistant

## Products
- `find <product>` / `looking for <product>` - Search products by name
- `looking for <product> between LOW to HIGH` - Search within a budget
- `is <product> available` / `how much stock is left for <product>` - Check stock

## Orders
- `track order N` - Show order N
- `order status for customer N for <product>` - Status of a customer's order

## Customers
- `promotions for customer N` - Loyalty promotions
- `last order date for <name>` - A customer's most recent order date

## Stores
- `how many stores are there in <state>` - Count stores in a state
- `branch in <city>` - List branches in a city

## Inventory
- `low stock` / `monitor inventory` - Products running low

## Help
- `help` - Show this help message
"#
    .to_string()
}
