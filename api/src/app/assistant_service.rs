//! Assistant service
//!
//! Glues the front ends to the lookups: utterance → query → lookup →
//! formatted response. Never fails; every parse problem becomes a message.

use serde::Deserialize;

use super::intent::help_text;
use super::intent_resolver::{normalize, IntentResolver};
use super::lookup_service::{self as lookups, invalid_format, LookupResult};
use super::phrase_parser::parse_phrase;
use super::query::Query;
use super::response::Response;
use crate::config::Config;
use crate::domain::DataStore;
use crate::error::ParseError;

pub const DIDNT_UNDERSTAND: &str =
    "Sorry, I didn't understand that. Type 'help' to see what I can do.";

/// Which front end turns utterances into queries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrontEnd {
    /// Keyword sets, in priority order
    Keyword,
    /// Fixed trigger phrases
    Phrase,
    /// Trigger phrases first, keywords when no phrase matches
    #[default]
    Auto,
}

impl std::fmt::Display for FrontEnd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FrontEnd::Keyword => write!(f, "keyword"),
            FrontEnd::Phrase => write!(f, "phrase"),
            FrontEnd::Auto => write!(f, "auto"),
        }
    }
}

impl std::str::FromStr for FrontEnd {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "keyword" | "keywords" => Ok(FrontEnd::Keyword),
            "phrase" | "phrases" => Ok(FrontEnd::Phrase),
            "auto" => Ok(FrontEnd::Auto),
            _ => Err(format!("Unknown front end: {}", s)),
        }
    }
}

pub struct AssistantService {
    store: DataStore,
    resolver: IntentResolver,
    front_end: FrontEnd,
    low_stock_threshold: u32,
}

impl AssistantService {
    pub fn new(
        store: DataStore,
        resolver: IntentResolver,
        front_end: FrontEnd,
        low_stock_threshold: u32,
    ) -> Self {
        Self {
            store,
            resolver,
            front_end,
            low_stock_threshold,
        }
    }

    pub fn from_config(store: DataStore, config: &Config) -> Self {
        let resolver = if config.lemmatize {
            IntentResolver::with_lemmatizer()
        } else {
            IntentResolver::new(None)
        };
        Self::new(store, resolver, config.front_end, config.low_stock_threshold)
    }

    pub fn store(&self) -> &DataStore {
        &self.store
    }

    pub fn front_end(&self) -> FrontEnd {
        self.front_end
    }

    pub fn resolver(&self) -> &IntentResolver {
        &self.resolver
    }

    /// Answer an utterance with the configured front end
    pub fn answer(&self, utterance: &str) -> Response {
        self.answer_with(utterance, self.front_end)
    }

    pub fn answer_with(&self, utterance: &str, front_end: FrontEnd) -> Response {
        if is_help(utterance) {
            return Response::message(help_text());
        }

        let query = match front_end {
            FrontEnd::Keyword => self.resolver.resolve(utterance).query,
            FrontEnd::Phrase => parse_phrase(utterance)
                .unwrap_or_else(|| Err(ParseError::UnknownCommand(normalize(utterance)))),
            FrontEnd::Auto => {
                parse_phrase(utterance).unwrap_or_else(|| self.resolver.resolve(utterance).query)
            }
        };

        self.submit(query)
    }

    /// Run a query built from explicit parameters, or report why it could not be built
    pub fn submit(&self, query: Result<Query, ParseError>) -> Response {
        match query {
            Ok(query) => self.execute(&query),
            Err(err) => error_response(&err),
        }
    }

    pub fn execute(&self, query: &Query) -> Response {
        tracing::debug!(?query, "Executing lookup");
        let store = &self.store;
        let result: LookupResult = match query {
            Query::FindProduct { phrase } => lookups::find_product(store, phrase),
            Query::CheckAvailability { phrase } => lookups::check_availability(store, phrase),
            Query::FilterByBudget { phrase, low, high } => {
                lookups::filter_by_budget(store, phrase, *low, *high)
            }
            Query::TrackOrder { order_id } => lookups::track_order(store, *order_id),
            Query::CustomerOrderStatus {
                customer_id,
                product,
            } => lookups::customer_order_status(store, *customer_id, product.as_deref()),
            Query::Promotions { customer_id } => {
                lookups::personalized_promotions(store, *customer_id)
            }
            Query::CountStores { state } => lookups::count_stores_in(store, state),
            Query::BranchAvailability { location } => {
                lookups::check_branch_availability(store, location)
            }
            Query::LastOrderDate { name } => lookups::last_order_date(store, name),
            Query::LowStock { threshold } => {
                lookups::monitor_inventory(store, threshold.unwrap_or(self.low_stock_threshold))
            }
        };
        Response::from(result)
    }
}

fn is_help(utterance: &str) -> bool {
    let text = normalize(utterance);
    utterance.trim() == "?"
        || matches!(
            text.trim_end_matches(&['?', '!', '.'][..]),
            "help" | "commands"
        )
}

/// User-facing message for a parse failure
pub fn error_response(err: &ParseError) -> Response {
    match err {
        ParseError::UnknownCommand(_) => Response::message(DIDNT_UNDERSTAND),
        ParseError::MissingArgument(what) => {
            Response::message(format!("Please provide the {}.", what))
        }
        ParseError::InvalidArgument(detail) => Response::message(invalid_format(detail)),
        ParseError::InvalidNumber(e) => {
            Response::message(invalid_format(&format!("number out of range ({})", e)))
        }
    }
}
