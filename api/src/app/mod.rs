//! Application layer
//!
//! Turns utterances into queries (keyword and phrase front ends), runs them
//! against the data store and formats the result.

pub mod assistant_service;
pub mod intent;
pub mod intent_resolver;
pub mod lemmatizer;
pub mod lookup_service;
pub mod phrase_parser;
pub mod query;
pub mod response;
pub mod session;

pub use assistant_service::{error_response, AssistantService, FrontEnd, DIDNT_UNDERSTAND};
pub use intent::{help_text, Intent, INTENT_RULES};
pub use intent_resolver::{IntentResolver, Resolution};
pub use lemmatizer::Lemmatizer;
pub use lookup_service::{LookupResult, Records, LOYALTY_THRESHOLD};
pub use phrase_parser::parse_phrase;
pub use query::Query;
pub use response::{Payload, Response, ResponseKind};
pub use session::{load_all, DatasetReport, LoadedData, Session};
