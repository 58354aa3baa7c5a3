//! Keyword intent resolver
//!
//! Normalises an utterance, strips stop words, optionally lemmatizes, then
//! picks the first intent (in priority order) whose keyword set is hit and
//! extracts that intent's parameters from the remaining tokens.

use super::intent::{Intent, IntentRule, INTENT_RULES};
use super::lemmatizer::Lemmatizer;
use super::query::{parse_id, Query};
use crate::error::ParseError;

const STOP_WORDS: &[&str] = &[
    "a", "about", "all", "am", "an", "and", "any", "are", "as", "at", "be", "been", "by", "can",
    "could", "did", "do", "does", "for", "from", "get", "give", "have", "has", "hello", "hey",
    "hi", "how", "i", "if", "in", "is", "it", "its", "let", "me", "my", "of", "on", "or",
    "please", "show", "some", "tell", "that", "the", "there", "this", "to", "want", "was", "we",
    "what", "when", "where", "which", "will", "with", "would", "you", "your",
];

/// Outcome of keyword resolution
#[derive(Debug)]
pub struct Resolution {
    pub intent: Intent,
    /// The resolved query, or why the parameters could not be extracted
    pub query: Result<Query, ParseError>,
}

/// A content word and the form used to match it against keywords
#[derive(Debug, Clone, PartialEq)]
struct Token {
    word: String,
    lemma: String,
}

#[derive(Debug, Clone, Default)]
pub struct IntentResolver {
    lemmatizer: Option<Lemmatizer>,
}

impl IntentResolver {
    pub fn new(lemmatizer: Option<Lemmatizer>) -> Self {
        Self { lemmatizer }
    }

    /// Resolver using the built-in lemma dictionary
    pub fn with_lemmatizer() -> Self {
        Self::new(Some(Lemmatizer::default()))
    }

    pub fn lemmatizes(&self) -> bool {
        self.lemmatizer.is_some()
    }

    /// Resolve an utterance to an intent and query
    pub fn resolve(&self, utterance: &str) -> Resolution {
        let tokens = self.tokens(utterance);
        let Some(rule) = self.classify(&tokens) else {
            let query = Err(ParseError::UnknownCommand(normalize(utterance)));
            return Resolution {
                intent: Intent::GeneralInquiry,
                query,
            };
        };

        tracing::debug!(intent = %rule.intent, ?tokens, "Resolved intent");

        let query = match rule.intent {
            Intent::ProductSearch => Query::find_product(&self.search_phrase(&tokens)),
            Intent::CheckAvailability => Query::check_availability(&self.search_phrase(&tokens)),
            Intent::OrderStatus => first_id(&tokens, "order id").map(|id| Query::TrackOrder {
                order_id: id.into(),
            }),
            Intent::Promotions => first_id(&tokens, "customer id").map(|id| Query::Promotions {
                customer_id: id.into(),
            }),
            Intent::Inventory => Ok(Query::LowStock { threshold: None }),
            Intent::GeneralInquiry => Err(ParseError::UnknownCommand(normalize(utterance))),
        };

        Resolution {
            intent: rule.intent,
            query,
        }
    }

    /// Content tokens: punctuation trimmed, stop words removed. The lemma
    /// is only used for classification.
    fn tokens(&self, utterance: &str) -> Vec<Token> {
        normalize(utterance)
            .split(' ')
            .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric()))
            .filter(|word| !word.is_empty() && !STOP_WORDS.contains(word))
            .map(|word| Token {
                word: word.to_string(),
                lemma: match &self.lemmatizer {
                    Some(lemmatizer) => lemmatizer.lemma(word),
                    None => word.to_string(),
                },
            })
            .collect()
    }

    fn classify(&self, tokens: &[Token]) -> Option<&'static IntentRule> {
        INTENT_RULES
            .iter()
            .find(|rule| tokens.iter().any(|token| self.is_keyword(token, rule)))
    }

    /// Without lemmas, inflected forms are caught by prefix ("orders", "looking")
    fn is_keyword(&self, token: &Token, rule: &IntentRule) -> bool {
        if self.lemmatizer.is_some() {
            rule.is_keyword(&token.lemma)
        } else {
            rule.keywords.iter().any(|kw| token.word.starts_with(kw))
        }
    }

    /// Words left once every intent keyword is removed, as the user typed them
    fn search_phrase(&self, tokens: &[Token]) -> String {
        tokens
            .iter()
            .filter(|token| !INTENT_RULES.iter().any(|rule| self.is_keyword(token, rule)))
            .map(|token| token.word.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Lowercase with whitespace runs collapsed to single spaces
pub fn normalize(utterance: &str) -> String {
    utterance
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// First purely numeric token, parsed as an identifier. Failing that, the
/// first token containing a digit is parsed so a malformed id ("10a1") is
/// reported as invalid rather than missing.
fn first_id(tokens: &[Token], what: &str) -> Result<i64, ParseError> {
    if let Some(token) = tokens
        .iter()
        .find(|t| t.word.chars().all(|c| c.is_ascii_digit()))
    {
        return parse_id(&token.word, what);
    }
    match tokens
        .iter()
        .find(|t| t.word.chars().any(|c| c.is_ascii_digit()))
    {
        Some(token) => parse_id(&token.word, what),
        None => Err(ParseError::MissingArgument(what.to_string())),
    }
}
