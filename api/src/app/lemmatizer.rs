//! Dictionary lemmatizer
//!
//! Reduces inflected words to a base form so "orders", "ordering" and
//! "ordered" all hit the `order` keyword. Irregular and verb forms come from
//! a lookup table; plain noun plurals fall back to suffix rules.

use std::collections::HashMap;

/// Irregular forms and verb inflections, as (word, lemma)
const BUILTIN_LEMMAS: &[(&str, &str)] = &[
    ("finding", "find"),
    ("found", "find"),
    ("finds", "find"),
    ("searching", "search"),
    ("searched", "search"),
    ("searches", "search"),
    ("looking", "look"),
    ("looked", "look"),
    ("looks", "look"),
    ("recommending", "recommend"),
    ("recommended", "recommend"),
    ("recommendation", "recommend"),
    ("recommendations", "recommend"),
    ("buying", "buy"),
    ("bought", "buy"),
    ("browsing", "browse"),
    ("shopping", "shop"),
    ("ordering", "order"),
    ("ordered", "order"),
    ("tracking", "track"),
    ("tracked", "track"),
    ("delivered", "delivery"),
    ("deliveries", "delivery"),
    ("shipped", "shipment"),
    ("shipping", "shipment"),
    ("stocked", "stock"),
    ("stocking", "stock"),
    ("promotional", "promotion"),
    ("promos", "promo"),
    ("discounted", "discount"),
    ("offering", "offer"),
    ("restocking", "restock"),
    ("restocked", "restock"),
    ("replenishing", "replenish"),
    ("shortages", "shortage"),
    ("lowest", "low"),
    ("lower", "low"),
    ("children", "child"),
    ("women", "woman"),
    ("men", "man"),
    ("shoes", "shoe"),
    ("clothes", "clothes"),
    ("jeans", "jeans"),
    ("glasses", "glasses"),
    ("news", "news"),
    ("series", "series"),
    ("status", "status"),
];

#[derive(Debug, Clone)]
pub struct Lemmatizer {
    lemmas: HashMap<String, String>,
}

impl Default for Lemmatizer {
    fn default() -> Self {
        Self::from_pairs(BUILTIN_LEMMAS.iter().copied())
    }
}

impl Lemmatizer {
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let lemmas = pairs
            .into_iter()
            .map(|(word, lemma)| (word.to_lowercase(), lemma.to_lowercase()))
            .collect();
        Self { lemmas }
    }

    /// Base form of a lowercase word
    pub fn lemma(&self, word: &str) -> String {
        if let Some(lemma) = self.lemmas.get(word) {
            return lemma.clone();
        }
        singular(word).unwrap_or_else(|| word.to_string())
    }
}

/// Regular noun plurals only. Words ending in "ss", "us" or "is" are left alone.
fn singular(word: &str) -> Option<String> {
    if word.len() <= 3 || !word.chars().all(|c| c.is_alphabetic()) {
        return None;
    }
    if let Some(stem) = word.strip_suffix("ies") {
        return Some(format!("{}y", stem));
    }
    for suffix in ["ches", "shes", "sses", "xes", "zes"] {
        if word.ends_with(suffix) {
            return Some(word[..word.len() - 2].to_string());
        }
    }
    if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
        return None;
    }
    word.strip_suffix('s').map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dictionary_forms() {
        let lemmatizer = Lemmatizer::default();
        assert_eq!(lemmatizer.lemma("looking"), "look");
        assert_eq!(lemmatizer.lemma("tracking"), "track");
        assert_eq!(lemmatizer.lemma("bought"), "buy");
        assert_eq!(lemmatizer.lemma("status"), "status");
    }

    #[test]
    fn regular_plurals() {
        let lemmatizer = Lemmatizer::default();
        assert_eq!(lemmatizer.lemma("phones"), "phone");
        assert_eq!(lemmatizer.lemma("orders"), "order");
        assert_eq!(lemmatizer.lemma("discounts"), "discount");
        assert_eq!(lemmatizer.lemma("batteries"), "battery");
        assert_eq!(lemmatizer.lemma("watches"), "watch");
        assert_eq!(lemmatizer.lemma("boxes"), "box");
    }

    #[test]
    fn leaves_other_words_alone() {
        let lemmatizer = Lemmatizer::default();
        assert_eq!(lemmatizer.lemma("glass"), "glass");
        assert_eq!(lemmatizer.lemma("bus"), "bus");
        assert_eq!(lemmatizer.lemma("gas"), "gas");
        assert_eq!(lemmatizer.lemma("5g"), "5g");
        assert_eq!(lemmatizer.lemma("1001"), "1001");
    }

    #[test]
    fn custom_pairs() {
        let lemmatizer = Lemmatizer::from_pairs([("Mobiles", "phone")]);
        assert_eq!(lemmatizer.lemma("mobiles"), "phone");
    }
}
