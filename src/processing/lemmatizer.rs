//! Dictionary-assisted noun lemmatizer
//!
//! Tokens are treated as nouns. Irregular forms and invariant words are looked
//! up first; everything else goes through WordNet-style plural substitutions.

use crate::processing::lexicon::{INVARIANT_NOUNS, IRREGULAR_NOUNS};
use std::collections::HashSet;

#[derive(Debug, Clone, Default)]
pub struct Lemmatizer {
    protected: HashSet<String>,
}

impl Lemmatizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lemmatizer that also returns each of `words` unchanged
    pub fn with_protected_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            protected: words
                .into_iter()
                .map(|word| word.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Reduce a lowercase token to its base (singular noun) form
    pub fn lemmatize(&self, token: &str) -> String {
        if self.protected.contains(token) {
            return token.to_string();
        }

        if let Some(lemma) = IRREGULAR_NOUNS.get(token) {
            return (*lemma).to_string();
        }

        if token.len() <= 3
            || !token.bytes().all(|b| b.is_ascii_lowercase())
            || INVARIANT_NOUNS.contains(token)
        {
            return token.to_string();
        }

        if let Some(stem) = token.strip_suffix("ies") {
            if stem.len() >= 2 {
                return format!("{}y", stem);
            }
        }

        for suffix in ["sses", "ches", "shes", "xes", "zzes"] {
            if token.ends_with(suffix) {
                return token[..token.len() - 2].to_string();
            }
        }

        if token.ends_with("ss") || token.ends_with("us") || token.ends_with("is") {
            return token.to_string();
        }

        match token.strip_suffix('s') {
            Some(stem) => stem.to_string(),
            None => token.to_string(),
        }
    }
}
