//! Text normalization: lowercase, strip, tokenize, drop stopwords, lemmatize

use crate::processing::lemmatizer::Lemmatizer;
use crate::processing::lexicon::NORMALIZER_STOP_WORDS;
use crate::processing::skill_extractor::SkillVocabulary;
use once_cell::sync::Lazy;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

static NON_ALPHANUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9\s]").expect("Invalid character filter regex"));

/// Produces the normalized token sequence every downstream stage works on
#[derive(Debug, Clone, Default)]
pub struct TextProcessor {
    lemmatizer: Lemmatizer,
}

impl TextProcessor {
    pub fn new() -> Self {
        Self {
            lemmatizer: Lemmatizer::new(),
        }
    }

    /// Processor whose lemmatizer leaves every single-word vocabulary term alone
    pub fn with_vocabulary(vocabulary: &SkillVocabulary) -> Self {
        let words = vocabulary
            .iter()
            .flat_map(|skill| skill.split_whitespace())
            .filter(|word| word.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit()));

        Self {
            lemmatizer: Lemmatizer::with_protected_words(words),
        }
    }

    /// Normalize text into space-joined lemmas. Never fails; junk in, empty out.
    pub fn normalize(&self, text: &str) -> String {
        self.tokenize(text).join(" ")
    }

    /// Missing text (a null cell, for instance) normalizes to an empty string
    pub fn normalize_opt(&self, text: Option<&str>) -> String {
        text.map(|t| self.normalize(t)).unwrap_or_default()
    }

    /// Normalized tokens in input order
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let stripped = NON_ALPHANUMERIC.replace_all(&lowered, "");

        stripped
            .unicode_words()
            .filter(|word| !NORMALIZER_STOP_WORDS.contains(word))
            .map(|word| self.lemmatizer.lemmatize(word))
            .collect()
    }
}
