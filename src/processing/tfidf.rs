//! TF-IDF vector space and cosine similarity ranking
//!
//! The space is fitted fresh for every call over `[requirement, resumes...]`,
//! so scores are only comparable within one call.

use crate::processing::lexicon::VECTORIZER_STOP_WORDS;
use log::{debug, warn};
use ndarray::Array1;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeMap, HashMap};

pub const DEFAULT_MAX_FEATURES: usize = 5000;

static TERM_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\w\w+\b").expect("Invalid term regex"));

/// One L2-normalized document row; entries are `(term index, weight)` sorted by index
pub type SparseRow = Vec<(usize, f64)>;

/// Fitted vector space for a single corpus
#[derive(Debug, Clone)]
pub struct TfidfMatrix {
    pub vocabulary: Vec<String>,
    pub idf: Array1<f64>,
    pub rows: Vec<SparseRow>,
}

impl TfidfMatrix {
    /// Dense copy of one row
    pub fn dense_row(&self, index: usize) -> Array1<f64> {
        let mut dense = Array1::zeros(self.vocabulary.len());
        for &(term, weight) in &self.rows[index] {
            dense[term] = weight;
        }
        dense
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TfidfVectorizer {
    max_features: usize,
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_FEATURES)
    }
}

impl TfidfVectorizer {
    pub fn new(max_features: usize) -> Self {
        Self {
            max_features: max_features.max(1),
        }
    }

    pub fn max_features(&self) -> usize {
        self.max_features
    }

    /// Terms of two or more word characters, minus vectorizer stopwords
    pub fn analyze(text: &str) -> Vec<String> {
        TERM_PATTERN
            .find_iter(&text.to_lowercase())
            .map(|m| m.as_str().to_string())
            .filter(|term| !VECTORIZER_STOP_WORDS.contains(term.as_str()))
            .collect()
    }

    /// Fit the space and transform every document. `None` when no term survives.
    pub fn fit_transform(&self, documents: &[&str]) -> Option<TfidfMatrix> {
        let tokenized: Vec<Vec<String>> = documents.iter().map(|d| Self::analyze(d)).collect();

        let mut corpus_counts: HashMap<&str, usize> = HashMap::new();
        for tokens in &tokenized {
            for token in tokens {
                *corpus_counts.entry(token.as_str()).or_insert(0) += 1;
            }
        }

        if corpus_counts.is_empty() {
            return None;
        }

        // Most frequent first, alphabetical among equals
        let mut ranked: Vec<(&str, usize)> = corpus_counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(self.max_features);

        let mut vocabulary: Vec<String> = ranked.iter().map(|(t, _)| t.to_string()).collect();
        vocabulary.sort();
        let index: HashMap<&str, usize> = vocabulary
            .iter()
            .enumerate()
            .map(|(i, t)| (t.as_str(), i))
            .collect();

        let term_counts: Vec<BTreeMap<usize, usize>> = tokenized
            .iter()
            .map(|tokens| {
                let mut counts = BTreeMap::new();
                for token in tokens {
                    if let Some(&i) = index.get(token.as_str()) {
                        *counts.entry(i).or_insert(0) += 1;
                    }
                }
                counts
            })
            .collect();

        let mut document_frequency = Array1::<f64>::zeros(vocabulary.len());
        for counts in &term_counts {
            for &term in counts.keys() {
                document_frequency[term] += 1.0;
            }
        }

        let n_documents = documents.len() as f64;
        let idf = document_frequency.mapv(|df| ((1.0 + n_documents) / (1.0 + df)).ln() + 1.0);

        let rows = term_counts
            .iter()
            .map(|counts| {
                let mut row: SparseRow = counts
                    .iter()
                    .map(|(&term, &count)| (term, count as f64 * idf[term]))
                    .collect();
                let norm = row.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
                if norm > 0.0 {
                    for entry in &mut row {
                        entry.1 /= norm;
                    }
                }
                row
            })
            .collect();

        Some(TfidfMatrix {
            vocabulary,
            idf,
            rows,
        })
    }
}

/// Cosine similarity of a dense vector with a sparse row; 0 on zero magnitude
pub fn cosine_similarity(dense: &Array1<f64>, sparse: &[(usize, f64)]) -> f64 {
    let dense_norm = dense.dot(dense).sqrt();
    let sparse_norm = sparse.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
    if dense_norm == 0.0 || sparse_norm == 0.0 {
        return 0.0;
    }

    let dot: f64 = sparse.iter().map(|&(term, weight)| dense[term] * weight).sum();
    (dot / (dense_norm * sparse_norm)).clamp(0.0, 1.0)
}

/// Scores resumes against one requirement in a freshly fitted TF-IDF space
#[derive(Debug, Clone, Copy, Default)]
pub struct SimilarityRanker {
    vectorizer: TfidfVectorizer,
}

impl SimilarityRanker {
    pub fn new(max_features: usize) -> Self {
        Self {
            vectorizer: TfidfVectorizer::new(max_features),
        }
    }

    pub fn max_features(&self) -> usize {
        self.vectorizer.max_features()
    }

    /// One score in [0, 1] per resume, in input order
    pub fn score(&self, resumes: &[&str], requirement: &str) -> Vec<f64> {
        if resumes.is_empty() {
            return Vec::new();
        }

        if requirement.trim().is_empty() {
            debug!("Requirement text is empty after normalization; scoring all resumes 0");
            return vec![0.0; resumes.len()];
        }

        let mut corpus: Vec<&str> = Vec::with_capacity(resumes.len() + 1);
        corpus.push(requirement);
        corpus.extend_from_slice(resumes);

        let matrix = match self.vectorizer.fit_transform(&corpus) {
            Some(matrix) => matrix,
            None => {
                warn!("Empty vocabulary for this corpus; scoring all resumes 0");
                return vec![0.0; resumes.len()];
            }
        };

        debug!(
            "Fitted TF-IDF space: {} documents, {} terms",
            corpus.len(),
            matrix.vocabulary.len()
        );

        let query = matrix.dense_row(0);
        matrix.rows[1..]
            .iter()
            .map(|row| cosine_similarity(&query, row))
            .collect()
    }
}
