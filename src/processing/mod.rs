//! Text normalization, skill extraction, similarity ranking and shortlisting

pub mod document;
pub mod gap_analyzer;
pub mod lemmatizer;
pub mod lexicon;
pub mod shortlist;
pub mod skill_extractor;
pub mod text_processor;
pub mod tfidf;
