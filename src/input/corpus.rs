//! Resume corpus loading from a CSV table

use crate::config::CorpusConfig;
use crate::error::{Result, ShortlistError};
use crate::processing::document::Document;
use crate::processing::skill_extractor::SkillExtractor;
use crate::processing::text_processor::TextProcessor;
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

/// One raw corpus row. `text` is `None` when the row has no cell for it.
#[derive(Debug, Clone, PartialEq)]
pub struct CorpusRecord {
    pub id: String,
    pub category: String,
    pub text: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CorpusLoader {
    id_column: String,
    category_column: String,
    text_column: String,
    show_progress: bool,
}

impl Default for CorpusLoader {
    fn default() -> Self {
        Self {
            id_column: "ID".to_string(),
            category_column: "Category".to_string(),
            text_column: "Resume_str".to_string(),
            show_progress: false,
        }
    }
}

impl CorpusLoader {
    pub fn from_config(config: &CorpusConfig) -> Self {
        Self {
            id_column: config.id_column.clone(),
            category_column: config.category_column.clone(),
            text_column: config.text_column.clone(),
            show_progress: false,
        }
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Read raw records; a missing file is fatal
    pub fn read_records(&self, path: &Path) -> Result<Vec<CorpusRecord>> {
        if !path.exists() {
            return Err(ShortlistError::CorpusNotFound(path.to_path_buf()));
        }
        info!("Loading corpus from {}", path.display());
        let file = std::fs::File::open(path)?;
        self.read_from(file)
    }

    pub fn read_from<R: Read>(&self, reader: R) -> Result<Vec<CorpusRecord>> {
        let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let column = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| ShortlistError::InvalidCorpus(format!("'{}' column not found in dataset", name)))
        };
        let id_idx = column(&self.id_column)?;
        let category_idx = column(&self.category_column)?;
        let text_idx = column(&self.text_column)?;

        let mut records = Vec::new();
        for row in csv_reader.records() {
            let row = row?;
            records.push(CorpusRecord {
                id: row.get(id_idx).unwrap_or_default().trim().to_string(),
                category: row.get(category_idx).unwrap_or_default().trim().to_string(),
                text: row.get(text_idx).map(str::to_string),
            });
        }

        info!("Loaded {} resumes", records.len());
        Ok(records)
    }

    /// Normalize and extract skills for every record, once
    pub fn build_corpus(
        &self,
        records: Vec<CorpusRecord>,
        processor: &TextProcessor,
        extractor: &SkillExtractor,
    ) -> Vec<Document> {
        let progress = if self.show_progress {
            let bar = ProgressBar::new(records.len() as u64);
            if let Ok(style) = ProgressStyle::with_template("{spinner} Preprocessing resumes [{bar:40}] {pos}/{len}") {
                bar.set_style(style);
            }
            bar
        } else {
            ProgressBar::hidden()
        };

        let mut missing_text = 0usize;
        let documents: Vec<Document> = records
            .into_iter()
            .map(|record| {
                if record.text.is_none() {
                    missing_text += 1;
                }
                let raw_text = record.text.unwrap_or_default();
                let doc = Document::analyze(record.id, record.category, raw_text, processor, extractor);
                progress.inc(1);
                doc
            })
            .collect();
        progress.finish_and_clear();

        if missing_text > 0 {
            warn!("{} record(s) had no resume text", missing_text);
        }
        documents
    }

    pub fn load(&self, path: &Path, processor: &TextProcessor, extractor: &SkillExtractor) -> Result<Vec<Document>> {
        let records = self.read_records(path)?;
        Ok(self.build_corpus(records, processor, extractor))
    }
}

/// Document count per category label, sorted by label
pub fn category_counts(documents: &[Document]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for doc in documents {
        *counts.entry(doc.category.clone()).or_insert(0) += 1;
    }
    counts
}
