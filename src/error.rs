//! Error handling for the candidate shortlister

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShortlistError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Dataset not found: {}", .0.display())]
    CorpusNotFound(PathBuf),

    #[error("Invalid corpus: {0}")]
    InvalidCorpus(String),

    #[error("Processing error: {0}")]
    Processing(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, ShortlistError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for ShortlistError {
    fn from(err: anyhow::Error) -> Self {
        ShortlistError::Processing(err.to_string())
    }
}

impl From<toml::de::Error> for ShortlistError {
    fn from(err: toml::de::Error) -> Self {
        ShortlistError::Configuration(format!("Failed to parse config: {}", err))
    }
}

impl From<toml::ser::Error> for ShortlistError {
    fn from(err: toml::ser::Error) -> Self {
        ShortlistError::Configuration(format!("Failed to serialize config: {}", err))
    }
}
