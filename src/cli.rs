//! CLI interface for the candidate shortlister

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "candidate-shortlister")]
#[command(about = "Shortlist resumes for one or more job descriptions")]
#[command(long_about = "Rank a resume corpus against job descriptions with TF-IDF cosine similarity and report the skills each candidate is missing")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank candidates for one or more roles
    Rank {
        /// Resume corpus CSV (defaults to corpus.path from the config)
        #[arg(long)]
        corpus: Option<PathBuf>,

        /// Job description file (TXT, MD, PDF); repeat for several roles
        #[arg(short, long)]
        job: Vec<PathBuf>,

        /// Inline job description; repeat for several roles
        #[arg(short, long)]
        text: Vec<String>,

        /// TOML file with [[roles]] entries (title, description)
        #[arg(long)]
        roles: Option<PathBuf>,

        /// Only rank resumes in this category
        #[arg(long)]
        category: Option<String>,

        /// Candidates per role
        #[arg(short = 'n', long)]
        top: Option<usize>,

        /// Vocabulary cap for the TF-IDF space
        #[arg(long)]
        max_features: Option<usize>,

        /// Output format: console, json, markdown, csv
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Include resume snippets
        #[arg(short, long)]
        detailed: bool,

        /// Rank roles concurrently
        #[arg(long)]
        parallel: bool,
    },

    /// List corpus categories with document counts
    Categories {
        /// Resume corpus CSV (defaults to corpus.path from the config)
        #[arg(long)]
        corpus: Option<PathBuf>,
    },

    /// Show the skill vocabulary
    Skills,

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Print the configuration file location
    Path,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        "csv" => Ok(OutputFormat::Csv),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown, csv",
            format
        )),
    }
}

/// Validate a positive count argument
pub fn validate_positive(name: &str, value: usize) -> Result<usize, String> {
    if value == 0 {
        Err(format!("{} must be a positive integer", name))
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("CSV"), Ok(OutputFormat::Csv));
        assert_eq!(parse_output_format("md"), Ok(OutputFormat::Markdown));
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_rank_arguments() {
        let cli = Cli::try_parse_from([
            "candidate-shortlister",
            "rank",
            "--text",
            "Python developer",
            "--text",
            "Designer",
            "-n",
            "5",
            "--category",
            "INFORMATION-TECHNOLOGY",
        ])
        .unwrap();

        match cli.command {
            Commands::Rank { text, top, category, .. } => {
                assert_eq!(text.len(), 2);
                assert_eq!(top, Some(5));
                assert_eq!(category.as_deref(), Some("INFORMATION-TECHNOLOGY"));
            }
            _ => panic!("expected rank command"),
        }
    }

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive("top", 0).is_err());
        assert_eq!(validate_positive("top", 3), Ok(3));
    }
}
