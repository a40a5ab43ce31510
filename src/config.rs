//! Configuration management for the candidate shortlister

use crate::error::{Result, ShortlistError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub corpus: CorpusConfig,
    pub ranking: RankingConfig,
    #[serde(default)]
    pub skills: SkillsConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusConfig {
    pub path: PathBuf,
    pub id_column: String,
    pub category_column: String,
    pub text_column: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingConfig {
    pub top_n: usize,
    pub max_features: usize,
    /// Category label to restrict candidates to; empty means all categories
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub parallel: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillsConfig {
    /// Extra canonical skill phrases appended to the built-in vocabulary
    #[serde(default)]
    pub extra: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub snippet_chars: usize,
    pub color_output: bool,
    pub detailed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
    Csv,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            corpus: CorpusConfig {
                path: PathBuf::from("Resume").join("Resume.csv"),
                id_column: "ID".to_string(),
                category_column: "Category".to_string(),
                text_column: "Resume_str".to_string(),
            },
            ranking: RankingConfig {
                top_n: 10,
                max_features: 5000,
                category: String::new(),
                parallel: false,
            },
            skills: SkillsConfig::default(),
            output: OutputConfig {
                format: OutputFormat::Console,
                snippet_chars: 500,
                color_output: true,
                detailed: false,
            },
        }
    }
}

impl Config {
    /// Load from the default location, writing defaults there on first use
    pub fn load() -> Result<Self> {
        Self::load_or_init(&Self::config_path())
    }

    /// Load from an explicit path, writing defaults there if it does not exist
    pub fn load_or_init(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = toml::from_str(&content)?;
            config.validate()?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(config_path)?;
            Ok(config)
        }
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("candidate-shortlister")
            .join("config.toml")
    }

    pub fn validate(&self) -> Result<()> {
        if self.ranking.top_n == 0 {
            return Err(ShortlistError::Configuration(
                "ranking.top_n must be a positive integer".to_string(),
            ));
        }
        if self.ranking.max_features == 0 {
            return Err(ShortlistError::Configuration(
                "ranking.max_features must be a positive integer".to_string(),
            ));
        }
        if self.output.snippet_chars == 0 {
            return Err(ShortlistError::Configuration(
                "output.snippet_chars must be a positive integer".to_string(),
            ));
        }
        Ok(())
    }

    /// Configured category filter, `None` when every category is allowed
    pub fn category_filter(&self) -> Option<&str> {
        let category = self.ranking.category.trim();
        if category.is_empty() {
            None
        } else {
            Some(category)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_first_load_writes_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load_or_init(&path).unwrap();

        assert_eq!(config, Config::default());
        assert!(path.exists());
    }

    #[test]
    fn test_round_trip_keeps_overrides() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.ranking.top_n = 3;
        config.ranking.category = "INFORMATION-TECHNOLOGY".to_string();
        config.skills.extra = vec!["rust".to_string()];
        config.save_to(&path).unwrap();

        let loaded = Config::load_or_init(&path).unwrap();
        assert_eq!(loaded.ranking.top_n, 3);
        assert_eq!(loaded.category_filter(), Some("INFORMATION-TECHNOLOGY"));
        assert_eq!(loaded.skills.extra, vec!["rust".to_string()]);
    }

    #[test]
    fn test_zero_top_n_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.ranking.top_n = 0;
        config.save_to(&path).unwrap();

        let result = Config::load_or_init(&path);
        assert!(matches!(result, Err(ShortlistError::Configuration(_))));
    }

    #[test]
    fn test_blank_category_means_no_filter() {
        let mut config = Config::default();
        config.ranking.category = "   ".to_string();
        assert_eq!(config.category_filter(), None);
    }
}
