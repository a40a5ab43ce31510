//! Batches of roles read from a TOML file

use crate::error::{Result, ShortlistError};
use crate::processing::document::JobRequirement;
use serde::Deserialize;
use std::path::Path;

/// Used when the caller supplies no job description at all
pub const DEFAULT_JOB_DESCRIPTION: &str = "We are looking for a skilled Data Scientist with experience in Python, Machine Learning, and SQL. \
Knowledge of AWS and Deep Learning frameworks like TensorFlow or PyTorch is a plus. \
The candidate should have strong communication skills and be a team player.";

#[derive(Debug, Deserialize)]
struct RoleEntry {
    title: Option<String>,
    #[serde(default)]
    description: String,
    category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RoleBatch {
    #[serde(default)]
    roles: Vec<RoleEntry>,
}

impl RoleBatch {
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| ShortlistError::InvalidInput(format!("Failed to parse roles file: {}", e)))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ShortlistError::InvalidInput(format!(
                "Roles file does not exist: {}",
                path.display()
            )));
        }
        Self::parse(&std::fs::read_to_string(path)?)
    }

    /// Requirements in file order; untitled roles are numbered from `first_index`
    pub fn into_requirements(self, first_index: usize) -> Vec<JobRequirement> {
        self.roles
            .into_iter()
            .enumerate()
            .map(|(i, role)| {
                let title = role
                    .title
                    .filter(|t| !t.trim().is_empty())
                    .unwrap_or_else(|| format!("Role {}", first_index + i));
                let requirement = JobRequirement::new(title, role.description);
                match role.category.filter(|c| !c.trim().is_empty()) {
                    Some(category) => requirement.with_category(category.trim()),
                    None => requirement,
                }
            })
            .collect()
    }
}

pub fn default_requirement() -> JobRequirement {
    JobRequirement::new("Data Scientist", DEFAULT_JOB_DESCRIPTION)
}
