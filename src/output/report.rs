//! Report structures handed to the formatters

use crate::processing::shortlist::{RoleOutcome, ShortlistOptions, ShortlistWarning};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Shortlists for every role in one batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortlistReport {
    pub generated_at: DateTime<Utc>,
    pub corpus_size: usize,
    pub category_filter: String,
    pub top_n: usize,
    pub roles: Vec<RoleSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleSection {
    pub title: String,
    /// Category filter applied to this role
    pub category: String,
    pub required_skills: Vec<String>,
    pub candidates_considered: usize,
    pub candidates: Vec<CandidateRecord>,
    /// Set when the role produced no ranking
    pub warning: Option<String>,
}

/// Flat, presentation-ready view of one ranked candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub rank: usize,
    pub id: String,
    pub category: String,
    pub score: f64,
    /// Every vocabulary skill found in the resume
    pub candidate_skills: Vec<String>,
    /// Required skills the resume covers
    pub matched_skills: Vec<String>,
    /// Required skills the resume lacks
    pub missing_skills: Vec<String>,
    pub snippet: String,
}

impl ShortlistReport {
    pub fn build(
        outcomes: &[RoleOutcome],
        options: &ShortlistOptions,
        corpus_size: usize,
        snippet_chars: usize,
    ) -> Self {
        let roles = outcomes
            .iter()
            .map(|outcome| RoleSection::from_outcome(outcome, snippet_chars))
            .collect();

        Self {
            generated_at: Utc::now(),
            corpus_size,
            category_filter: options.category.to_string(),
            top_n: options.top_n,
            roles,
        }
    }

    pub fn total_candidates(&self) -> usize {
        self.roles.iter().map(|role| role.candidates.len()).sum()
    }
}

impl RoleSection {
    pub fn from_outcome(outcome: &RoleOutcome, snippet_chars: usize) -> Self {
        match outcome {
            RoleOutcome::Shortlisted(shortlist) => Self {
                title: shortlist.title.clone(),
                category: shortlist.category.to_string(),
                required_skills: shortlist.required_skills.iter().cloned().collect(),
                candidates_considered: shortlist.candidates_considered,
                candidates: shortlist
                    .candidates
                    .iter()
                    .enumerate()
                    .map(|(i, candidate)| CandidateRecord {
                        rank: i + 1,
                        id: candidate.document.id.clone(),
                        category: candidate.document.category.clone(),
                        score: candidate.score,
                        candidate_skills: candidate.document.skills.iter().cloned().collect(),
                        matched_skills: candidate.matched_skills.iter().cloned().collect(),
                        missing_skills: candidate.missing_skills.iter().cloned().collect(),
                        snippet: candidate.document.snippet(snippet_chars),
                    })
                    .collect(),
                warning: None,
            },
            RoleOutcome::Skipped { title, warning } => Self {
                title: title.clone(),
                category: match warning {
                    ShortlistWarning::NoCandidates { category } => category.to_string(),
                },
                required_skills: Vec::new(),
                candidates_considered: 0,
                candidates: Vec::new(),
                warning: Some(warning.to_string()),
            },
        }
    }
}
