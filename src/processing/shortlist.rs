//! Shortlisting engine: filter, rank, select and gap-analyze per requirement

use crate::error::Result;
use crate::processing::document::{Document, JobRequirement};
use crate::processing::gap_analyzer::{matched_skills, missing_skills};
use crate::processing::skill_extractor::SkillExtractor;
use crate::processing::text_processor::TextProcessor;
use crate::processing::tfidf::{SimilarityRanker, DEFAULT_MAX_FEATURES};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryFilter {
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn from_option(category: Option<&str>) -> Self {
        match category {
            Some(label) => CategoryFilter::Only(label.to_string()),
            None => CategoryFilter::All,
        }
    }

    pub fn accepts(&self, document: &Document) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(label) => document.category == *label,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "All"),
            CategoryFilter::Only(label) => write!(f, "{}", label),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortlistOptions {
    pub category: CategoryFilter,
    pub top_n: usize,
}

impl Default for ShortlistOptions {
    fn default() -> Self {
        Self {
            category: CategoryFilter::All,
            top_n: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCandidate {
    pub document: Document,
    pub score: f64,
    pub matched_skills: BTreeSet<String>,
    pub missing_skills: BTreeSet<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleShortlist {
    pub title: String,
    pub category: CategoryFilter,
    pub required_skills: BTreeSet<String>,
    pub candidates_considered: usize,
    pub candidates: Vec<RankedCandidate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShortlistWarning {
    NoCandidates { category: CategoryFilter },
}

impl fmt::Display for ShortlistWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShortlistWarning::NoCandidates { category } => {
                write!(f, "No candidates found in category: {}", category)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RoleOutcome {
    Shortlisted(RoleShortlist),
    Skipped { title: String, warning: ShortlistWarning },
}

impl RoleOutcome {
    pub fn title(&self) -> &str {
        match self {
            RoleOutcome::Shortlisted(shortlist) => &shortlist.title,
            RoleOutcome::Skipped { title, .. } => title,
        }
    }
}

/// Read-only corpus plus the shared normalizer and extractor. Cheap to clone.
#[derive(Clone)]
pub struct ShortlistEngine {
    text_processor: Arc<TextProcessor>,
    skill_extractor: Arc<SkillExtractor>,
    ranker: SimilarityRanker,
    corpus: Arc<Vec<Document>>,
}

impl ShortlistEngine {
    pub fn new(
        text_processor: Arc<TextProcessor>,
        skill_extractor: Arc<SkillExtractor>,
        corpus: Vec<Document>,
    ) -> Self {
        Self {
            text_processor,
            skill_extractor,
            ranker: SimilarityRanker::new(DEFAULT_MAX_FEATURES),
            corpus: Arc::new(corpus),
        }
    }

    pub fn with_max_features(mut self, max_features: usize) -> Self {
        self.ranker = SimilarityRanker::new(max_features);
        self
    }

    pub fn corpus(&self) -> &[Document] {
        &self.corpus
    }

    pub fn text_processor(&self) -> &TextProcessor {
        &self.text_processor
    }

    pub fn skill_extractor(&self) -> &SkillExtractor {
        &self.skill_extractor
    }

    /// Rank the corpus against one requirement. The requirement's own
    /// category, when set, replaces `options.category`.
    pub fn shortlist(&self, requirement: &JobRequirement, options: &ShortlistOptions) -> RoleOutcome {
        let category = match &requirement.category {
            Some(label) => CategoryFilter::Only(label.clone()),
            None => options.category.clone(),
        };
        let filtered: Vec<&Document> = self
            .corpus
            .iter()
            .filter(|doc| category.accepts(doc))
            .collect();

        if filtered.is_empty() {
            let warning = ShortlistWarning::NoCandidates { category };
            warn!("{}: {}", requirement.title, warning);
            return RoleOutcome::Skipped {
                title: requirement.title.clone(),
                warning,
            };
        }

        let analyzed = requirement.analyze(&self.text_processor, &self.skill_extractor);
        debug!(
            "{}: required skills [{}]",
            analyzed.title,
            analyzed.skills.iter().cloned().collect::<Vec<_>>().join(", ")
        );

        let texts: Vec<&str> = filtered.iter().map(|doc| doc.normalized_text.as_str()).collect();
        let scores = self.ranker.score(&texts, &analyzed.normalized_text);

        let mut scored: Vec<(&Document, f64)> = filtered.iter().copied().zip(scores).collect();
        // Stable: equal scores keep corpus order
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(options.top_n);

        let candidates = scored
            .into_iter()
            .map(|(doc, score)| RankedCandidate {
                document: doc.clone(),
                score,
                matched_skills: matched_skills(&doc.skills, &analyzed.skills),
                missing_skills: missing_skills(&doc.skills, &analyzed.skills),
            })
            .collect();

        RoleOutcome::Shortlisted(RoleShortlist {
            title: analyzed.title,
            category,
            required_skills: analyzed.skills,
            candidates_considered: filtered.len(),
            candidates,
        })
    }

    /// Process a batch in input order; blank requirements produce no outcome
    pub fn shortlist_batch(
        &self,
        requirements: &[JobRequirement],
        options: &ShortlistOptions,
    ) -> Vec<RoleOutcome> {
        let valid = Self::valid_requirements(requirements);
        info!("Shortlisting {} role(s) against {} documents", valid.len(), self.corpus.len());

        valid
            .into_iter()
            .map(|requirement| self.shortlist(requirement, options))
            .collect()
    }

    /// Same as `shortlist_batch`, with each requirement ranked on a blocking worker
    pub async fn shortlist_batch_concurrent(
        &self,
        requirements: &[JobRequirement],
        options: &ShortlistOptions,
    ) -> Result<Vec<RoleOutcome>> {
        let valid = Self::valid_requirements(requirements);
        info!(
            "Shortlisting {} role(s) concurrently against {} documents",
            valid.len(),
            self.corpus.len()
        );

        let handles: Vec<_> = valid
            .into_iter()
            .map(|requirement| {
                let engine = self.clone();
                let requirement = requirement.clone();
                let options = options.clone();
                tokio::task::spawn_blocking(move || engine.shortlist(&requirement, &options))
            })
            .collect();

        let mut outcomes = Vec::with_capacity(handles.len());
        for handle in handles {
            let outcome = handle
                .await
                .map_err(|e| anyhow::anyhow!("shortlist worker failed: {}", e))?;
            outcomes.push(outcome);
        }
        Ok(outcomes)
    }

    fn valid_requirements(requirements: &[JobRequirement]) -> Vec<&JobRequirement> {
        requirements
            .iter()
            .filter(|requirement| {
                if requirement.is_blank() {
                    warn!("Skipping '{}': job description is empty", requirement.title);
                    false
                } else {
                    true
                }
            })
            .collect()
    }
}
