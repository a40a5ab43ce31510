//! Resume documents and job requirements

use crate::processing::skill_extractor::SkillExtractor;
use crate::processing::text_processor::TextProcessor;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A resume record with its derived fields computed once at construction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub category: String,
    pub raw_text: String,
    pub normalized_text: String,
    pub skills: BTreeSet<String>,
}

impl Document {
    pub fn analyze(
        id: impl Into<String>,
        category: impl Into<String>,
        raw_text: impl Into<String>,
        processor: &TextProcessor,
        extractor: &SkillExtractor,
    ) -> Self {
        let raw_text = raw_text.into();
        let normalized_text = processor.normalize(&raw_text);
        let skills = extractor.extract(&normalized_text);

        Self {
            id: id.into(),
            category: category.into(),
            raw_text,
            normalized_text,
            skills,
        }
    }

    /// Leading characters of the raw text, with an ellipsis when cut
    pub fn snippet(&self, max_chars: usize) -> String {
        let mut chars = self.raw_text.char_indices();
        match chars.nth(max_chars) {
            Some((cut, _)) => format!("{}...", self.raw_text[..cut].trim_end()),
            None => self.raw_text.clone(),
        }
    }
}

/// A job description to rank the corpus against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRequirement {
    pub title: String,
    pub description: String,
    /// Category label for this role only; overrides the batch-wide filter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl JobRequirement {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            category: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Whitespace-only descriptions are not rankable
    pub fn is_blank(&self) -> bool {
        self.description.trim().is_empty()
    }

    pub fn analyze(&self, processor: &TextProcessor, extractor: &SkillExtractor) -> AnalyzedRequirement {
        let normalized_text = processor.normalize(&self.description);
        let skills = extractor.extract(&normalized_text);
        AnalyzedRequirement {
            title: self.title.clone(),
            normalized_text,
            skills,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzedRequirement {
    pub title: String,
    pub normalized_text: String,
    pub skills: BTreeSet<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_derived_fields() {
        let processor = TextProcessor::new();
        let extractor = SkillExtractor::new().unwrap();
        let doc = Document::analyze(
            "1",
            "ENGINEERING",
            "Experienced Python developer with SQL and AWS skills",
            &processor,
            &extractor,
        );

        assert_eq!(doc.normalized_text, "experienced python developer sql aws skill");
        let expected: BTreeSet<String> = ["aws", "python", "sql"].iter().map(|s| s.to_string()).collect();
        assert_eq!(doc.skills, expected);
    }

    #[test]
    fn test_snippet_truncation() {
        let processor = TextProcessor::new();
        let extractor = SkillExtractor::new().unwrap();
        let doc = Document::analyze("7", "HR", "Recruiter with payroll experience", &processor, &extractor);

        assert_eq!(doc.snippet(9), "Recruiter...");
        assert_eq!(doc.snippet(500), "Recruiter with payroll experience");
    }

    #[test]
    fn test_requirement_skills_include_keras() {
        let processor = TextProcessor::new();
        let extractor = SkillExtractor::new().unwrap();
        let analyzed = JobRequirement::new("ML", "Keras engineer").analyze(&processor, &extractor);

        assert_eq!(analyzed.normalized_text, "keras engineer");
        assert!(analyzed.skills.contains("keras"));
    }

    #[test]
    fn test_blank_requirement() {
        assert!(JobRequirement::new("Role 1", "  \n\t").is_blank());
        assert!(!JobRequirement::new("Role 1", "python").is_blank());
    }
}
