//! Skill extraction by whole-phrase keyword matching

use crate::error::{Result, ShortlistError};
use aho_corasick::{AhoCorasick, MatchKind};
use std::collections::BTreeSet;

pub(crate) const TECH_SKILLS: &[&str] = &[
    "python", "java", "c++", "javascript", "html", "css", "sql", "nosql", "mongodb",
    "react", "angular", "vue", "node.js", "express", "django", "flask", "springboot",
    "aws", "azure", "gcp", "docker", "kubernetes", "jenkins", "git", "github",
    "machine learning", "deep learning", "nlp", "data analysis", "pandas", "numpy",
    "scikit-learn", "tensorflow", "pytorch", "keras", "statistics", "mathematics",
    "excel", "power bi", "tableau", "spark", "hadoop", "flutter", "swift", "kotlin",
    "android", "ios", "linux", "bash", "shell scripting",
];

pub(crate) const SOFT_SKILLS: &[&str] = &[
    "communication", "teamwork", "leadership", "problem solving", "critical thinking",
    "time management", "adaptability", "creativity", "attention to detail",
    "project management", "agile", "scrum", "collaboration", "presentation", "negotiation",
];

/// Immutable set of canonical, lowercase skill phrases
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillVocabulary {
    technical: BTreeSet<String>,
    soft: BTreeSet<String>,
}

impl SkillVocabulary {
    pub fn builtin() -> Self {
        Self {
            technical: TECH_SKILLS.iter().map(|s| s.to_string()).collect(),
            soft: SOFT_SKILLS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Built-in vocabulary plus extra technical phrases
    pub fn with_extra<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut vocabulary = Self::builtin();
        for skill in extra {
            let skill = skill.as_ref().trim().to_lowercase();
            if !skill.is_empty() && !vocabulary.soft.contains(&skill) {
                vocabulary.technical.insert(skill);
            }
        }
        vocabulary
    }

    pub fn technical(&self) -> &BTreeSet<String> {
        &self.technical
    }

    pub fn soft(&self) -> &BTreeSet<String> {
        &self.soft
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.technical.contains(skill) || self.soft.contains(skill)
    }

    pub fn len(&self) -> usize {
        self.technical.len() + self.soft.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All phrases, technical first, each group sorted
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.technical.iter().chain(self.soft.iter())
    }
}

/// Finds vocabulary phrases bounded by non-word characters on both sides
pub struct SkillExtractor {
    vocabulary: SkillVocabulary,
    patterns: Vec<String>,
    matcher: AhoCorasick,
}

impl SkillExtractor {
    /// Create an extractor over the built-in vocabulary
    pub fn new() -> Result<Self> {
        Self::from_vocabulary(SkillVocabulary::builtin())
    }

    /// Create an extractor with additional skill phrases
    pub fn with_custom_skills(additional_skills: &[String]) -> Result<Self> {
        Self::from_vocabulary(SkillVocabulary::with_extra(additional_skills))
    }

    pub fn from_vocabulary(vocabulary: SkillVocabulary) -> Result<Self> {
        let patterns: Vec<String> = vocabulary.iter().cloned().collect();

        // Standard semantics keep every occurrence of every phrase visible to
        // the overlapping iterator, so no phrase can shadow another.
        let matcher = AhoCorasick::builder()
            .match_kind(MatchKind::Standard)
            .build(&patterns)
            .map_err(|e| ShortlistError::Processing(format!("Failed to build skill matcher: {}", e)))?;

        Ok(Self {
            vocabulary,
            patterns,
            matcher,
        })
    }

    /// Set of vocabulary skills present in `text`, case-insensitive
    pub fn extract(&self, text: &str) -> BTreeSet<String> {
        let mut found = BTreeSet::new();
        if text.is_empty() {
            return found;
        }

        let lowered = text.to_lowercase();
        for mat in self.matcher.find_overlapping_iter(&lowered) {
            let pattern = &self.patterns[mat.pattern().as_usize()];
            if found.contains(pattern) {
                continue;
            }
            if is_bounded(&lowered, mat.start(), mat.end()) {
                found.insert(pattern.clone());
            }
        }

        found
    }

    pub fn vocabulary(&self) -> &SkillVocabulary {
        &self.vocabulary
    }

    pub fn skill_count(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn is_technical(&self, skill: &str) -> bool {
        self.vocabulary.technical.contains(skill)
    }

    pub fn is_soft(&self, skill: &str) -> bool {
        self.vocabulary.soft.contains(skill)
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_bounded(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
}
