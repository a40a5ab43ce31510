//! Skill gap analysis between a requirement and a candidate

use std::collections::BTreeSet;

/// Required skills the candidate does not have
pub fn missing_skills(candidate: &BTreeSet<String>, required: &BTreeSet<String>) -> BTreeSet<String> {
    required.difference(candidate).cloned().collect()
}

/// Required skills the candidate does have
pub fn matched_skills(candidate: &BTreeSet<String>, required: &BTreeSet<String>) -> BTreeSet<String> {
    required.intersection(candidate).cloned().collect()
}
