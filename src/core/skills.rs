use std::collections::{BTreeSet, HashSet};

use crate::models::Internship;

/// Canonical form of a skill tag: trimmed and lowercased
#[inline]
pub fn normalize_skill(skill: &str) -> String {
    skill.trim().to_lowercase()
}

/// Set of normalized skill tags
///
/// Matching is exact-string after normalization, so "Python" and "python "
/// are the same skill but "Cloud" and "Cloud Computing" are not.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillSet(HashSet<String>);

impl SkillSet {
    pub fn new<I, S>(skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            skills
                .into_iter()
                .map(|s| normalize_skill(s.as_ref()))
                .filter(|s| !s.is_empty())
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.0.contains(&normalize_skill(skill))
    }

    /// Skills in sorted order
    pub fn sorted(&self) -> Vec<String> {
        let mut skills: Vec<String> = self.0.iter().cloned().collect();
        skills.sort();
        skills
    }
}

/// Outcome of comparing a user's skills against a listing's
#[derive(Debug, Clone, PartialEq)]
pub struct SkillMatch {
    /// Shared skills over the user's skill count, 0 to 1
    pub ratio: f64,
    /// Shared skills, sorted
    pub matched: Vec<String>,
}

impl SkillMatch {
    pub fn has_overlap(&self) -> bool {
        !self.matched.is_empty()
    }
}

/// Compute the skill overlap ratio
///
/// An empty user set yields a ratio of 0 rather than dividing by zero.
pub fn skill_match(user: &SkillSet, candidate: &SkillSet) -> SkillMatch {
    if user.is_empty() {
        return SkillMatch {
            ratio: 0.0,
            matched: Vec::new(),
        };
    }

    let mut matched: Vec<String> = user.0.intersection(&candidate.0).cloned().collect();
    matched.sort();

    SkillMatch {
        ratio: matched.len() as f64 / user.len() as f64,
        matched,
    }
}

/// Sorted, de-duplicated union of every listing's skills
pub fn unique_skills(internships: &[Internship]) -> Vec<String> {
    internships
        .iter()
        .flat_map(|i| i.skills.iter())
        .map(|s| normalize_skill(s))
        .filter(|s| !s.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
