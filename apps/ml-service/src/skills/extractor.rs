//! Skill Extractor: scans free text for canonical skill names from a `SkillTaxonomy`.
//!
//! Matching is plain case-insensitive substring containment. There is no word-boundary
//! check, so text mentioning "JavaScript" also yields "Java". Do not tighten it here:
//! scores already returned to callers were computed this way.

use crate::skills::taxonomy::SkillTaxonomy;

/// Set of canonical skill names found in a text.
///
/// Iteration follows taxonomy order, so truncating a set always keeps the same items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillSet {
    skills: Vec<&'static str>,
}

impl SkillSet {
    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| *s == skill)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.skills.iter().copied()
    }

    /// Skills in `self` that are absent from `other`.
    pub fn difference<'a>(&'a self, other: &'a SkillSet) -> impl Iterator<Item = &'static str> + 'a {
        self.iter().filter(move |s| !other.contains(s))
    }

    /// |self ∩ other|
    pub fn intersection_count(&self, other: &SkillSet) -> usize {
        self.iter().filter(|s| other.contains(s)).count()
    }
}

/// Returns every taxonomy skill whose lowercase form occurs in the lowercased `text`.
pub fn extract_skills(taxonomy: &SkillTaxonomy, text: &str) -> SkillSet {
    let text_lower = text.to_lowercase();
    let mut skills: Vec<&'static str> = Vec::new();

    for skill in taxonomy.skills() {
        if text_lower.contains(&skill.to_lowercase()) && !skills.contains(&skill) {
            skills.push(skill);
        }
    }

    SkillSet { skills }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skills::taxonomy::DEFAULT_TAXONOMY;

    #[test]
    fn test_extract_is_case_insensitive() {
        let set = extract_skills(&DEFAULT_TAXONOMY, "built services in PYTHON and docker");
        assert!(set.contains("Python"));
        assert!(set.contains("Docker"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_substring_quirk_is_preserved() {
        // "JavaScript" contains "Java"; both are reported.
        let set = extract_skills(&DEFAULT_TAXONOMY, "Senior JavaScript developer");
        assert!(set.contains("JavaScript"));
        assert!(set.contains("Java"));
    }

    #[test]
    fn test_no_word_boundary_check() {
        // "go" hides inside "good", "git" inside "digital".
        let set = extract_skills(&DEFAULT_TAXONOMY, "good digital habits");
        assert!(set.contains("Go"));
        assert!(set.contains("Git"));
    }

    #[test]
    fn test_empty_text_yields_empty_set() {
        assert!(extract_skills(&DEFAULT_TAXONOMY, "").is_empty());
    }

    #[test]
    fn test_extract_is_idempotent() {
        let text = "Rust, Kubernetes, PostgreSQL and a bit of GraphQL";
        let first = extract_skills(&DEFAULT_TAXONOMY, text);
        let second = extract_skills(&DEFAULT_TAXONOMY, text);
        assert_eq!(first, second);
    }

    #[test]
    fn test_iteration_follows_taxonomy_order() {
        let set = extract_skills(&DEFAULT_TAXONOMY, "graphql redis rust");
        let skills: Vec<_> = set.iter().collect();
        assert_eq!(skills, vec!["Rust", "Redis", "GraphQL"]);
    }

    #[test]
    fn test_custom_taxonomy_is_respected() {
        static CUSTOM: SkillTaxonomy = SkillTaxonomy::new(&[("lang", &["Zig", "zig"])]);
        let set = extract_skills(&CUSTOM, "ZIG all the way");
        // Distinct canonical names, both match case-insensitively.
        assert_eq!(set.len(), 2);
        assert!(!set.contains("Python"));
    }

    #[test]
    fn test_difference_and_intersection() {
        let job = extract_skills(&DEFAULT_TAXONOMY, "rust docker kubernetes");
        let resume = extract_skills(&DEFAULT_TAXONOMY, "rust");
        let missing: Vec<_> = job.difference(&resume).collect();
        assert_eq!(missing, vec!["Docker", "Kubernetes"]);
        assert_eq!(job.intersection_count(&resume), 1);
    }
}
