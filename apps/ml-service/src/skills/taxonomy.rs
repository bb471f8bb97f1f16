//! Skill Taxonomy: the static, categorized registry of recognized technology terms.
//!
//! Loaded once and shared by reference. Nothing mutates it after startup.

/// Built-in categories, in the order extraction walks them.
const TECH_SKILLS: &[(&str, &[&str])] = &[
    (
        "programming",
        &["Python", "JavaScript", "Java", "C#", "PHP", "Ruby", "Go", "Rust", "Kotlin"],
    ),
    (
        "frameworks",
        &[
            "Django", "Flask", "FastAPI", "React", "Vue", "Angular", "Laravel", "Spring", "Express",
        ],
    ),
    (
        "databases",
        &[
            "PostgreSQL",
            "MySQL",
            "MongoDB",
            "Redis",
            "Elasticsearch",
            "DynamoDB",
            "Cassandra",
        ],
    ),
    (
        "devops",
        &[
            "Docker",
            "Kubernetes",
            "AWS",
            "GCP",
            "Azure",
            "Jenkins",
            "GitLab CI",
            "GitHub Actions",
        ],
    ),
    (
        "tools",
        &["Git", "Linux", "JIRA", "Figma", "VS Code", "DataDog", "Grafana", "Prometheus"],
    ),
    (
        "concepts",
        &[
            "REST API",
            "GraphQL",
            "Microservices",
            "Machine Learning",
            "Deep Learning",
            "NLP",
        ],
    ),
];

/// The process-wide taxonomy used by the service.
pub static DEFAULT_TAXONOMY: SkillTaxonomy = SkillTaxonomy::new(TECH_SKILLS);

/// Category name → ordered canonical skill names.
#[derive(Debug, Clone, Copy)]
pub struct SkillTaxonomy {
    categories: &'static [(&'static str, &'static [&'static str])],
}

impl SkillTaxonomy {
    pub const fn new(categories: &'static [(&'static str, &'static [&'static str])]) -> Self {
        Self { categories }
    }

    pub fn category_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.categories.iter().map(|(name, _)| *name)
    }

    /// Every canonical skill name, category by category, in declaration order.
    pub fn skills(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.categories
            .iter()
            .flat_map(|(_, skills)| skills.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_taxonomy_has_six_categories() {
        let names: Vec<_> = DEFAULT_TAXONOMY.category_names().collect();
        assert_eq!(
            names,
            vec!["programming", "frameworks", "databases", "devops", "tools", "concepts"]
        );
    }

    #[test]
    fn test_skills_follow_declaration_order() {
        let skills: Vec<_> = DEFAULT_TAXONOMY.skills().collect();
        assert_eq!(skills[0], "Python");
        assert_eq!(skills.last(), Some(&"NLP"));
        let rust = skills.iter().position(|s| *s == "Rust");
        let django = skills.iter().position(|s| *s == "Django");
        assert!(rust < django);
    }

    #[test]
    fn test_skills_count() {
        assert_eq!(DEFAULT_TAXONOMY.skills().count(), 9 + 9 + 7 + 8 + 8 + 6);
    }
}
