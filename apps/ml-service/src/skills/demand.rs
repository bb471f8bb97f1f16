//! Skill Demand Analyzer: ranks the skills most requested across a batch of job
//! descriptions and flags the ones the user does not list.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::skills::extractor::extract_skills;
use crate::skills::taxonomy::SkillTaxonomy;

const MAX_DEMANDED_SKILLS: usize = 10;

#[derive(Debug, Clone, Deserialize)]
pub struct SkillDemandRequest {
    pub job_descriptions: Vec<String>,
    #[serde(default)]
    pub user_skills: Option<Vec<String>>,
}

/// A skill and the number of job descriptions that mention it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillDemand {
    pub skill: String,
    pub frequency: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillDemandResponse {
    pub most_demanded_skills: Vec<SkillDemand>,
    pub skill_gaps: Vec<SkillDemand>,
}

/// Counts, for each skill, how many of the supplied descriptions mention it.
///
/// Top 10 by frequency; ties keep taxonomy order.
pub fn analyze_skill_demand(
    taxonomy: &SkillTaxonomy,
    request: &SkillDemandRequest,
) -> SkillDemandResponse {
    let mut counts: Vec<(&'static str, u32)> = taxonomy.skills().map(|s| (s, 0)).collect();

    for description in request.job_descriptions.iter().filter(|d| !d.is_empty()) {
        let found = extract_skills(taxonomy, description);
        for (skill, count) in counts.iter_mut() {
            if found.contains(*skill) {
                *count += 1;
            }
        }
    }

    counts.retain(|(_, count)| *count > 0);
    // Stable sort keeps taxonomy order among equal counts.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(MAX_DEMANDED_SKILLS);

    let user_skills = request.user_skills.as_deref().unwrap_or_default();

    let most_demanded_skills: Vec<SkillDemand> = counts
        .into_iter()
        .map(|(skill, frequency)| SkillDemand {
            skill: skill.to_string(),
            frequency,
        })
        .collect();

    let skill_gaps = most_demanded_skills
        .iter()
        .filter(|d| !user_skills.iter().any(|s| *s == d.skill))
        .cloned()
        .collect::<Vec<_>>();

    debug!(
        descriptions = request.job_descriptions.len(),
        demanded = most_demanded_skills.len(),
        gaps = skill_gaps.len(),
        "Skill demand computed"
    );

    SkillDemandResponse {
        most_demanded_skills,
        skill_gaps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skills::taxonomy::DEFAULT_TAXONOMY;

    fn request(descriptions: &[&str], user_skills: Option<&[&str]>) -> SkillDemandRequest {
        SkillDemandRequest {
            job_descriptions: descriptions.iter().map(|d| d.to_string()).collect(),
            user_skills: user_skills.map(|s| s.iter().map(|s| s.to_string()).collect()),
        }
    }

    #[test]
    fn test_frequency_counts_descriptions_not_mentions() {
        let req = request(&["rust rust rust", "rust and docker"], None);
        let resp = analyze_skill_demand(&DEFAULT_TAXONOMY, &req);
        assert_eq!(
            resp.most_demanded_skills[0],
            SkillDemand {
                skill: "Rust".to_string(),
                frequency: 2
            }
        );
        assert_eq!(resp.most_demanded_skills[1].skill, "Docker");
        assert_eq!(resp.most_demanded_skills[1].frequency, 1);
    }

    #[test]
    fn test_ties_keep_taxonomy_order() {
        let req = request(&["graphql", "redis", "rust"], None);
        let resp = analyze_skill_demand(&DEFAULT_TAXONOMY, &req);
        let names: Vec<_> = resp
            .most_demanded_skills
            .iter()
            .map(|d| d.skill.as_str())
            .collect();
        assert_eq!(names, vec!["Rust", "Redis", "GraphQL"]);
    }

    #[test]
    fn test_top_ten_only() {
        let all = "python javascript php ruby rust kotlin django flask fastapi react vue angular";
        let resp = analyze_skill_demand(&DEFAULT_TAXONOMY, &request(&[all], None));
        assert_eq!(resp.most_demanded_skills.len(), 10);
    }

    #[test]
    fn test_gaps_exclude_user_skills() {
        let req = request(&["rust docker", "docker"], Some(&["Docker"]));
        let resp = analyze_skill_demand(&DEFAULT_TAXONOMY, &req);
        let gaps: Vec<_> = resp.skill_gaps.iter().map(|d| d.skill.as_str()).collect();
        assert_eq!(gaps, vec!["Rust"]);
    }

    #[test]
    fn test_no_descriptions_is_empty_report() {
        let resp = analyze_skill_demand(&DEFAULT_TAXONOMY, &request(&[], Some(&["Rust"])));
        assert!(resp.most_demanded_skills.is_empty());
        assert!(resp.skill_gaps.is_empty());
    }
}
