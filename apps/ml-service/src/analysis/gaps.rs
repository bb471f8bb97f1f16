//! Gap & Match Analyzer: overlap between resume skills and job-description skills.

use crate::skills::extractor::SkillSet;

const MAX_KEYWORD_GAPS: usize = 5;

/// Match percentage reported when the job description yields no skills.
pub const DEFAULT_MATCH_PERCENTAGE: f64 = 75.0;

#[derive(Debug, Clone, PartialEq)]
pub struct GapReport {
    pub keyword_gaps: Vec<String>,
    /// Unrounded; truncated to an integer at the response boundary.
    pub skills_match: f64,
}

pub fn analyze_gaps(resume_skills: &SkillSet, job_skills: &SkillSet) -> GapReport {
    let keyword_gaps = job_skills
        .difference(resume_skills)
        .take(MAX_KEYWORD_GAPS)
        .map(str::to_string)
        .collect();

    let skills_match = if job_skills.is_empty() {
        DEFAULT_MATCH_PERCENTAGE
    } else {
        resume_skills.intersection_count(job_skills) as f64 / job_skills.len() as f64 * 100.0
    };

    GapReport {
        keyword_gaps,
        skills_match,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skills::extractor::extract_skills;
    use crate::skills::taxonomy::DEFAULT_TAXONOMY;

    fn skills(text: &str) -> SkillSet {
        extract_skills(&DEFAULT_TAXONOMY, text)
    }

    #[test]
    fn test_empty_job_skills_defaults_to_75() {
        let report = analyze_gaps(&skills("rust"), &SkillSet::default());
        assert_eq!(report.skills_match, 75.0);
        assert!(report.keyword_gaps.is_empty());
    }

    #[test]
    fn test_gaps_are_job_minus_resume() {
        let resume = skills("rust docker");
        let job = skills("rust docker kubernetes redis");
        let report = analyze_gaps(&resume, &job);
        assert_eq!(report.keyword_gaps, vec!["Redis", "Kubernetes"]);
        assert_eq!(report.skills_match, 50.0);
        for gap in &report.keyword_gaps {
            assert!(job.contains(gap));
            assert!(!resume.contains(gap));
        }
    }

    #[test]
    fn test_gaps_truncated_to_five() {
        let job = skills("python php ruby rust kotlin django flask");
        let report = analyze_gaps(&SkillSet::default(), &job);
        assert_eq!(report.keyword_gaps.len(), 5);
        assert_eq!(report.skills_match, 0.0);
    }

    #[test]
    fn test_full_overlap() {
        let set = skills("graphql aws");
        let report = analyze_gaps(&set, &set);
        assert!(report.keyword_gaps.is_empty());
        assert_eq!(report.skills_match, 100.0);
    }

    #[test]
    fn test_fractional_match_is_kept_unrounded() {
        let resume = skills("rust");
        let job = skills("rust docker kubernetes");
        let report = analyze_gaps(&resume, &job);
        assert!((report.skills_match - 100.0 / 3.0).abs() < 1e-9);
    }
}
