//! Resume analysis pipeline.
//!
//! Flow: lowercase → ATS score → skill extraction (resume + JD) → gap/match →
//!       formatting audit → recommendations.

pub mod ats;
pub mod formatting;
pub mod gaps;
pub mod handlers;
pub mod recommendations;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::ats::calculate_ats_score;
use crate::analysis::formatting::check_formatting_issues;
use crate::analysis::gaps::analyze_gaps;
use crate::analysis::recommendations::generate_recommendations;
use crate::skills::extractor::{extract_skills, SkillSet};
use crate::skills::taxonomy::SkillTaxonomy;

#[derive(Debug, Clone, Deserialize)]
pub struct ResumeAnalysisRequest {
    pub resume_text: String,
    #[serde(default)]
    pub job_description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeAnalysisResponse {
    pub ats_score: u32,
    pub keyword_gaps: Vec<String>,
    pub skills_match_percentage: u32,
    pub formatting_issues: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Scores a resume for ATS compatibility and, when a job description is given,
/// for skill overlap with it.
pub fn analyze_resume(
    taxonomy: &SkillTaxonomy,
    request: &ResumeAnalysisRequest,
) -> ResumeAnalysisResponse {
    let resume_text = request.resume_text.to_lowercase();

    let ats_score = calculate_ats_score(&resume_text);
    let resume_skills = extract_skills(taxonomy, &resume_text);

    let job_skills = match request.job_description.as_deref() {
        Some(jd) if !jd.is_empty() => extract_skills(taxonomy, jd),
        _ => SkillSet::default(),
    };

    let gap_report = analyze_gaps(&resume_skills, &job_skills);
    let formatting_issues = check_formatting_issues(&resume_text);
    let recommendations = generate_recommendations(
        ats_score,
        gap_report.skills_match,
        &gap_report.keyword_gaps,
        resume_skills.len(),
    );

    // Truncation, not rounding: 66.67 reports as 66.
    let skills_match_percentage = (gap_report.skills_match as u32).min(100);

    info!(
        "Resume analyzed: ats_score={}, resume_skills={}, job_skills={}, match={}%",
        ats_score,
        resume_skills.len(),
        job_skills.len(),
        skills_match_percentage
    );

    ResumeAnalysisResponse {
        ats_score,
        keyword_gaps: gap_report.keyword_gaps,
        skills_match_percentage,
        formatting_issues,
        recommendations,
    }
}
