//! Recommendation Generator: turns scores and gaps into resume advice.

const MAX_RECOMMENDATIONS: usize = 5;
const ATS_THRESHOLD: u32 = 70;
const SKILLS_MATCH_THRESHOLD: f64 = 50.0;
const MIN_RESUME_SKILLS: usize = 5;
const GAPS_IN_ADVICE: usize = 3;

pub const IMPROVE_STRUCTURE: &str =
    "Improve resume structure and formatting for better ATS compatibility";
pub const EXPAND_SKILLS: &str = "Expand technical skills section to showcase broader expertise";
pub const ADD_ACHIEVEMENTS: &str = "Add quantifiable achievements and metrics to your experience";
pub const INCLUDE_KEYWORDS: &str = "Include industry-specific keywords from job descriptions";

/// Conditional advice first (structure, missing skills, thin skills section),
/// then the two lines every resume gets.
pub fn generate_recommendations(
    ats_score: u32,
    skills_match: f64,
    keyword_gaps: &[String],
    resume_skill_count: usize,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if ats_score < ATS_THRESHOLD {
        recommendations.push(IMPROVE_STRUCTURE.to_string());
    }
    if skills_match < SKILLS_MATCH_THRESHOLD {
        let top_gaps: Vec<&str> = keyword_gaps
            .iter()
            .take(GAPS_IN_ADVICE)
            .map(String::as_str)
            .collect();
        recommendations.push(format!(
            "Add missing in-demand skills: {}",
            top_gaps.join(", ")
        ));
    }
    if resume_skill_count < MIN_RESUME_SKILLS {
        recommendations.push(EXPAND_SKILLS.to_string());
    }

    recommendations.push(ADD_ACHIEVEMENTS.to_string());
    recommendations.push(INCLUDE_KEYWORDS.to_string());

    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}
