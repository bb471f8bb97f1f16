//! Application success prediction.
//!
//! Flow: job text → resume match + market demand (skill extraction) →
//!       company response (random source) → timing (clock) → weighted sum.

pub mod estimator;
pub mod handlers;
pub mod sources;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::prediction::estimator::{
    calculate_market_demand_score, calculate_resume_match_score, calculate_timing_score,
    confidence_score, get_company_response_score, round2, PredictionWeights, SubScores,
};
use crate::prediction::sources::{Clock, RandomSource};
use crate::skills::taxonomy::SkillTaxonomy;

#[derive(Debug, Clone, Deserialize)]
pub struct SuccessPredictionRequest {
    pub job_description: String,
    #[serde(default)]
    pub user_skills: Option<Vec<String>>,
    pub company_name: String,
    /// Used as the job text when `job_description` is empty.
    #[serde(default)]
    pub position_title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuccessPredictionResponse {
    pub success_probability: f64,
    pub confidence_score: f64,
}

/// Estimates the probability that an application gets a positive outcome.
///
/// Fails only if the random source does.
pub fn predict_success(
    taxonomy: &SkillTaxonomy,
    random: &dyn RandomSource,
    clock: &dyn Clock,
    request: &SuccessPredictionRequest,
) -> Result<SuccessPredictionResponse> {
    let job_text = if request.job_description.is_empty() {
        request.position_title.as_deref().unwrap_or_default()
    } else {
        request.job_description.as_str()
    };
    let user_skills = request.user_skills.as_deref().unwrap_or_default();

    let sub_scores = SubScores {
        resume_match: calculate_resume_match_score(taxonomy, job_text, user_skills),
        market_demand: calculate_market_demand_score(taxonomy, job_text),
        company_response: get_company_response_score(&request.company_name, random)?,
        timing: calculate_timing_score(clock),
    };

    let success_probability = round2(sub_scores.weighted(&PredictionWeights::default()));
    let confidence = round2(confidence_score(&request.job_description));

    debug!(?sub_scores, success_probability, "Success predicted");

    Ok(SuccessPredictionResponse {
        success_probability,
        confidence_score: confidence,
    })
}
