//! Success Estimator: weighted combination of four heuristic sub-scores.
//!
//! Each sub-score is on a 0–100 scale. The weighted sum is divided by 100 and
//! rounded to two decimals. It is not clamped afterwards: with the current
//! weights and perturbation range it cannot leave [0.31, 0.88] anyway.

use anyhow::Result;
use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::prediction::sources::{Clock, RandomSource};
use crate::skills::extractor::extract_skills;
use crate::skills::taxonomy::SkillTaxonomy;

const SENIORITY_KEYWORDS: &[&str] = &["senior", "lead", "principal", "architect"];

/// Large employers receive more applications, so each one is less likely to get a reply.
const HIGH_VOLUME_EMPLOYERS: &[&str] = &["google", "amazon", "microsoft", "apple", "meta", "tesla"];

const COMPANY_BASE_SCORE: f64 = 60.0;
const HIGH_VOLUME_PENALTY: f64 = 15.0;
/// Perturbation is drawn from `[PERTURBATION_LOW, PERTURBATION_HIGH)`.
const PERTURBATION_LOW: i32 = -10;
const PERTURBATION_HIGH: i32 = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionWeights {
    pub resume_match: f64,
    pub market_demand: f64,
    pub company_response: f64,
    pub timing: f64,
}

impl Default for PredictionWeights {
    fn default() -> Self {
        Self {
            resume_match: 0.35,
            market_demand: 0.20,
            company_response: 0.25,
            timing: 0.20,
        }
    }
}

/// The four 0–100 inputs to the weighted sum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubScores {
    pub resume_match: f64,
    pub market_demand: f64,
    pub company_response: f64,
    pub timing: f64,
}

impl SubScores {
    pub fn weighted(&self, weights: &PredictionWeights) -> f64 {
        (self.resume_match * weights.resume_match
            + self.market_demand * weights.market_demand
            + self.company_response * weights.company_response
            + self.timing * weights.timing)
            / 100.0
    }
}

/// How well the user's skills cover the skills the job text asks for.
///
/// 50 without skills or job text, 60 when the job text names no known skill.
/// Skills compare by exact canonical name.
pub fn calculate_resume_match_score(
    taxonomy: &SkillTaxonomy,
    job_text: &str,
    user_skills: &[String],
) -> f64 {
    if user_skills.is_empty() || job_text.is_empty() {
        return 50.0;
    }

    let job_skills = extract_skills(taxonomy, job_text);
    if job_skills.is_empty() {
        return 60.0;
    }

    let matched = job_skills
        .iter()
        .filter(|skill| user_skills.iter().any(|u| u == skill))
        .count();

    (matched as f64 / job_skills.len() as f64 * 100.0).min(100.0)
}

/// More named skills and a senior title both signal a role in demand.
pub fn calculate_market_demand_score(taxonomy: &SkillTaxonomy, job_text: &str) -> f64 {
    let skills = extract_skills(taxonomy, job_text);
    let mut boost = (skills.len() as f64 * 10.0).min(40.0);

    let job_lower = job_text.to_lowercase();
    if SENIORITY_KEYWORDS.iter().any(|k| job_lower.contains(k)) {
        boost += 20.0;
    }

    (50.0 + boost).min(100.0)
}

/// Simulated employer responsiveness. The only non-deterministic sub-score.
pub fn get_company_response_score(company_name: &str, random: &dyn RandomSource) -> Result<f64> {
    let company_lower = company_name.to_lowercase();
    let mut score = COMPANY_BASE_SCORE;

    if HIGH_VOLUME_EMPLOYERS
        .iter()
        .any(|c| company_lower.contains(c))
    {
        score -= HIGH_VOLUME_PENALTY;
    }

    let perturbation = random.int_in_range(PERTURBATION_LOW, PERTURBATION_HIGH)?;
    Ok(score + f64::from(perturbation))
}

/// Weekday applications do better than weekend ones.
pub fn calculate_timing_score(clock: &dyn Clock) -> f64 {
    if clock.today().weekday().num_days_from_monday() < 5 {
        75.0
    } else {
        65.0
    }
}

pub fn confidence_score(job_description: &str) -> f64 {
    if job_description.is_empty() {
        0.65
    } else {
        0.85
    }
}

/// Rounds the stored value itself to two decimals, ties to even. A weighted sum
/// such as 0.585 is held as 0.58499..., so it rounds down to 0.58.
pub fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}
