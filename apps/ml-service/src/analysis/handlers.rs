//! Axum route handler for the resume analysis API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};

use crate::analysis::{analyze_resume, ResumeAnalysisRequest, ResumeAnalysisResponse};
use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/analyze-resume
///
/// ATS score, keyword gaps against an optional job description, formatting
/// issues and recommendations.
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    payload: Result<Json<ResumeAnalysisRequest>, JsonRejection>,
) -> Result<Json<ResumeAnalysisResponse>, AppError> {
    let Json(request) = payload?;
    Ok(Json(analyze_resume(state.taxonomy, &request)))
}
