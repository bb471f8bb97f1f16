//! Axum route handler for the skill demand API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};

use crate::errors::AppError;
use crate::skills::demand::{analyze_skill_demand, SkillDemandRequest, SkillDemandResponse};
use crate::state::AppState;

/// POST /api/skill-demand
///
/// Most requested skills across the submitted job descriptions and which of
/// them the user lacks.
pub async fn handle_skill_demand(
    State(state): State<AppState>,
    payload: Result<Json<SkillDemandRequest>, JsonRejection>,
) -> Result<Json<SkillDemandResponse>, AppError> {
    let Json(request) = payload?;
    Ok(Json(analyze_skill_demand(state.taxonomy, &request)))
}
