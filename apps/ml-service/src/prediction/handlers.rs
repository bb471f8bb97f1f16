//! Axum route handler for the success prediction API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};

use crate::errors::AppError;
use crate::prediction::{predict_success, SuccessPredictionRequest, SuccessPredictionResponse};
use crate::state::AppState;

/// POST /api/predict-success
///
/// Heuristic probability of a positive application outcome, plus a confidence
/// signal that only reflects whether a job description was supplied.
pub async fn handle_predict_success(
    State(state): State<AppState>,
    payload: Result<Json<SuccessPredictionRequest>, JsonRejection>,
) -> Result<Json<SuccessPredictionResponse>, AppError> {
    let Json(request) = payload?;

    let response = predict_success(
        state.taxonomy,
        state.random.as_ref(),
        state.clock.as_ref(),
        &request,
    )?;

    Ok(Json(response))
}
