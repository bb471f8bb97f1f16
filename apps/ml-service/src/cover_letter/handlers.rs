//! Axum route handler for the cover letter API.

use axum::{extract::rejection::JsonRejection, Json};

use crate::cover_letter::{generate_cover_letter, CoverLetterRequest, CoverLetterResponse};
use crate::errors::AppError;

/// POST /api/generate-cover-letter
pub async fn handle_generate_cover_letter(
    payload: Result<Json<CoverLetterRequest>, JsonRejection>,
) -> Result<Json<CoverLetterResponse>, AppError> {
    let Json(request) = payload?;
    Ok(Json(generate_cover_letter(&request)))
}
