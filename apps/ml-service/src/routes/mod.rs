pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers::handle_analyze_resume;
use crate::cover_letter::handlers::handle_generate_cover_letter;
use crate::prediction::handlers::handle_predict_success;
use crate::skills::handlers::handle_skill_demand;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::service_info_handler))
        .route("/health", get(health::health_handler))
        .route("/api/analyze-resume", post(handle_analyze_resume))
        .route("/api/predict-success", post(handle_predict_success))
        .route(
            "/api/generate-cover-letter",
            post(handle_generate_cover_letter),
        )
        .route("/api/skill-demand", post(handle_skill_demand))
        .with_state(state)
}
