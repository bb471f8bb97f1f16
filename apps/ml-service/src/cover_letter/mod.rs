//! Cover letter generation.
//!
//! Flow: company info + JD → tone → template assembly with the applicant profile.

pub mod handlers;
pub mod templates;
pub mod tone;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::cover_letter::templates::{generate_cover_letter_content, UserProfile};
use crate::cover_letter::tone::{determine_tone, Tone};

#[derive(Debug, Clone, Deserialize)]
pub struct CoverLetterRequest {
    pub company_name: String,
    pub position_title: String,
    pub user_profile: UserProfile,
    #[serde(default)]
    pub company_info: Option<String>,
    #[serde(default)]
    pub job_description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverLetterResponse {
    pub content: String,
    pub tone: Tone,
}

pub fn generate_cover_letter(request: &CoverLetterRequest) -> CoverLetterResponse {
    let tone = determine_tone(
        request.company_info.as_deref(),
        request.job_description.as_deref(),
    );

    let content = generate_cover_letter_content(
        &request.company_name,
        &request.position_title,
        &request.user_profile,
        tone,
    );

    info!(
        "Cover letter generated: company={}, tone={}, chars={}",
        request.company_name,
        tone,
        content.len()
    );

    CoverLetterResponse { content, tone }
}
