//! Tone classification: picks the register of a cover letter from company and JD text.
//!
//! Casual keywords win over formal ones when both appear.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Register of a cover letter. Serialized lowercase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Formal,
    #[default]
    Professional,
    Casual,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Formal => "formal",
            Tone::Professional => "professional",
            Tone::Casual => "casual",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const CASUAL_KEYWORDS: &[&str] = &["startup", "innovation", "creative", "young"];
const FORMAL_KEYWORDS: &[&str] = &["enterprise", "corporate", "finance", "law"];

/// Classifies `company_info` followed directly by `job_description`.
///
/// The two texts are joined without a separator, so a keyword can straddle them.
pub fn determine_tone(company_info: Option<&str>, job_description: Option<&str>) -> Tone {
    let combined = format!(
        "{}{}",
        company_info.unwrap_or_default(),
        job_description.unwrap_or_default()
    )
    .to_lowercase();

    if CASUAL_KEYWORDS.iter().any(|k| combined.contains(k)) {
        Tone::Casual
    } else if FORMAL_KEYWORDS.iter().any(|k| combined.contains(k)) {
        Tone::Formal
    } else {
        Tone::Professional
    }
}
