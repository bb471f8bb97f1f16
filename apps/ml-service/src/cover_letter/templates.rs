//! Cover letter assembly: tone-specific opening and closing around a fixed body.
//!
//! Profile fields are inserted verbatim. Nothing is escaped, so a caller that
//! renders `content` as markup must escape it there.

use serde::{Deserialize, Serialize};

use crate::cover_letter::tone::Tone;

const DEFAULT_ROLE: &str = "technology";
const DEFAULT_SKILL: &str = "software development";
const DEFAULT_NAME: &str = "Your Name";
const SKILLS_IN_LETTER: usize = 3;

/// Applicant fields used by the letter. Every key is optional; JSON `null`
/// counts as absent and unknown keys are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
}

fn opening(tone: Tone, company_name: &str, position_title: &str) -> String {
    match tone {
        Tone::Formal => format!(
            "Dear Hiring Manager at {company_name},\n\n\
             I am writing to express my strong interest in the {position_title} position."
        ),
        Tone::Professional => format!(
            "Dear {company_name} Team,\n\n\
             I am excited to apply for the {position_title} role and bring my experience to your organization."
        ),
        Tone::Casual => format!(
            "Hi {company_name} Team,\n\n\
             I'm really interested in the {position_title} position and think I'd be a great fit."
        ),
    }
}

// Trailing spaces before the hard line breaks are part of the template.
fn body(role: &str, skills: &str, company_name: &str) -> String {
    format!(
        "\n\nWith my background in {role} and expertise in {skills}, \n\
         I am confident I can make a significant contribution to your team. \
         Throughout my career, I have demonstrated \n\
         a strong ability to deliver results and collaborate effectively with cross-functional teams.\n\
         \n\
         I am particularly drawn to this opportunity because of {company_name}'s reputation \
         for innovation and excellence. \n\
         I am eager to bring my skills and passion to contribute to your organization's continued success.\n"
    )
}

fn closing(tone: Tone) -> &'static str {
    match tone {
        Tone::Formal => {
            "\nThank you for considering my application. I look forward to discussing how I can contribute to your organization.\n\nSincerely,"
        }
        Tone::Professional => {
            "\nThank you for considering my application. I would welcome the opportunity to discuss how I can add value to your team.\n\nBest regards,"
        }
        Tone::Casual => {
            "\nThanks for reading my application! I'd love to chat more about how I can help the team.\n\nCheers,"
        }
    }
}

/// Opening + body + closing + signature.
pub fn generate_cover_letter_content(
    company_name: &str,
    position_title: &str,
    profile: &UserProfile,
    tone: Tone,
) -> String {
    let role = profile.role.as_deref().unwrap_or(DEFAULT_ROLE);
    let skills = match &profile.skills {
        Some(skills) => skills
            .iter()
            .take(SKILLS_IN_LETTER)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        None => DEFAULT_SKILL.to_string(),
    };
    let name = profile.name.as_deref().unwrap_or(DEFAULT_NAME);

    format!(
        "{}{}{}\n{}",
        opening(tone, company_name, position_title),
        body(role, &skills, company_name),
        closing(tone),
        name
    )
}
