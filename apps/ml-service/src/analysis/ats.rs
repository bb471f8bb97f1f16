//! ATS Scorer: rule-based structural score emulating applicant tracking systems.
//!
//! Starts at 100, applies each rule's adjustment once, clamps to 0–100.

const BASE_SCORE: i32 = 100;
const MIN_LENGTH_CHARS: usize = 100;
const MIN_LINE_BREAKS: usize = 10;

/// Section keywords a parser expects to find, with the penalty for a missing one.
const REQUIRED_SECTIONS: &[(&str, i32)] = &[
    ("contact", 10),
    ("email", 10),
    ("skills", 10),
    ("education", 10),
];

/// Either word satisfies the work-history check.
const WORK_HISTORY_KEYWORDS: &[&str] = &["experience", "work"];
const WORK_HISTORY_PENALTY: i32 = 15;

const STRUCTURE_BONUS_KEYWORDS: &[&str] = &["summary", "professional"];
const STRUCTURE_BONUS: i32 = 5;

/// Scores lowercased resume text. Deterministic.
pub fn calculate_ats_score(resume_text: &str) -> u32 {
    let mut score = BASE_SCORE;

    if resume_text.chars().count() < MIN_LENGTH_CHARS {
        score -= 20;
    }
    if resume_text.matches('\n').count() < MIN_LINE_BREAKS {
        score -= 15;
    }

    for (keyword, penalty) in REQUIRED_SECTIONS {
        if !resume_text.contains(keyword) {
            score -= penalty;
        }
    }

    if !WORK_HISTORY_KEYWORDS.iter().any(|k| resume_text.contains(k)) {
        score -= WORK_HISTORY_PENALTY;
    }

    if STRUCTURE_BONUS_KEYWORDS.iter().any(|k| resume_text.contains(k)) {
        score += STRUCTURE_BONUS;
    }

    score.clamp(0, 100) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_resume() -> String {
        let mut text = String::from(
            "contact: jane doe\nemail: jane@example.com\nexperience\nacme corp, 2019-2024\n",
        );
        text.push_str("skills\nrust, go, postgres\neducation\nbsc computer science\n");
        text.push_str("references available on request\nline\nline\nline\n");
        text
    }

    #[test]
    fn test_complete_resume_scores_100() {
        let text = complete_resume();
        assert!(text.len() >= 100);
        assert!(text.matches('\n').count() >= 10);
        assert_eq!(calculate_ats_score(&text), 100);
    }

    #[test]
    fn test_bonus_clamps_at_100() {
        let text = format!("professional summary\n{}", complete_resume());
        assert_eq!(calculate_ats_score(&text), 100);
    }

    #[test]
    fn test_short_text_loses_everything_but_clamps() {
        // -20 length, -15 breaks, -10 x4 sections, -15 work history = 10
        assert_eq!(calculate_ats_score("short"), 10);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(calculate_ats_score(""), 10);
    }

    #[test]
    fn test_work_satisfies_history_check() {
        let with_work = calculate_ats_score("work");
        let without = calculate_ats_score("none");
        assert_eq!(with_work, without + 15);
    }

    #[test]
    fn test_bonus_applies_below_cap() {
        assert_eq!(calculate_ats_score("summary"), 15);
    }

    #[test]
    fn test_missing_single_section() {
        let text = complete_resume().replace("email", "mail");
        assert_eq!(calculate_ats_score(&text), 90);
    }

    #[test]
    fn test_score_always_in_range() {
        for text in ["", "x", "contact email skills education work summary", "\n\n\n"] {
            let score = calculate_ats_score(text);
            assert!(score <= 100);
        }
    }
}
