//! Formatting Auditor: flags structural defects in resume text.

const MAX_ISSUES: usize = 3;
const MIN_LINE_BREAKS: usize = 5;
const MAX_WORDS: usize = 1000;

pub const POOR_STRUCTURE: &str = "Resume appears to have poor structure/formatting";
pub const TOO_LONG: &str = "Resume might be too long (consider keeping it to 1-2 pages)";
pub const NO_METRICS: &str = "Consider adding quantifiable metrics and numbers to achievements";

/// Returns up to three issues, in priority order: structure, length, metrics.
///
/// Any Unicode numeric character counts as a metric, so "٣" and "²" do too.
pub fn check_formatting_issues(resume_text: &str) -> Vec<String> {
    let mut issues = Vec::new();

    if resume_text.matches('\n').count() < MIN_LINE_BREAKS {
        issues.push(POOR_STRUCTURE.to_string());
    }
    if resume_text.split_whitespace().count() > MAX_WORDS {
        issues.push(TOO_LONG.to_string());
    }
    if !resume_text.chars().any(char::is_numeric) {
        issues.push(NO_METRICS.to_string());
    }

    issues.truncate(MAX_ISSUES);
    issues
}
