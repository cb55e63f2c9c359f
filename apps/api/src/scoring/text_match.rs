//! Text-match scorer: what fraction of a job's required skills appear
//! verbatim in a resume's extracted text, and which ones.

use serde::Serialize;
use tracing::debug;

use crate::scoring::skill::SkillEntry;

/// Result of matching one resume text against a job's skill list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextMatchOutcome {
    /// Percentage (0-100) of required skills found in the text.
    pub score: u32,
    /// Normalized names of the matched skills, in requirement order.
    /// Duplicate requirements that match are reported once each.
    pub matched_skill_names: Vec<String>,
}

impl TextMatchOutcome {
    /// The degraded result: extraction failed, or nothing was required.
    pub fn zero() -> Self {
        TextMatchOutcome {
            score: 0,
            matched_skill_names: Vec::new(),
        }
    }
}

/// Scores `resume_text` against a job's required skills.
///
/// Matching is a case-insensitive literal substring check, so "java"
/// matches inside "javascript". Existing callers rely on that imprecision;
/// do not tighten it to word boundaries.
///
/// Zero required skills scores 0, not 100.
pub fn score_resume_text(resume_text: &str, job_skills: &[SkillEntry]) -> TextMatchOutcome {
    let required: Vec<String> = job_skills
        .iter()
        .filter_map(SkillEntry::normalized_name)
        .collect();

    if required.is_empty() {
        return TextMatchOutcome::zero();
    }

    let text = resume_text.to_lowercase();
    let matched_skill_names: Vec<String> = required
        .iter()
        .filter(|skill| text.contains(skill.as_str()))
        .cloned()
        .collect();

    let score =
        ((matched_skill_names.len() as f64 / required.len() as f64) * 100.0).round() as u32;
    debug!(
        "text match: {}/{} required skills present, score {score}",
        matched_skill_names.len(),
        required.len()
    );

    TextMatchOutcome {
        score,
        matched_skill_names,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(json: &str) -> Vec<SkillEntry> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_empty_skill_list_scores_zero() {
        let outcome = score_resume_text("ten years of everything", &[]);
        assert_eq!(outcome, TextMatchOutcome::zero());
    }

    #[test]
    fn test_all_skills_present_scores_100() {
        let job = skills(r#"[{"name": "Rust", "rating": 5}, {"name": "SQL", "rating": 2}]"#);
        let outcome = score_resume_text("Built services in Rust backed by SQL databases", &job);
        assert_eq!(outcome.score, 100);
        assert_eq!(outcome.matched_skill_names, vec!["rust", "sql"]);
    }

    #[test]
    fn test_substring_match_inside_longer_word() {
        // "java" inside "javascript" counts. Intentional; do not fix.
        let job = skills(r#"[{"name": "java"}]"#);
        let outcome = score_resume_text("I know javascript", &job);
        assert_eq!(outcome.score, 100);
        assert_eq!(outcome.matched_skill_names, vec!["java"]);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let job = skills(r#"[{"name": "Python"}]"#);
        let outcome = score_resume_text("PYTHON developer", &job);
        assert_eq!(outcome.score, 100);
        assert_eq!(outcome.matched_skill_names, vec!["python"]);
    }

    #[test]
    fn test_partial_match_rounds() {
        let job = skills(r#"["rust", "go", "cobol"]"#);
        let outcome = score_resume_text("rust and go, no mainframes", &job);
        // 2 of 3 -> 66.67 rounds to 67
        assert_eq!(outcome.score, 67);
        assert_eq!(outcome.matched_skill_names, vec!["rust", "go"]);
    }

    #[test]
    fn test_no_match_scores_zero_with_empty_list() {
        let job = skills(r#"["haskell"]"#);
        let outcome = score_resume_text("java developer", &job);
        assert_eq!(outcome.score, 0);
        assert!(outcome.matched_skill_names.is_empty());
    }

    #[test]
    fn test_legacy_skill_shape_matches() {
        let job = skills(r#"[{"skillName": "Go"}]"#);
        let outcome = score_resume_text("golang enthusiast", &job);
        assert_eq!(outcome.score, 100);
        assert_eq!(outcome.matched_skill_names, vec!["go"]);
    }

    #[test]
    fn test_malformed_entries_do_not_count_toward_denominator() {
        let job = skills(r#"["rust", null, {}, ""]"#);
        let outcome = score_resume_text("rust all day", &job);
        assert_eq!(outcome.score, 100);
        assert_eq!(outcome.matched_skill_names, vec!["rust"]);
    }

    #[test]
    fn test_duplicate_requirements_each_count() {
        let job = skills(r#"["rust", "rust", "go"]"#);
        let outcome = score_resume_text("rust only", &job);
        // Both rust occurrences match, go does not: 2 of 3.
        assert_eq!(outcome.score, 67);
        assert_eq!(outcome.matched_skill_names, vec!["rust", "rust"]);
    }

    #[test]
    fn test_empty_resume_text_scores_zero() {
        let job = skills(r#"["rust"]"#);
        let outcome = score_resume_text("", &job);
        assert_eq!(outcome.score, 0);
    }

    #[test]
    fn test_idempotent_on_identical_inputs() {
        let job = skills(r#"["rust", "go"]"#);
        let first = score_resume_text("rust shop", &job);
        let second = score_resume_text("rust shop", &job);
        assert_eq!(first, second);
    }
}
