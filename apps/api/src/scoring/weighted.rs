//! Weighted skill-declaration scorer: how much of a job's importance-
//! weighted requirements a candidate claims to cover.

use std::collections::HashMap;

use tracing::debug;

use crate::scoring::skill::{normalized_skills, SkillEntry};

/// Scores a candidate's declared skills against a job's weighted
/// requirements.
///
/// The job's importance weight is the only currency: a matching declared
/// skill contributes the job's weight for that name, never the candidate's
/// self-rating. Self-ratings are recorded upstream but have no effect here.
///
/// Zero job requirements scores 0. A zero total weight (only reachable
/// when upstream validation was bypassed) scores 100 rather than dividing
/// by zero.
pub fn weighted_skill_score(job_skills: &[SkillEntry], candidate_skills: &[SkillEntry]) -> u32 {
    let required = normalized_skills(job_skills);
    if required.is_empty() {
        return 0;
    }

    // The denominator counts every requirement occurrence; the lookup map
    // keeps one weight per distinct name, later entries overwriting earlier
    // ones.
    let total_possible: u32 = required.iter().map(|(_, weight)| *weight).sum();
    if total_possible == 0 {
        return 100;
    }

    let mut weight_by_name: HashMap<&str, u32> = HashMap::new();
    for (name, weight) in &required {
        weight_by_name.insert(name.as_str(), *weight);
    }

    let achieved: u32 = candidate_skills
        .iter()
        .filter_map(SkillEntry::normalized_name)
        .filter_map(|name| weight_by_name.get(name.as_str()).copied())
        .sum();

    let score = ((achieved as f64 / total_possible as f64) * 100.0).round() as u32;
    debug!("weighted match: {achieved}/{total_possible} importance covered, score {score}");
    score.min(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(json: &str) -> Vec<SkillEntry> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_empty_job_skills_scores_zero() {
        let candidate = skills(r#"[{"name": "python", "rating": 5}]"#);
        assert_eq!(weighted_skill_score(&[], &candidate), 0);
    }

    #[test]
    fn test_full_coverage_scores_100() {
        let job = skills(r#"[{"name": "python", "rating": 5}]"#);
        let candidate = skills(r#"[{"name": "Python", "rating": 3}]"#);
        assert_eq!(weighted_skill_score(&job, &candidate), 100);
    }

    #[test]
    fn test_self_rating_is_ignored() {
        let job = skills(r#"[{"name": "python", "rating": 5}]"#);
        let low = skills(r#"[{"name": "python", "rating": 1}]"#);
        let high = skills(r#"[{"name": "python", "rating": 5}]"#);
        assert_eq!(weighted_skill_score(&job, &low), 100);
        assert_eq!(
            weighted_skill_score(&job, &low),
            weighted_skill_score(&job, &high)
        );
    }

    #[test]
    fn test_partial_credit_uses_job_weights() {
        let job = skills(r#"[{"name": "a", "rating": 3}, {"name": "b", "rating": 1}]"#);
        let candidate = skills(r#"[{"name": "a"}]"#);
        // achieved 3 of a possible 4
        assert_eq!(weighted_skill_score(&job, &candidate), 75);
    }

    #[test]
    fn test_no_declared_skills_scores_zero() {
        let job = skills(r#"[{"name": "a", "rating": 3}]"#);
        assert_eq!(weighted_skill_score(&job, &[]), 0);
    }

    #[test]
    fn test_missing_importance_defaults_to_one() {
        let job = skills(r#"["a", "b"]"#);
        let candidate = skills(r#"["a"]"#);
        assert_eq!(weighted_skill_score(&job, &candidate), 50);
    }

    #[test]
    fn test_duplicate_requirement_last_write_wins_in_map() {
        // Denominator counts both occurrences (3 + 5 = 8); the lookup map
        // keeps the later weight (5).
        let job = skills(r#"[{"name": "a", "rating": 3}, {"name": "a", "rating": 5}]"#);
        let candidate = skills(r#"["a"]"#);
        // round(100 * 5 / 8) = 63
        assert_eq!(weighted_skill_score(&job, &candidate), 63);
    }

    #[test]
    fn test_duplicate_declared_skills_clamped_to_100() {
        let job = skills(r#"[{"name": "a", "rating": 3}]"#);
        let candidate = skills(r#"["a", "a", "a"]"#);
        assert_eq!(weighted_skill_score(&job, &candidate), 100);
    }

    #[test]
    fn test_zero_total_weight_falls_back_to_100() {
        // Importance 0 bypasses the 1..5 validation upstream; the scorer
        // must not divide by zero.
        let job = skills(r#"[{"name": "a", "rating": 0}]"#);
        let candidate = skills(r#"["b"]"#);
        assert_eq!(weighted_skill_score(&job, &candidate), 100);
    }

    #[test]
    fn test_legacy_job_skill_shape() {
        let job = skills(r#"[{"skillName": "Go", "rating": 4}]"#);
        let candidate = skills(r#"[{"name": "go", "rating": 2}]"#);
        assert_eq!(weighted_skill_score(&job, &candidate), 100);
    }

    #[test]
    fn test_malformed_entries_excluded_everywhere() {
        let job = skills(r#"[{"name": "a", "rating": 2}, null, {}]"#);
        let candidate = skills(r#"[null, "a", 7]"#);
        assert_eq!(weighted_skill_score(&job, &candidate), 100);
    }

    #[test]
    fn test_idempotent_on_identical_inputs() {
        let job = skills(r#"[{"name": "a", "rating": 3}, "b"]"#);
        let candidate = skills(r#"["a"]"#);
        assert_eq!(
            weighted_skill_score(&job, &candidate),
            weighted_skill_score(&job, &candidate)
        );
    }
}
