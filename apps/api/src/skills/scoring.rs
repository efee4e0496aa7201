//! Score Engine: percentage of required skills present in a resume.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Required skills partitioned into matched / missing, plus the match percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchScore {
    /// 0.0 – 100.0, rounded to two decimals.
    pub score: f64,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

/// Scores `resume_skills` against `required_skills`.
///
/// Comparison is case-insensitive; `matched` and `missing` keep the order and
/// casing of `required_skills`. An empty requirement list scores 0.0.
pub fn compute_match_score<A, B>(resume_skills: &[A], required_skills: &[B]) -> MatchScore
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    let have: HashSet<String> = resume_skills
        .iter()
        .map(|s| s.as_ref().to_lowercase())
        .collect();

    let (matched, missing): (Vec<String>, Vec<String>) = required_skills
        .iter()
        .map(|s| s.as_ref().to_string())
        .partition(|s| have.contains(&s.to_lowercase()));

    let score = if required_skills.is_empty() {
        0.0
    } else {
        round2(100.0 * matched.len() as f64 / required_skills.len() as f64)
    };

    MatchScore {
        score,
        matched,
        missing,
    }
}

/// Rounds to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_match_scores_two_thirds() {
        let result = compute_match_score(&["Python", "SQL"], &["Python", "SQL", "Excel"]);
        assert_eq!(result.matched, vec!["Python", "SQL"]);
        assert_eq!(result.missing, vec!["Excel"]);
        assert_eq!(result.score, 66.67);
    }

    #[test]
    fn test_empty_requirements_score_zero() {
        let result = compute_match_score::<&str, &str>(&["Python"], &[]);
        assert_eq!(result.score, 0.0);
        assert!(result.matched.is_empty());
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_comparison_ignores_case_but_keeps_required_casing() {
        let result = compute_match_score(&["power bi", "excel"], &["Excel", "Power BI", "Tableau"]);
        assert_eq!(result.matched, vec!["Excel", "Power BI"]);
        assert_eq!(result.missing, vec!["Tableau"]);
    }

    #[test]
    fn test_partition_covers_requirements_without_overlap() {
        let required = ["HTML", "CSS", "JavaScript", "React", "Redux", "Figma", "UI Development"];
        let resume = ["css", "react", "figma", "docker"];
        let result = compute_match_score(&resume, &required);

        assert_eq!(result.matched.len() + result.missing.len(), required.len());
        assert!(result.matched.iter().all(|m| !result.missing.contains(m)));
        let expected = round2(100.0 * result.matched.len() as f64 / required.len() as f64);
        assert_eq!(result.score, expected);
        assert_eq!(result.score, 42.86);
    }

    #[test]
    fn test_full_match_is_hundred() {
        let result = compute_match_score(&["Git", "SQL"], &["SQL", "Git"]);
        assert_eq!(result.score, 100.0);
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(66.666_666), 66.67);
        assert_eq!(round2(12.344), 12.34);
        assert_eq!(round2(0.0), 0.0);
    }
}
