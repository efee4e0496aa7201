//! Feedback Engine: missing-skill list and a short narrative summary.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Suggested skills per role keyword, used only when the JD yields no skills.
/// First keyword found in the job title wins.
const SUGGESTED_BY_ROLE: &[(&str, &[&str])] = &[
    (
        "data analyst",
        &["sql", "power bi", "tableau", "python", "statistics", "excel"],
    ),
    (
        "data scientist",
        &["python", "pandas", "machine learning", "deep learning", "statistics"],
    ),
    (
        "web developer",
        &["html", "css", "javascript", "react", "node.js"],
    ),
    (
        "software engineer",
        &["java", "git", "algorithms", "system design"],
    ),
];

const GENERIC_SUGGESTIONS: &[&str] = &["communication", "teamwork", "problem solving"];

const IMPROVEMENT_TIPS: [&str; 3] = [
    "Add 2-3 relevant projects with links and quantify results.",
    "Use keywords from the JD in your summary and experience bullets.",
    "Place a concise skills section near the top of the resume.",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub missing_skills: Vec<String>,
    pub summary: String,
}

/// Builds feedback for a candidate.
///
/// With JD skills: `missing_skills` is the lowercase, alphabetically sorted
/// set difference. Without: a role-keyword suggestion list stands in.
/// The summary always ends with the three improvement tips.
pub fn generate_feedback<A, B>(
    resume_skills: &[A],
    jd_skills: &[B],
    candidate_name: Option<&str>,
    job_title: &str,
) -> Feedback
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    let have: BTreeSet<String> = resume_skills
        .iter()
        .map(|s| s.as_ref().to_lowercase())
        .collect();
    let wanted: BTreeSet<String> = jd_skills
        .iter()
        .map(|s| s.as_ref().to_lowercase())
        .collect();

    let name = candidate_name
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or("Candidate");

    let (missing_skills, summary) = if wanted.is_empty() {
        let suggested = suggestions_for_role(job_title);
        let summary = format!(
            "{name}, the JD had no explicit skills. Based on the role '{job_title}', consider adding: {}.",
            titled_list(&suggested)
        );
        (suggested, summary)
    } else {
        let missing: Vec<String> = wanted.difference(&have).cloned().collect();
        let summary = if missing.is_empty() {
            format!("Good job {name}! Your resume covers the required skills for this role.")
        } else {
            format!(
                "{name}, you are missing {} key skill(s) for this role. Consider adding: {}.",
                missing.len(),
                titled_list(&missing)
            )
        };
        (missing, summary)
    };

    Feedback {
        missing_skills,
        summary: format!("{summary} {}", IMPROVEMENT_TIPS.join(" ")),
    }
}

fn suggestions_for_role(job_title: &str) -> Vec<String> {
    let title = job_title.to_lowercase();
    SUGGESTED_BY_ROLE
        .iter()
        .find(|(role, _)| title.contains(role))
        .map(|(_, skills)| *skills)
        .unwrap_or(GENERIC_SUGGESTIONS)
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn titled_list(skills: &[String]) -> String {
    skills
        .iter()
        .map(|s| title_case(s))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Uppercases every letter that follows a non-letter: `node.js` → `Node.Js`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}
