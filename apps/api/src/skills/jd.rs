//! Skills required by a free-form job description.

use crate::skills::matcher::GENERAL_PATTERNS;

/// Role keyword → skills, used when the JD text mentions no known keyword.
const ROLE_KEYWORD_SKILLS: &[(&str, &[&str])] = &[
    ("data analyst", &["sql", "excel", "power bi", "tableau", "python"]),
    ("data scientist", &["python", "pandas", "machine learning", "statistics"]),
    ("web developer", &["html", "css", "javascript", "react", "node.js"]),
    ("backend", &["python", "django", "flask", "node.js"]),
    ("frontend", &["html", "css", "javascript", "react"]),
    ("cloud", &["aws", "azure"]),
];

/// Detects general keywords in `jd_text` plus the job title. Falls back to the
/// role keyword table when nothing is found; may return an empty list.
pub fn extract_job_skills(jd_text: &str, job_title: &str) -> Vec<String> {
    let found = GENERAL_PATTERNS.find_in(&format!("{jd_text} {job_title}"));
    if !found.is_empty() || job_title.trim().is_empty() {
        return found;
    }

    let title = job_title.to_lowercase();
    ROLE_KEYWORD_SKILLS
        .iter()
        .find(|(keyword, _)| title.contains(keyword))
        .map(|(_, skills)| skills.iter().map(|s| s.to_string()).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_from_jd_text_in_vocabulary_order() {
        let skills = extract_job_skills(
            "Must know React, Node.js and AWS. SQL is a plus.",
            "Engineer",
        );
        assert_eq!(skills, vec!["sql", "react", "node.js", "aws"]);
    }

    #[test]
    fn test_title_contributes_keywords() {
        let skills = extract_job_skills("Join our growing team.", "Python Developer");
        assert_eq!(skills, vec!["python"]);
    }

    #[test]
    fn test_role_fallback_when_no_keywords() {
        let skills = extract_job_skills("Own the cloud platform roadmap.", "Cloud Architect");
        assert_eq!(skills, vec!["aws", "azure"]);
    }

    #[test]
    fn test_no_keywords_no_role_is_empty() {
        assert!(extract_job_skills("Be kind.", "Barista").is_empty());
        assert!(extract_job_skills("Be kind.", "").is_empty());
    }
}
