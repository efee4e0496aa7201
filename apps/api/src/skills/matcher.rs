//! Skill Matcher: boundary-anchored, case-insensitive keyword detection.
//!
//! Skills are literals, so `c++` and `node.js` are escaped before matching.
//! A skill only counts when it is not glued to another word character on
//! either side: `java` does not match inside `javascript`.

use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

use crate::skills::vocabulary::{ALL_SKILLS, GENERAL_KEYWORDS};

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Compiled patterns for the full skill vocabulary, built once.
pub static VOCABULARY_PATTERNS: LazyLock<SkillPatterns> =
    LazyLock::new(|| SkillPatterns::new(ALL_SKILLS.as_slice()));

/// Compiled patterns for the general keywords used on free-form job descriptions.
pub static GENERAL_PATTERNS: LazyLock<SkillPatterns> =
    LazyLock::new(|| SkillPatterns::new(GENERAL_KEYWORDS));

/// Collapses whitespace runs to single spaces, trims, and lowercases.
pub fn normalize(text: &str) -> String {
    WHITESPACE_RE.replace_all(text, " ").trim().to_lowercase()
}

/// A skill list with one boundary regex per skill, in list order.
/// Blank skills are left out since they can never match.
#[derive(Debug, Clone)]
pub struct SkillPatterns {
    entries: Vec<(String, Regex)>,
}

impl SkillPatterns {
    pub fn new<S: AsRef<str>>(skills: &[S]) -> Self {
        let entries = skills
            .iter()
            .map(|s| s.as_ref())
            .filter_map(|skill| {
                let needle = normalize(skill);
                if needle.is_empty() {
                    return None;
                }
                boundary_pattern(&needle).map(|re| (skill.to_string(), re))
            })
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Skills that occur in `text`, in list order and list casing.
    pub fn find_in(&self, text: &str) -> Vec<String> {
        let haystack = normalize(text);
        self.entries
            .iter()
            .filter(|(_, re)| re.is_match(&haystack))
            .map(|(skill, _)| skill.clone())
            .collect()
    }
}

/// Returns the skills of `skills` that occur in `text`, in the order they were given.
/// Casing of the returned skills follows `skills`.
///
/// Compiles the list on every call; fixed lists go through [`SkillPatterns`].
pub fn match_skills<S: AsRef<str>>(text: &str, skills: &[S]) -> Vec<String> {
    SkillPatterns::new(skills).find_in(text)
}

/// Builds `(?:^|\W)<literal>(?:\W|$)`. The surrounding characters are consumed,
/// which is fine for a membership test.
fn boundary_pattern(literal: &str) -> Option<Regex> {
    let pattern = format!(r"(?:^|[^\w]){}(?:[^\w]|$)", regex::escape(literal));
    match Regex::new(&pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            warn!("Skipping skill {literal:?}: {e}");
            None
        }
    }
}
