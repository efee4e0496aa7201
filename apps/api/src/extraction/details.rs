//! Detail Extractor: pulls name, email, phone and links out of resume text.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::details::ExtractedDetails;

/// How many leading non-blank lines are considered when looking for a name.
const NAME_SCAN_LINES: usize = 7;

/// Lines containing any of these are headings or contact rows, never a name.
const NAME_SKIP_MARKERS: &[&str] = &[
    "resume",
    "curriculum",
    "cv",
    "objective",
    "profile",
    "skills",
    "contact",
    "@",
    "http",
    "www.",
];

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(?:\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}")
        .expect("valid email regex")
});

// Optional "+", then at least 10 digits with spaces, hyphens or parentheses between them.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\+?\(?\d(?:[ ()-]*\d){9,}").expect("valid phone regex"));

static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://[^\s,;]+").expect("valid link regex"));

static EMAIL_SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[._]+").expect("valid separator regex"));

/// Extracts contact details from resume text.
///
/// Name priority: explicit `user_name`, then a name-like line near the top of
/// the text, then a guess from the email local part.
pub fn extract_details(text: &str, user_name: Option<&str>) -> ExtractedDetails {
    let email = EMAIL_RE.find(text).map(|m| m.as_str().to_string());
    let phone = PHONE_RE.find(text).map(|m| m.as_str().to_string());
    let links = LINK_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect();

    let name = user_name
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(String::from)
        .or_else(|| name_from_header(text))
        .or_else(|| email.as_deref().and_then(guess_name_from_email));

    ExtractedDetails {
        name,
        email,
        phone,
        links,
    }
}

/// Looks for a short, purely alphabetic line among the first few non-blank lines.
fn name_from_header(text: &str) -> Option<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(NAME_SCAN_LINES)
        .find_map(|line| {
            let lower = line.to_lowercase();
            if NAME_SKIP_MARKERS.iter().any(|marker| lower.contains(marker)) {
                return None;
            }
            if line.chars().filter(|c| c.is_alphabetic()).count() < 3 {
                return None;
            }
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.is_empty() || tokens.len() > 4 || !tokens.iter().all(|t| is_alphabetic(t)) {
                return None;
            }
            Some(
                tokens
                    .iter()
                    .map(|t| capitalize(t))
                    .collect::<Vec<_>>()
                    .join(" "),
            )
        })
}

/// Guesses a display name from an email local part:
/// `jane.doe_22@mail.com` → `Jane Doe`. Returns `None` when no alphabetic token remains.
pub fn guess_name_from_email(email: &str) -> Option<String> {
    let local = email.split('@').next().unwrap_or_default();
    let spaced = EMAIL_SEPARATOR_RE.replace_all(local, " ");
    let parts: Vec<String> = spaced
        .split_whitespace()
        .filter(|p| is_alphabetic(p))
        .map(capitalize)
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}

fn is_alphabetic(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphabetic)
}

/// Uppercases the first character and lowercases the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
    }
}
