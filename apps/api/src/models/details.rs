use serde::{Deserialize, Serialize};

/// Contact fields pulled from resume text. Unfound fields stay `None` / empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedDetails {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub links: Vec<String>,
}
