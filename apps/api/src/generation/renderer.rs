//! Document renderer seam. Turns resume fields into downloadable bytes.
//!
//! `AppState` holds an `Arc<dyn TemplateRenderer>`; the default renders UTF-8
//! plain text so the service has no office-format dependency.

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Fields a rendered resume document is built from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplateInputs {
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub links: Vec<String>,
    pub job_title: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub summary: String,
}

pub trait TemplateRenderer: Send + Sync {
    fn render(&self, inputs: &TemplateInputs) -> Result<Vec<u8>>;

    /// MIME type of the rendered bytes.
    fn content_type(&self) -> &'static str;
}

pub struct PlainTextRenderer;

impl TemplateRenderer for PlainTextRenderer {
    fn render(&self, inputs: &TemplateInputs) -> Result<Vec<u8>> {
        let name = inputs
            .name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or("Candidate Name");

        let mut out = format!("{name}\n\n");
        if let Some(email) = inputs.email.as_deref().filter(|e| !e.is_empty()) {
            out.push_str(&format!("Email: {email}\n"));
        }
        if !inputs.links.is_empty() {
            out.push_str("Links:\n");
            for link in &inputs.links {
                out.push_str(&format!("- {link}\n"));
            }
        }

        out.push_str("\nProfessional Summary\n");
        if inputs.summary.trim().is_empty() {
            out.push_str(&format!("Applying for {}\n", inputs.job_title));
        } else {
            out.push_str(inputs.summary.trim_end());
            out.push('\n');
        }

        out.push_str("\nSkills\n");
        for skill in &inputs.skills {
            out.push_str(&format!("- {skill}\n"));
        }

        Ok(out.into_bytes())
    }

    fn content_type(&self) -> &'static str {
        "text/plain; charset=utf-8"
    }
}
