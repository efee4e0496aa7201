//! Analysis pipeline: upload → text → details + skills → score → feedback → record.

use std::sync::Arc;

use bytes::Bytes;
use chrono::{Local, NaiveDateTime};
use serde::Serialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::extraction::details::extract_details;
use crate::extraction::text::{extract_document, extract_pdf_image, DocumentFormat};
use crate::generation::renderer::TemplateInputs;
use crate::generation::template::{
    build_template, summary_headline, template_filename, TemplateRequest,
};
use crate::models::details::ExtractedDetails;
use crate::models::record::AnalysisRecord;
use crate::records::store::RecordStore;
use crate::skills::feedback::{generate_feedback, Feedback};
use crate::skills::jd::extract_job_skills;
use crate::skills::matcher::{match_skills, VOCABULARY_PATTERNS};
use crate::skills::scoring::compute_match_score;
use crate::skills::vocabulary::find_profile;

pub const UNREADABLE_MESSAGE: &str = "Could not read any text from the file";

// ────────────────────────────────────────────────────────────────────────────
// Request / Report types
// ────────────────────────────────────────────────────────────────────────────

/// One uploaded resume plus the job it is analyzed against.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub filename: String,
    pub bytes: Bytes,
    pub job_title: String,
    /// Overrides the name found in the document.
    pub candidate_name: Option<String>,
    /// Custom job description. Required when `job_title` is not a catalog role.
    pub jd_text: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TemplateDocument {
    pub filename: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub details: ExtractedDetails,
    /// Every vocabulary skill found in the resume, sorted.
    pub detected_skills: Vec<String>,
    pub required_skills: Vec<String>,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub score: f64,
    pub feedback: Feedback,
    pub template: TemplateDocument,
    /// Prefilled body for the template render endpoint.
    pub render_inputs: TemplateInputs,
    pub photo_found: bool,
    pub record: AnalysisRecord,
}

/// Required skills for a job and the JD narrative the template quotes.
struct JobRequirements {
    skills: Vec<String>,
    narrative: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Runs the analysis and appends its record to `store`.
///
/// Document decoding runs on the blocking pool.
pub async fn run_analysis(
    store: Arc<dyn RecordStore>,
    request: AnalysisRequest,
) -> Result<AnalysisReport, AppError> {
    let now = Local::now().naive_local();
    let report = tokio::task::spawn_blocking(move || analyze(&request, now))
        .await
        .map_err(|e| AppError::Internal(e.into()))??;

    store
        .append(&report.record)
        .await
        .map_err(|e| AppError::Store(format!("{e:#}")))?;

    info!(
        "Analyzed '{}' for {}: score {}",
        report.record.candidate_name, report.record.job_title, report.score
    );
    Ok(report)
}

/// Pure part of the pipeline. `now` becomes the record timestamp.
pub fn analyze(request: &AnalysisRequest, now: NaiveDateTime) -> Result<AnalysisReport, AppError> {
    let job_title = request.job_title.trim();
    if job_title.is_empty() {
        return Err(AppError::Validation("job_title cannot be empty".to_string()));
    }
    let requirements = resolve_requirements(job_title, request.jd_text.as_deref())?;

    let format = DocumentFormat::from_filename(&request.filename);
    let mut document = extract_document(&request.bytes, format);
    if document.is_unreadable() {
        warn!(
            "No text extracted from '{}' ({format:?}, {} bytes)",
            request.filename,
            request.bytes.len()
        );
        return Err(AppError::UnprocessableEntity(UNREADABLE_MESSAGE.to_string()));
    }
    if format == DocumentFormat::Pdf && document.image.is_none() {
        document.image = extract_pdf_image(&request.bytes);
    }

    let details = extract_details(&document.text, request.candidate_name.as_deref());
    let detected_skills = VOCABULARY_PATTERNS.find_in(&document.text);
    let resume_hits = match_skills(&document.text, &requirements.skills);
    let score = compute_match_score(&resume_hits, &requirements.skills);

    let known_skills: Vec<&str> = detected_skills
        .iter()
        .chain(&resume_hits)
        .map(String::as_str)
        .collect();
    let feedback = generate_feedback(
        &known_skills,
        &requirements.skills,
        details.name.as_deref(),
        job_title,
    );

    let template = TemplateDocument {
        filename: template_filename(details.name.as_deref(), job_title),
        text: build_template(&TemplateRequest {
            job_title,
            candidate_name: details.name.as_deref(),
            matched_skills: &score.matched,
            missing_skills: &score.missing,
            jd_text: &requirements.narrative,
        }),
    };
    let render_inputs = TemplateInputs {
        name: details.name.clone(),
        email: details.email.clone(),
        links: details.links.clone(),
        job_title: job_title.to_string(),
        skills: score.matched.iter().chain(&score.missing).cloned().collect(),
        summary: summary_headline(job_title, &requirements.narrative),
    };

    let record = AnalysisRecord {
        timestamp: now,
        candidate_name: details
            .name
            .clone()
            .unwrap_or_else(|| request.filename.clone()),
        job_title: job_title.to_string(),
        score: score.score,
        jd_skills: requirements.skills.clone(),
        resume_skills: score.matched.clone(),
        missing_skills: score.missing.clone(),
    };

    Ok(AnalysisReport {
        details,
        detected_skills,
        required_skills: requirements.skills,
        matched_skills: score.matched,
        missing_skills: score.missing,
        score: score.score,
        feedback,
        template,
        render_inputs,
        photo_found: document.image.is_some(),
        record,
    })
}

/// Catalog role first; a custom JD only for titles outside the catalog.
/// A custom JD still replaces the narrative of a catalog role.
fn resolve_requirements(job_title: &str, jd_text: Option<&str>) -> Result<JobRequirements, AppError> {
    let jd_text = jd_text.map(str::trim).filter(|t| !t.is_empty());

    if let Some(profile) = find_profile(job_title) {
        return Ok(JobRequirements {
            skills: profile.skills.iter().map(|s| s.to_string()).collect(),
            narrative: jd_text.unwrap_or(profile.jd).to_string(),
        });
    }

    match jd_text {
        Some(jd) => Ok(JobRequirements {
            skills: extract_job_skills(jd, job_title),
            narrative: jd.to_string(),
        }),
        None => Err(AppError::Validation(format!(
            "'{job_title}' is not a known job profile; provide jd_text to analyze against it"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::store::InMemoryStore;
    use chrono::NaiveDate;

    const RESUME: &str = "Jane Doe\n\
        jane.doe@mail.com | +1 (555) 123-4567 | https://github.com/janedoe\n\
        Skills: Python, SQL, Power BI, Statistics\n";

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    fn request(filename: &str, body: &str, job_title: &str) -> AnalysisRequest {
        AnalysisRequest {
            filename: filename.to_string(),
            bytes: Bytes::copy_from_slice(body.as_bytes()),
            job_title: job_title.to_string(),
            candidate_name: None,
            jd_text: None,
        }
    }

    #[test]
    fn test_catalog_profile_analysis() {
        let report = analyze(&request("jane.txt", RESUME, "Data Analyst"), now()).unwrap();
        let profile = find_profile("Data Analyst").unwrap();

        assert_eq!(report.details.name.as_deref(), Some("Jane Doe"));
        assert_eq!(report.required_skills.len(), profile.skills.len());
        assert!(report.matched_skills.contains(&"SQL".to_string()));
        assert!(report.matched_skills.contains(&"Power BI".to_string()));
        assert!(report.missing_skills.contains(&"Tableau".to_string()));
        assert_eq!(
            report.matched_skills.len() + report.missing_skills.len(),
            report.required_skills.len()
        );
        assert_eq!(report.record.candidate_name, "Jane Doe");
        assert_eq!(report.record.timestamp, now());
        assert_eq!(report.record.resume_skills, report.matched_skills);
        assert_eq!(report.template.filename, "Jane_Doe_resume_template.txt");
        assert!(report.template.text.starts_with("Jane Doe\nData Analyst\n"));
        assert!(!report.photo_found);
    }

    #[test]
    fn test_detected_skills_sorted_and_unique() {
        let report = analyze(&request("jane.txt", RESUME, "Data Analyst"), now()).unwrap();
        let mut sorted = report.detected_skills.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(report.detected_skills, sorted);
    }

    #[test]
    fn test_custom_job_uses_jd_text() {
        let mut req = request("cv.txt", "Built services with Python and AWS", "Platform Wrangler");
        req.jd_text = Some("We need Python, SQL and AWS experience.".to_string());
        let report = analyze(&req, now()).unwrap();

        assert_eq!(report.required_skills, vec!["python", "sql", "aws"]);
        assert_eq!(report.matched_skills, vec!["python", "aws"]);
        assert_eq!(report.missing_skills, vec!["sql"]);
        assert_eq!(report.score, 66.67);
        assert!(report
            .template
            .text
            .contains("We need Python, SQL and AWS experience."));
    }

    #[test]
    fn test_unknown_role_without_jd_is_rejected() {
        let err = analyze(&request("cv.txt", RESUME, "Platform Wrangler"), now()).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_blank_job_title_is_rejected() {
        let err = analyze(&request("cv.txt", RESUME, "   "), now()).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_unreadable_document_aborts() {
        let err = analyze(&request("cv.txt", "  \n ", "Data Analyst"), now()).unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(ref m) if m == UNREADABLE_MESSAGE));

        let err = analyze(&request("cv.odt", RESUME, "Data Analyst"), now()).unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
    }

    #[test]
    fn test_filename_stands_in_for_missing_name() {
        let report = analyze(&request("cv.txt", "skills: python, sql, excel", "Data Analyst"), now()).unwrap();
        assert_eq!(report.details.name, None);
        assert_eq!(report.record.candidate_name, "cv.txt");
    }

    #[test]
    fn test_user_supplied_name_wins() {
        let mut req = request("jane.txt", RESUME, "Data Analyst");
        req.candidate_name = Some("J. Doe".to_string());
        let report = analyze(&req, now()).unwrap();
        assert_eq!(report.record.candidate_name, "J. Doe");
    }

    #[tokio::test]
    async fn test_run_analysis_appends_record() {
        let store = Arc::new(InMemoryStore::default());
        let report = run_analysis(store.clone(), request("jane.txt", RESUME, "Data Analyst"))
            .await
            .unwrap();

        let stored = store.read_all().await;
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0], report.record);
    }

    #[tokio::test]
    async fn test_failed_analysis_appends_nothing() {
        let store = Arc::new(InMemoryStore::default());
        let result = run_analysis(store.clone(), request("cv.txt", "", "Data Analyst")).await;
        assert!(result.is_err());
        assert!(store.read_all().await.is_empty());
    }
}
