//! Axum route handlers for analyses, the dashboard and the profile catalog.

use axum::{
    extract::{Multipart, Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use bytes::Bytes;
use chrono::Local;

use crate::analysis::pipeline::{run_analysis, AnalysisReport, AnalysisRequest};
use crate::errors::AppError;
use crate::models::record::AnalysisRecord;
use crate::records::aggregation::{build_dashboard, Dashboard};
use crate::records::export::records_to_csv;
use crate::records::filter::{resolve_filter, DashboardQuery};
use crate::skills::vocabulary::{find_profile, JobProfile, JOB_PROFILES};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Analyses
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyses
///
/// Multipart fields: `file` (required, with filename), `job_title` (required),
/// `candidate_name` and `jd_text` (optional).
pub async fn handle_create_analysis(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalysisReport>, AppError> {
    let request = read_analysis_form(multipart).await?;
    let report = run_analysis(state.store.clone(), request).await?;
    Ok(Json(report))
}

/// GET /api/v1/analyses
pub async fn handle_list_analyses(State(state): State<AppState>) -> Json<Vec<AnalysisRecord>> {
    Json(state.store.read_all().await)
}

/// DELETE /api/v1/analyses
pub async fn handle_clear_analyses(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state
        .store
        .clear()
        .await
        .map_err(|e| AppError::Store(format!("{e:#}")))?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/analyses/export.csv
pub async fn handle_export_csv(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let records = state.store.read_all().await;
    let body = records_to_csv(&records)?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"resume_analysis_results.csv\"",
            ),
        ],
        body,
    ))
}

/// GET /api/v1/dashboard
///
/// Malformed filters never fail the request; they come back as notices.
pub async fn handle_dashboard(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Json<Dashboard> {
    let records = state.store.read_all().await;
    let resolved = resolve_filter(&query, &records, Local::now().date_naive());
    Json(build_dashboard(&records, resolved))
}

// ────────────────────────────────────────────────────────────────────────────
// Profiles
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/profiles
pub async fn handle_list_profiles() -> Json<&'static [JobProfile]> {
    Json(JOB_PROFILES)
}

/// GET /api/v1/profiles/:role
pub async fn handle_get_profile(Path(role): Path<String>) -> Result<Json<JobProfile>, AppError> {
    find_profile(&role)
        .copied()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Job profile '{role}' not found")))
}

// ────────────────────────────────────────────────────────────────────────────
// Multipart parsing
// ────────────────────────────────────────────────────────────────────────────

async fn read_analysis_form(mut multipart: Multipart) -> Result<AnalysisRequest, AppError> {
    let mut file: Option<(String, Bytes)> = None;
    let mut job_title: Option<String> = None;
    let mut candidate_name: Option<String> = None;
    let mut jd_text: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Multipart error: {e}")))?
    {
        let field_name = field.name().map(|n| n.to_string());
        match field_name.as_deref() {
            Some("file") => {
                let filename = field
                    .file_name()
                    .map(|n| n.to_string())
                    .ok_or_else(|| AppError::Validation("file part needs a filename".to_string()))?;
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Read error: {e}")))?;
                file = Some((filename, bytes));
            }
            Some("job_title") => job_title = Some(read_text(field).await?),
            Some("candidate_name") => candidate_name = Some(read_text(field).await?),
            Some("jd_text") => jd_text = Some(read_text(field).await?),
            _ => {}
        }
    }

    let (filename, bytes) =
        file.ok_or_else(|| AppError::Validation("file part is required".to_string()))?;
    let job_title =
        job_title.ok_or_else(|| AppError::Validation("job_title is required".to_string()))?;

    Ok(AnalysisRequest {
        filename,
        bytes,
        job_title,
        candidate_name,
        jd_text,
    })
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::Validation(format!("Read error: {e}")))
}
