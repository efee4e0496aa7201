//! Axum route handlers for template rendering.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};

use crate::errors::AppError;
use crate::generation::renderer::TemplateInputs;
use crate::generation::template::template_filename;
use crate::state::AppState;

/// POST /api/v1/templates/render
///
/// Renders the supplied fields with the configured renderer and returns the
/// document as a download.
pub async fn handle_render_template(
    State(state): State<AppState>,
    Json(inputs): Json<TemplateInputs>,
) -> Result<Response, AppError> {
    if inputs.job_title.trim().is_empty() {
        return Err(AppError::Validation("job_title cannot be empty".to_string()));
    }

    let bytes = state.renderer.render(&inputs)?;
    let filename = template_filename(inputs.name.as_deref(), inputs.job_title.trim());
    let disposition = format!("attachment; filename=\"{filename}\"");

    Ok((
        [
            (header::CONTENT_TYPE, state.renderer.content_type().to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response())
}
