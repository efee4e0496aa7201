pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::generation::handlers as generation_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Job profile catalog
        .route("/api/v1/profiles", get(handlers::handle_list_profiles))
        .route("/api/v1/profiles/:role", get(handlers::handle_get_profile))
        // Analyses
        .route(
            "/api/v1/analyses",
            post(handlers::handle_create_analysis)
                .get(handlers::handle_list_analyses)
                .delete(handlers::handle_clear_analyses),
        )
        .route(
            "/api/v1/analyses/export.csv",
            get(handlers::handle_export_csv),
        )
        .route("/api/v1/dashboard", get(handlers::handle_dashboard))
        // Templates
        .route(
            "/api/v1/templates/render",
            post(generation_handlers::handle_render_template),
        )
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}
