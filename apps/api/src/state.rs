use std::sync::Arc;

use crate::config::Config;
use crate::generation::renderer::TemplateRenderer;
use crate::records::store::RecordStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Analysis history. Default: JsonFileStore at RESULTS_PATH.
    pub store: Arc<dyn RecordStore>,
    /// Pluggable document renderer. Default: PlainTextRenderer.
    pub renderer: Arc<dyn TemplateRenderer>,
    pub config: Config,
}
