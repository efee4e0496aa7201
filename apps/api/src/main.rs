mod analysis;
mod config;
mod errors;
mod extraction;
mod generation;
mod models;
mod records;
mod routes;
mod skills;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::config::Config;
use crate::generation::renderer::PlainTextRenderer;
use crate::records::store::JsonFileStore;
use crate::routes::build_router;
use crate::skills::vocabulary::{ALL_SKILLS, JOB_PROFILES};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting skillmatch v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Skill catalog: {} job profiles, {} vocabulary skills",
        JOB_PROFILES.len(),
        ALL_SKILLS.len()
    );

    // Record store (JSON file, read-modify-write on append)
    let store = JsonFileStore::new(&config.results_path);
    info!("Record store at {}", store.path().display());

    let state = AppState {
        store: Arc::new(store),
        renderer: Arc::new(PlainTextRenderer),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
