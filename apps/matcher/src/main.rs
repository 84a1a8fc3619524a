mod config;
mod errors;
mod extraction;
mod matching;
mod models;
mod routes;
mod skills;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::matching::{SimilarityScorer, TfIdfScorer};
use crate::routes::build_router;
use crate::skills::SkillVocabulary;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Matcher v{}", env!("CARGO_PKG_VERSION"));

    // Load the skill vocabulary exactly once; shared read-only afterwards
    let vocabulary = SkillVocabulary::load(config.skills_csv.as_deref())
        .context("Failed to load skill vocabulary")?;
    match &config.skills_csv {
        Some(path) => info!(
            "Skill vocabulary: {} skills from {}",
            vocabulary.len(),
            path.display()
        ),
        None => info!("Skill vocabulary: {} built-in skills", vocabulary.len()),
    }
    if vocabulary.is_empty() {
        warn!("Skill vocabulary is empty; no skills will be detected");
    }

    let scorer: Arc<dyn SimilarityScorer> = Arc::new(TfIdfScorer);
    info!("Similarity scorer: {}", scorer.backend());

    let state = AppState {
        config: config.clone(),
        vocabulary: Arc::new(vocabulary),
        scorer,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!(
        "Listening on {addr} (max upload {} bytes)",
        config.max_upload_bytes
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
