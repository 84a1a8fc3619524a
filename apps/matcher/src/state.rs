use std::sync::Arc;

use crate::config::Config;
use crate::matching::SimilarityScorer;
use crate::skills::SkillVocabulary;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Loaded once at startup, read-only afterwards.
    pub vocabulary: Arc<SkillVocabulary>,
    /// Pluggable similarity scorer. Default: TfIdfScorer.
    pub scorer: Arc<dyn SimilarityScorer>,
}
