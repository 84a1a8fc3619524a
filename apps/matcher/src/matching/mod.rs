// Matching: similarity scoring, report composition, the analysis pipeline
// and the HTTP handlers that drive it.
// Analysis is CPU-bound and must run inside tokio::task::spawn_blocking.

pub mod analysis;
pub mod handlers;
pub mod report;
pub mod similarity;

pub use similarity::{SimilarityScorer, TfIdfScorer};
