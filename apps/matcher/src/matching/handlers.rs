//! Axum route handlers for the Match API.

use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::extraction::document_from_upload;
use crate::matching::analysis::{analyze, analyze_text};
use crate::models::{MatchReport, NormalizedText};
use crate::state::AppState;

const MISSING_INPUT: &str = "Please upload a resume and paste a job description";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct TextMatchRequest {
    pub resume_text: String,
    pub jd_text: String,
}

#[derive(Debug, Serialize)]
pub struct SkillListResponse {
    pub skills: Vec<String>,
    pub count: usize,
}

/// The `resume` part of a match form.
struct ResumeUpload {
    file_name: Option<String>,
    content_type: Option<String>,
    bytes: Bytes,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/match
///
/// Multipart form: `resume` (file) + `jd_text` (text). Extracts the resume,
/// scores it against the JD and reports found / missing skills.
pub async fn handle_match(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<MatchReport>, AppError> {
    let mut resume: Option<ResumeUpload> = None;
    let mut jd_text = String::new();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "resume" => {
                let file_name = field.file_name().map(str::to_owned);
                let content_type = field.content_type().map(str::to_owned);
                let bytes = field.bytes().await?;
                resume = Some(ResumeUpload {
                    file_name,
                    content_type,
                    bytes,
                });
            }
            "jd_text" => jd_text = field.text().await?,
            other => debug!("Ignoring unexpected form field '{other}'"),
        }
    }

    let upload = resume
        .filter(|r| !r.bytes.is_empty())
        .ok_or_else(|| AppError::Validation(MISSING_INPUT.to_string()))?;
    if jd_text.trim().is_empty() {
        return Err(AppError::Validation(MISSING_INPUT.to_string()));
    }

    let document = document_from_upload(
        upload.file_name.as_deref(),
        upload.content_type.as_deref(),
        upload.bytes,
    )?;
    info!(
        format = %document.format,
        bytes = document.bytes.len(),
        "Analysing uploaded resume"
    );

    let vocabulary = Arc::clone(&state.vocabulary);
    let scorer = Arc::clone(&state.scorer);
    let report = tokio::task::spawn_blocking(move || {
        analyze(&document, &jd_text, &vocabulary, scorer.as_ref())
    })
    .await
    .map_err(|e| AppError::Internal(e.into()))??;

    Ok(Json(report))
}

/// POST /api/v1/match/text
///
/// Same analysis for a resume pasted as plain text.
pub async fn handle_match_text(
    State(state): State<AppState>,
    Json(request): Json<TextMatchRequest>,
) -> Result<Json<MatchReport>, AppError> {
    if request.resume_text.trim().is_empty() || request.jd_text.trim().is_empty() {
        return Err(AppError::Validation(MISSING_INPUT.to_string()));
    }

    let vocabulary = Arc::clone(&state.vocabulary);
    let scorer = Arc::clone(&state.scorer);
    let report = tokio::task::spawn_blocking(move || {
        let resume_text = NormalizedText::new(&request.resume_text);
        analyze_text(&resume_text, &request.jd_text, &vocabulary, scorer.as_ref())
    })
    .await
    .map_err(|e| AppError::Internal(e.into()))?;

    Ok(Json(report))
}

/// GET /api/v1/skills
///
/// Returns the loaded skill vocabulary in load order.
pub async fn handle_list_skills(State(state): State<AppState>) -> Json<SkillListResponse> {
    let skills = state.vocabulary.as_slice().to_vec();
    Json(SkillListResponse {
        count: skills.len(),
        skills,
    })
}
