//! Axum route handlers for the coaching API.
//!
//! Each handler validates its required text fields, runs the feature's prompt
//! round-trip, and returns the resulting object verbatim. The response body is
//! whatever the round-trip produced — the model's parsed JSON or the feature
//! fallback — so the status is 200 in both cases.

use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::Value;

use crate::coach::{analyzer, matcher, star};
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeResumeRequest {
    pub resume: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchJdRequest {
    pub resume: String,
    pub job_description: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarRequest {
    pub question: String,
    #[serde(default)]
    pub user_notes: Option<String>,
    #[serde(default)]
    pub job_role: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resume-analyzer
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeResumeRequest>,
) -> Result<Json<Value>, AppError> {
    if request.resume.trim().is_empty() {
        return Err(AppError::Validation("Resume text is required".to_string()));
    }

    let analysis = analyzer::analyze_resume(state.llm.as_ref(), &request.resume).await?;

    Ok(Json(analysis))
}

/// POST /api/v1/jd-matcher
pub async fn handle_match_jd(
    State(state): State<AppState>,
    Json(request): Json<MatchJdRequest>,
) -> Result<Json<Value>, AppError> {
    if request.resume.trim().is_empty() {
        return Err(AppError::Validation("Resume text is required".to_string()));
    }
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "Job description is required".to_string(),
        ));
    }

    let analysis =
        matcher::match_resume_to_jd(state.llm.as_ref(), &request.resume, &request.job_description)
            .await?;

    Ok(Json(analysis))
}

/// POST /api/v1/star-generator
///
/// A question without notes returns the needs-context policy response with
/// status 200 — the caller distinguishes it from a validation failure by the
/// `needsContext` marker, not the status code.
pub async fn handle_generate_star(
    State(state): State<AppState>,
    Json(request): Json<StarRequest>,
) -> Result<Json<Value>, AppError> {
    if request.question.trim().is_empty() {
        return Err(AppError::Validation(
            "Interview question is required".to_string(),
        ));
    }

    let answer = star::generate_star_answer(
        state.llm.as_ref(),
        &request.question,
        request.user_notes.as_deref(),
        request.job_role.as_deref(),
    )
    .await?;

    Ok(Json(answer.into_value()))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests — drive the real router with stub completers
// ────────────────────────────────────────────────────────────────────────────
