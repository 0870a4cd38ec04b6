//! Axum route handlers for the Matching API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::matching::batch::{
    score_resume_against_jobs, BatchOutcome, JobPosting, MatchPreferences, ResumeDocument,
};
use crate::matching::models::{MatchInput, MatchResult};
use crate::matching::suggestions::{
    build_suggestions_response, ProfileSnapshot, SuggestionsResponse,
};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Serialize)]
pub struct BatchScoreRequest {
    pub resume: ResumeDocument,
    #[serde(default)]
    pub preferences: MatchPreferences,
    pub jobs: Vec<JobPosting>,
    /// Falls back to `MATCH_MIN_SCORE` when omitted.
    #[serde(default)]
    pub min_score: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    #[serde(flatten)]
    pub result: MatchResult,
    pub scorer_backend: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/matches/score
///
/// Scores a single resume against a single job.
pub async fn handle_score(
    State(state): State<AppState>,
    Json(input): Json<MatchInput>,
) -> Result<Json<ScoreResponse>, AppError> {
    let result = state.scorer.score(&input);

    Ok(Json(ScoreResponse {
        result,
        scorer_backend: state.scorer.backend().to_string(),
    }))
}

/// POST /api/v1/matches/batch
///
/// Scores one resume against many jobs and returns the ranked matches at or
/// above `min_score`. Runs on the blocking pool since scoring is CPU-bound.
pub async fn handle_batch_score(
    State(state): State<AppState>,
    Json(request): Json<BatchScoreRequest>,
) -> Result<Json<BatchOutcome>, AppError> {
    if request.jobs.is_empty() {
        return Err(AppError::Validation("jobs cannot be empty".to_string()));
    }
    if request.jobs.len() > state.config.max_batch_jobs {
        return Err(AppError::Validation(format!(
            "at most {} jobs may be scored per request, got {}",
            state.config.max_batch_jobs,
            request.jobs.len()
        )));
    }

    let min_score = request.min_score.unwrap_or(state.config.default_min_score);
    if !(0.0..=100.0).contains(&min_score) {
        return Err(AppError::Validation(
            "min_score must be between 0 and 100".to_string(),
        ));
    }

    info!(jobs = request.jobs.len(), min_score, "Scoring resume against job batch");

    let scorer = state.scorer.clone();
    let outcome = tokio::task::spawn_blocking(move || {
        score_resume_against_jobs(
            scorer.as_ref(),
            &request.resume,
            &request.preferences,
            &request.jobs,
            min_score,
        )
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("batch scoring task failed: {e}")))?;

    Ok(Json(outcome))
}

/// POST /api/v1/matches/suggestions
///
/// Returns advice for a user with no or few matches.
pub async fn handle_suggestions(
    Json(profile): Json<ProfileSnapshot>,
) -> Result<Json<SuggestionsResponse>, AppError> {
    Ok(Json(build_suggestions_response(&profile)))
}
