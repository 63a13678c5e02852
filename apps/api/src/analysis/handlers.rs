//! Axum route handlers for the Analysis API.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::analysis::models::ModelInfo;
use crate::analysis::result::AnalysisResult;
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub description: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub analysis_id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    pub result: AnalysisResult,
}

#[derive(Debug, Deserialize)]
pub struct BatchAnalyzeRequest {
    pub descriptions: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct BatchAnalyzeResponse {
    pub results: Vec<AnalyzeResponse>,
}

#[derive(Debug, Serialize)]
pub struct ModelCatalogResponse {
    pub models: Vec<ModelInfo>,
}

fn check_length(description: &str, max_chars: usize) -> Result<(), AppError> {
    let chars = description.chars().count();
    if chars > max_chars {
        warn!(chars, max_chars, "description rejected: too long");
        return Err(AppError::PayloadTooLarge(format!(
            "description is {chars} characters; the limit is {max_chars}"
        )));
    }
    Ok(())
}

fn run(state: &AppState, description: &str) -> AnalyzeResponse {
    AnalyzeResponse {
        analysis_id: Uuid::new_v4(),
        analyzed_at: Utc::now(),
        result: state.detector.analyze(description),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze
///
/// Scores a single job description and returns the full verdict.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    if request.description.trim().is_empty() {
        return Err(AppError::Validation("description cannot be empty".to_string()));
    }
    check_length(&request.description, state.config.max_description_chars)?;

    let response = run(&state, &request.description);
    info!(
        analysis_id = %response.analysis_id,
        is_ghost_job = response.result.is_ghost_job,
        ensemble_score = response.result.ensemble_score,
        "posting analyzed"
    );

    Ok(Json(response))
}

/// POST /api/v1/analyze/batch
///
/// Scores several descriptions in request order. Blank entries are analyzed
/// (they get the neutral verdict) rather than rejected.
pub async fn handle_analyze_batch(
    State(state): State<AppState>,
    Json(request): Json<BatchAnalyzeRequest>,
) -> Result<Json<BatchAnalyzeResponse>, AppError> {
    if request.descriptions.is_empty() {
        return Err(AppError::Validation(
            "descriptions must contain at least one entry".to_string(),
        ));
    }
    let max_batch = state.config.max_batch_size;
    if request.descriptions.len() > max_batch {
        warn!(
            size = request.descriptions.len(),
            max_batch, "batch rejected: too many descriptions"
        );
        return Err(AppError::PayloadTooLarge(format!(
            "batch holds {} descriptions; the limit is {max_batch}",
            request.descriptions.len()
        )));
    }
    for description in &request.descriptions {
        check_length(description, state.config.max_description_chars)?;
    }

    let results: Vec<_> = request
        .descriptions
        .iter()
        .map(|d| run(&state, d))
        .collect();
    info!(
        size = results.len(),
        ghost_count = results.iter().filter(|r| r.result.is_ghost_job).count(),
        "batch analyzed"
    );

    Ok(Json(BatchAnalyzeResponse { results }))
}

/// GET /api/v1/models
///
/// Lists the scorers in the ensemble with their weights.
pub async fn handle_models(State(state): State<AppState>) -> Json<ModelCatalogResponse> {
    Json(ModelCatalogResponse {
        models: state.detector.catalog(),
    })
}
