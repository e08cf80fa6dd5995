//! Handlers for the `/analysis` resource: direct access to the Text
//! Analysis Engine, independent of any stored video.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;
use vidlens_core::analysis::TextAnalysis;

use crate::error::AppResult;
use crate::state::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct AnalyzeTextRequest {
    #[validate(length(max = 1_000_000))]
    pub text: String,
}

#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct SegmentsPayload {
    #[validate(length(max = 10_000))]
    pub segments: Vec<Value>,
}

/// POST /api/v1/analysis/text
pub async fn analyze_text(
    State(state): State<AppState>,
    Json(input): Json<AnalyzeTextRequest>,
) -> AppResult<Json<TextAnalysis>> {
    input.validate()?;
    Ok(Json(state.analyzer.analyze_text(&input.text)))
}

/// POST /api/v1/analysis/segments
///
/// Returns every segment with its analysis added under `nlp_analysis`.
/// Each segment must be an object with a `text` string.
pub async fn analyze_segments(
    State(state): State<AppState>,
    Json(input): Json<SegmentsPayload>,
) -> AppResult<Json<SegmentsPayload>> {
    input.validate()?;
    let segments = state.analyzer.analyze_segments(&input.segments)?;
    Ok(Json(SegmentsPayload { segments }))
}
