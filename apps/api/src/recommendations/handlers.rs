//! Axum route handlers for the Recommendations API.

use axum::{extract::State, Json};
use serde_json::Value;

use crate::recommendations::generator::{generate_recommendations, Recommendations};
use crate::state::AppState;

/// POST /api/v1/recommendations
///
/// Accepts arbitrary score metadata and always answers 200.
pub async fn handle_generate_recommendations(
    State(state): State<AppState>,
    Json(score_metadata): Json<Value>,
) -> Json<Recommendations> {
    Json(generate_recommendations(state.llm.as_deref(), &score_metadata).await)
}
