//! Axum route handlers for the Results API.

use anyhow::Context;
use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::models::submission::SubmissionRow;
use crate::recommendations::generator::{generate_recommendations, Recommendations};
use crate::results::repository::latest_submission;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ResultsQuery {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}

/// GET /api/v1/results?userId=…
///
/// Latest submission for the user merged with freshly generated recommendations.
pub async fn handle_get_results(
    State(state): State<AppState>,
    Query(params): Query<ResultsQuery>,
) -> Result<Json<Value>, AppError> {
    let user_id = params
        .user_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::Validation("userId is required".to_string()))?;

    let submission = latest_submission(&state.db, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No results found for user {user_id}")))?;

    info!("Building results for submission {}", submission.id);

    let recommendations =
        generate_recommendations(state.llm.as_deref(), &submission.score_metadata).await;

    Ok(Json(merge_results(&submission, &recommendations)?))
}

/// Flattens the submission into a JSON object and attaches `recommendations`.
pub fn merge_results(
    submission: &SubmissionRow,
    recommendations: &Recommendations,
) -> Result<Value, AppError> {
    let mut merged =
        serde_json::to_value(submission).context("Failed to serialize submission")?;
    let recommendations =
        serde_json::to_value(recommendations).context("Failed to serialize recommendations")?;

    match merged.as_object_mut() {
        Some(object) => {
            object.insert("recommendations".to_string(), recommendations);
            Ok(merged)
        }
        None => Err(AppError::Internal(anyhow::anyhow!(
            "Submission did not serialize to an object"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;
    use uuid::Uuid;

    fn submission() -> SubmissionRow {
        SubmissionRow {
            id: Uuid::new_v4(),
            user_id: "user-42".to_string(),
            name: Some("Asha".to_string()),
            email: Some("asha@example.com".to_string()),
            score: Some(78.5),
            answers: json!({"q1": "b"}),
            score_metadata: json!({"analytical": 82, "creative": 61}),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_merge_keeps_submission_fields_and_adds_recommendations() {
        let merged = merge_results(&submission(), &Recommendations::default_payload()).unwrap();
        assert_eq!(merged["userId"], "user-42");
        assert_eq!(merged["score"], 78.5);
        assert_eq!(merged["scoreMetadata"]["analytical"], 82);
        assert!(merged["recommendations"]["summary"].is_string());
        assert!(merged["recommendations"]["top_roles"].is_array());
    }
}
