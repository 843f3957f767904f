//! Axum route handlers for the Intent API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::warn;

use crate::intent::classifier::{classify_intent, IntentStrategy, RemoteStrategy};
use crate::intent::models::{IntentResult, UserProfile};
use crate::state::AppState;

/// POST /api/v1/intent
///
/// Always answers 200 with an `IntentResult`. A malformed body is classified
/// as an empty profile so the caller still gets a usable result.
pub async fn handle_detect_intent(
    State(state): State<AppState>,
    payload: Result<Json<UserProfile>, JsonRejection>,
) -> Json<IntentResult> {
    let profile = match payload {
        Ok(Json(profile)) => profile,
        Err(rejection) => {
            warn!("Unreadable intent request body, classifying empty profile: {rejection}");
            UserProfile::default()
        }
    };

    let remote = state.llm.clone().map(RemoteStrategy);
    let result = classify_intent(
        remote.as_ref().map(|r| r as &dyn IntentStrategy),
        &profile,
    )
    .await;

    Json(result)
}
