use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// One completed career assessment, as stored by the intake form.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRow {
    pub id: Uuid,
    pub user_id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub score: Option<f64>,
    pub answers: Value,
    pub score_metadata: Value,
    pub created_at: DateTime<Utc>,
}
