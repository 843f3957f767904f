use sqlx::PgPool;

use crate::models::submission::SubmissionRow;

/// Returns the most recent submission for `user_id`, if any.
pub async fn latest_submission(
    pool: &PgPool,
    user_id: &str,
) -> Result<Option<SubmissionRow>, sqlx::Error> {
    sqlx::query_as::<_, SubmissionRow>(
        "SELECT * FROM submissions WHERE user_id = $1 ORDER BY created_at DESC LIMIT 1",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await
}
