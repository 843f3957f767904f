use std::sync::Arc;

use sqlx::PgPool;

use crate::llm_client::CompletionClient;
use crate::location::client::GeoClient;
use crate::location::detector::RetryPolicy;
use crate::mailer::MailClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// `None` when no OpenAI key is configured; callers then use their fallbacks.
    pub llm: Option<Arc<dyn CompletionClient>>,
    pub mailer: Option<MailClient>,
    pub geo: GeoClient,
    pub retry_policy: RetryPolicy,
}
