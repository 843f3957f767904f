pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::intent::handlers::handle_detect_intent;
use crate::location::handlers::handle_get_pricing;
use crate::mailer::handlers::handle_send_report;
use crate::recommendations::handlers::handle_generate_recommendations;
use crate::results::handlers::handle_get_results;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/intent", post(handle_detect_intent))
        .route(
            "/api/v1/recommendations",
            post(handle_generate_recommendations),
        )
        .route("/api/v1/results", get(handle_get_results))
        .route("/api/v1/email/report", post(handle_send_report))
        .route("/api/v1/pricing", get(handle_get_pricing))
        .with_state(state)
}
