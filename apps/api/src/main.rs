mod config;
mod db;
mod errors;
mod intent;
mod llm_client;
mod location;
mod mailer;
mod models;
mod recommendations;
mod results;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::{create_pool, run_migrations};
use crate::llm_client::{CompletionClient, LlmClient};
use crate::location::client::{GeoClient, DEFAULT_TIMEOUT};
use crate::location::detector::RetryPolicy;
use crate::mailer::MailClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting intake API v{}", env!("CARGO_PKG_VERSION"));

    let db = create_pool(&config.database_url)?;
    run_migrations(&db).await;

    let llm: Option<Arc<dyn CompletionClient>> = match &config.openai_api_key {
        Some(key) => {
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            let client: Arc<dyn CompletionClient> = Arc::new(LlmClient::new(key.clone())?);
            Some(client)
        }
        None => {
            warn!("OPENAI_API_KEY not set; intent and recommendations use fallbacks");
            None
        }
    };

    let mailer = match &config.email_api_key {
        Some(key) => Some(MailClient::new(key.clone(), config.email_from.clone())?),
        None => {
            warn!("EMAIL_API_KEY not set; report emails are disabled");
            None
        }
    };

    let geo = GeoClient::new(&config.geolocation_url, DEFAULT_TIMEOUT)?;
    info!("Geolocation client initialized ({})", config.geolocation_url);

    let state = AppState {
        db,
        llm,
        mailer,
        geo,
        retry_policy: RetryPolicy::default(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    // Peer addresses back the pricing route when no forwarded header is present.
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
