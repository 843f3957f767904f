use anyhow::{Context, Result};

const DEFAULT_GEOLOCATION_URL: &str = "https://ipapi.co";
const DEFAULT_EMAIL_FROM: &str = "Career Report <reports@example.com>";

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// Remote intent/recommendation path is only taken when this is set.
    pub openai_api_key: Option<String>,
    pub email_api_key: Option<String>,
    pub email_from: String,
    pub geolocation_url: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            openai_api_key: optional_env("OPENAI_API_KEY"),
            email_api_key: optional_env("EMAIL_API_KEY"),
            email_from: optional_env("EMAIL_FROM")
                .unwrap_or_else(|| DEFAULT_EMAIL_FROM.to_string()),
            geolocation_url: optional_env("GEOLOCATION_URL")
                .unwrap_or_else(|| DEFAULT_GEOLOCATION_URL.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Blank values count as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
