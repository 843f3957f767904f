//! Geolocation lookup with a hard per-request deadline.
//!
//! Every failure is classified into one of five kinds so callers can decide
//! whether to retry: TIMEOUT, HTTP_ERROR, API_ERROR, INVALID_RESPONSE, NETWORK_ERROR.

use std::net::IpAddr;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::location::models::LocationData;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("Location request timed out after {0}ms")]
    Timeout(u128),

    #[error("Location service returned HTTP {0}")]
    Http(u16),

    #[error("Location service error: {0}")]
    Api(String),

    #[error("Location response is missing country information")]
    InvalidResponse,

    #[error("Location request failed: {0}")]
    Network(String),
}

impl LocationError {
    pub fn code(&self) -> &'static str {
        match self {
            LocationError::Timeout(_) => "TIMEOUT",
            LocationError::Http(_) => "HTTP_ERROR",
            LocationError::Api(_) => "API_ERROR",
            LocationError::InvalidResponse => "INVALID_RESPONSE",
            LocationError::Network(_) => "NETWORK_ERROR",
        }
    }
}

/// Anything that can resolve a location once. The retry loop is layered on top.
#[async_trait]
pub trait LocationSource: Send + Sync {
    async fn lookup(&self) -> Result<LocationData, LocationError>;
}

/// The wide upstream schema; only the fields we project are declared.
#[derive(Debug, Deserialize)]
struct UpstreamLocation {
    #[serde(default)]
    error: bool,
    reason: Option<String>,
    country_code: Option<String>,
    country_name: Option<String>,
    city: Option<String>,
    region: Option<String>,
    currency: Option<String>,
    timezone: Option<String>,
}

#[derive(Clone)]
pub struct GeoClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl GeoClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: Client::builder().build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        })
    }

    /// Looks up `ip`. Always addressed explicitly: the bare `/json/` endpoint
    /// would resolve this server's own address instead of the caller's.
    pub async fn detect_location(&self, ip: IpAddr) -> Result<LocationData, LocationError> {
        let url = format!("{}/{ip}/json/", self.base_url);
        debug!("Detecting location via {url}");

        let request = async {
            let response = self.client.get(&url).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok::<_, reqwest::Error>((status, body))
        };

        match tokio::time::timeout(self.timeout, request).await {
            Err(_) => Err(LocationError::Timeout(self.timeout.as_millis())),
            Ok(Err(e)) if e.is_timeout() => Err(LocationError::Timeout(self.timeout.as_millis())),
            Ok(Err(e)) => Err(LocationError::Network(e.to_string())),
            Ok(Ok((status, body))) => interpret_response(status, &body),
        }
    }

    pub fn for_caller(&self, ip: IpAddr) -> CallerLookup<'_> {
        CallerLookup { client: self, ip }
    }
}

/// A `LocationSource` bound to one caller address.
pub struct CallerLookup<'a> {
    client: &'a GeoClient,
    ip: IpAddr,
}

#[async_trait]
impl LocationSource for CallerLookup<'_> {
    async fn lookup(&self) -> Result<LocationData, LocationError> {
        self.client.detect_location(self.ip).await
    }
}

/// Classifies a completed HTTP exchange.
pub fn interpret_response(status: u16, body: &str) -> Result<LocationData, LocationError> {
    if !(200..300).contains(&status) {
        return Err(LocationError::Http(status));
    }

    let upstream: UpstreamLocation =
        serde_json::from_str(body).map_err(|e| LocationError::Network(e.to_string()))?;

    if upstream.error {
        return Err(LocationError::Api(
            upstream.reason.unwrap_or_else(|| "Unknown error".to_string()),
        ));
    }

    let country_code = upstream.country_code.unwrap_or_default();
    let country_name = upstream.country_name.unwrap_or_default();
    if country_code.is_empty() && country_name.is_empty() {
        return Err(LocationError::InvalidResponse);
    }

    Ok(LocationData {
        country_code,
        country_name,
        city: upstream.city.unwrap_or_default(),
        region: upstream.region.unwrap_or_default(),
        currency: upstream.currency.unwrap_or_default(),
        timezone: upstream.timezone.unwrap_or_default(),
    })
}
