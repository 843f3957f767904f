//! Axum route handlers for the Pricing API.

use std::net::{IpAddr, SocketAddr};

use axum::{
    extract::{ConnectInfo, State},
    http::HeaderMap,
    Json,
};
use serde::Serialize;
use tracing::debug;

use crate::location::detector::{DetectionState, LocationDetector};
use crate::location::models::LocationData;
use crate::location::pricing::PricingVariant;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingResponse {
    pub location: Option<LocationData>,
    /// `null` while the caller's country is unknown.
    pub is_india: Option<bool>,
    pub pricing: PricingVariant,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Failure kind of the last attempt, e.g. "TIMEOUT".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_code: Option<&'static str>,
}

/// GET /api/v1/pricing
///
/// Resolves the caller's country and picks the matching pricing variant.
/// Detection failures, and callers with no public address, degrade to
/// international pricing with `isIndia: null`.
pub async fn handle_get_pricing(
    State(state): State<AppState>,
    peer: Option<ConnectInfo<SocketAddr>>,
    headers: HeaderMap,
) -> Json<PricingResponse> {
    let peer = peer.map(|ConnectInfo(addr)| addr.ip());

    let detection = match caller_ip(&headers, peer) {
        Some(ip) => {
            let mut detector =
                LocationDetector::new(state.geo.for_caller(ip), state.retry_policy);
            detector.detect().await
        }
        None => {
            debug!("No public caller address, skipping location lookup");
            DetectionState::default()
        }
    };

    let status = detection.india_status();
    Json(PricingResponse {
        location: detection.location,
        is_india: status.as_option(),
        pricing: PricingVariant::for_status(status),
        error: detection.error,
        failure_code: detection.last_failure,
    })
}

/// First public address in `X-Forwarded-For`, else the TCP peer if it is public.
fn caller_ip(headers: &HeaderMap, peer: Option<IpAddr>) -> Option<IpAddr> {
    let forwarded = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| {
            v.split(',')
                .filter_map(|entry| entry.trim().parse::<IpAddr>().ok())
                .find(is_public)
        });

    forwarded.or(peer.filter(is_public))
}

fn is_public(ip: &IpAddr) -> bool {
    match ip {
        IpAddr::V4(v4) => {
            !(v4.is_private()
                || v4.is_loopback()
                || v4.is_link_local()
                || v4.is_unspecified()
                || v4.is_broadcast())
        }
        IpAddr::V6(v6) => {
            let unique_local = (v6.segments()[0] & 0xfe00) == 0xfc00;
            let link_local = (v6.segments()[0] & 0xffc0) == 0xfe80;
            !(v6.is_loopback() || v6.is_unspecified() || unique_local || link_local)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", HeaderValue::from_str(value).unwrap());
        headers
    }

    fn ip(value: &str) -> IpAddr {
        value.parse().unwrap()
    }

    #[test]
    fn test_caller_ip_takes_first_public_forwarded_entry() {
        assert_eq!(
            caller_ip(&headers("49.36.10.1, 10.0.0.2"), None),
            Some(ip("49.36.10.1"))
        );
        assert_eq!(
            caller_ip(&headers("10.0.0.2, 49.36.10.1"), None),
            Some(ip("49.36.10.1"))
        );
    }

    #[test]
    fn test_caller_ip_falls_back_to_public_peer() {
        assert_eq!(
            caller_ip(&headers("10.1.2.3"), Some(ip("81.2.69.160"))),
            Some(ip("81.2.69.160"))
        );
        assert_eq!(
            caller_ip(&HeaderMap::new(), Some(ip("81.2.69.160"))),
            Some(ip("81.2.69.160"))
        );
    }

    #[test]
    fn test_caller_ip_none_without_public_address() {
        assert_eq!(caller_ip(&headers("10.1.2.3"), None), None);
        assert_eq!(caller_ip(&headers("127.0.0.1"), Some(ip("127.0.0.1"))), None);
        assert_eq!(caller_ip(&headers("not-an-ip"), Some(ip("192.168.1.4"))), None);
        assert_eq!(caller_ip(&HeaderMap::new(), Some(ip("::1"))), None);
        assert_eq!(caller_ip(&HeaderMap::new(), Some(ip("fd00::1"))), None);
        assert_eq!(caller_ip(&HeaderMap::new(), None), None);
    }
}
