//! Bounded retry around a `LocationSource`, with linear backoff.
//!
//! State is published on a `watch` channel so observers see `loading` stay
//! true across the whole retry sequence, not just the current attempt.

use std::time::Duration;

use tokio::sync::watch;
use tracing::{info, warn};

use crate::location::client::LocationSource;
use crate::location::models::{IndiaStatus, LocationData};

pub const MAX_RETRIES_EXCEEDED: &str = "Maximum retry attempts exceeded";

#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Total attempts, including the first.
    pub retry_attempts: u32,
    /// Base delay; the wait before attempt `n + 1` is `retry_delay * n`.
    pub retry_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            retry_attempts: 2,
            retry_delay: Duration::from_millis(1000),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DetectionState {
    #[allow(dead_code)]
    pub loading: bool,
    pub location: Option<LocationData>,
    pub error: Option<String>,
    /// Code of the most recent failed attempt, e.g. "TIMEOUT".
    pub last_failure: Option<&'static str>,
}

impl DetectionState {
    pub fn india_status(&self) -> IndiaStatus {
        IndiaStatus::from_location(self.location.as_ref())
    }
}

pub struct LocationDetector<S> {
    source: S,
    policy: RetryPolicy,
    attempts: u32,
    state: watch::Sender<DetectionState>,
}

impl<S: LocationSource> LocationDetector<S> {
    pub fn new(source: S, policy: RetryPolicy) -> Self {
        let (state, _) = watch::channel(DetectionState::default());
        Self {
            source,
            policy,
            attempts: 0,
            state,
        }
    }

    #[allow(dead_code)]
    pub fn subscribe(&self) -> watch::Receiver<DetectionState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> DetectionState {
        self.state.borrow().clone()
    }

    #[allow(dead_code)]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Runs attempts until one succeeds or the budget is spent.
    pub async fn detect(&mut self) -> DetectionState {
        self.state.send_modify(|s| {
            s.loading = true;
            s.error = None;
        });

        loop {
            if self.attempts >= self.policy.retry_attempts {
                warn!(
                    "Location detection gave up after {} attempts",
                    self.attempts
                );
                self.state.send_modify(|s| {
                    s.loading = false;
                    s.error = Some(MAX_RETRIES_EXCEEDED.to_string());
                });
                return self.state();
            }

            if self.attempts > 0 {
                tokio::time::sleep(self.policy.retry_delay * self.attempts).await;
            }
            self.attempts += 1;

            match self.source.lookup().await {
                Ok(location) => {
                    info!(
                        "Location detected: {} on attempt {}",
                        location.country_code, self.attempts
                    );
                    self.state.send_modify(|s| {
                        s.loading = false;
                        s.location = Some(location);
                        s.error = None;
                        s.last_failure = None;
                    });
                    return self.state();
                }
                Err(e) => {
                    warn!("Location attempt {} failed: {e}", self.attempts);
                    self.state.send_modify(|s| s.last_failure = Some(e.code()));
                }
            }
        }
    }

    /// Resets the attempt counter and runs the same bounded loop again.
    #[allow(dead_code)]
    pub async fn retry(&mut self) -> DetectionState {
        self.attempts = 0;
        self.detect().await
    }
}
