//! Best-effort downstream statistics notification.
//!
//! After a successful QR factorization the Q and R matrices are posted to
//! the node-api statistics service. The call runs on a detached task with a
//! fixed timeout; failure is logged and never affects the response already
//! sent to the caller. Rotation results are never forwarded.

use colored::Colorize;
use serde::Serialize;
use std::time::Duration;

/// Base URL used when NODE_API_URL is not set (local development).
pub(crate) const DEFAULT_BASE_URL: &str = "http://localhost:3000";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Payload posted to the statistics service.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct QrStatsPayload {
    pub q: Vec<Vec<f64>>,
    pub r: Vec<Vec<f64>>,
}

/// Client for the downstream statistics service.
#[derive(Debug, Clone)]
pub(crate) struct StatsNotifier {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl StatsNotifier {
    /// Creates a notifier with an explicit base URL and optional bearer
    /// token.
    pub(crate) fn new(
        base_url: impl Into<String>,
        token: Option<String>,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            token,
        })
    }

    /// Creates a notifier from the environment: NODE_API_URL for the base
    /// URL (with a local default) and JWT_TOKEN for the bearer token.
    pub(crate) fn from_env() -> Result<Self, reqwest::Error> {
        let base_url =
            std::env::var("NODE_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let token = std::env::var("JWT_TOKEN").ok().filter(|t| !t.is_empty());
        Self::new(base_url, token)
    }

    /// Whether a bearer token will be attached to stats calls.
    pub(crate) fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Full URL of the stats endpoint.
    pub(crate) fn endpoint(&self) -> String {
        format!("{}/stats", self.base_url.trim_end_matches('/'))
    }

    /// Posts Q and R to the stats endpoint. Best effort: outcomes are
    /// logged, never returned.
    pub(crate) async fn send_qr(&self, payload: &QrStatsPayload) {
        let mut request = self.client.post(self.endpoint()).json(payload);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        match request.send().await {
            Ok(response) if response.status().is_success() => {
                println!("{}", "Stats sent to node-api".dimmed());
            }
            Ok(response) => {
                eprintln!(
                    "{}",
                    format!("Warning: node-api returned status {}", response.status()).yellow()
                );
            }
            Err(e) => {
                eprintln!(
                    "{}",
                    format!("Warning: failed to send stats to node-api: {e}").yellow()
                );
            }
        }
    }
}
