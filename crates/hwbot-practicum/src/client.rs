// SPDX-FileCopyrightText: 2026 Hwbot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the homework status API.
//!
//! Provides [`PracticumClient`] which handles request construction and
//! OAuth authentication.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::StatusCode;
use tracing::debug;

use hwbot_config::model::PracticumConfig;
use hwbot_core::HwbotError;

/// HTTP client for the status API.
///
/// Carries the OAuth header on every request. Each call is a single
/// attempt; failed cycles are re-polled by the loop at the next interval
/// with the same cursor.
#[derive(Debug, Clone)]
pub struct PracticumClient {
    client: reqwest::Client,
    endpoint: String,
}

impl PracticumClient {
    /// Creates a new status API client.
    ///
    /// Requires `config.token` to be set and non-blank.
    pub fn new(config: &PracticumConfig) -> Result<Self, HwbotError> {
        let token = config.token.as_deref().ok_or_else(|| {
            HwbotError::Config("practicum.token is required for the status API".into())
        })?;

        if token.trim().is_empty() {
            return Err(HwbotError::Config("practicum.token cannot be empty".into()));
        }

        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("OAuth {token}")).map_err(|e| {
                HwbotError::Config(format!("practicum.token is not a valid header value: {e}"))
            })?,
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| HwbotError::ApiUnavailable {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    /// Fetches homework statuses changed since `from_date` (Unix seconds).
    ///
    /// Returns the raw JSON payload; structural validation belongs to
    /// [`crate::validate::validate_response`].
    pub async fn fetch_statuses(&self, from_date: i64) -> Result<serde_json::Value, HwbotError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|e| HwbotError::ApiUnavailable {
                message: format!("HTTP request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        debug!(status = %status, from_date, "status response received");

        // Anything but 200 counts as unavailability, redirects included.
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(HwbotError::ApiUnavailable {
                message: format!("API returned {status}: {body}"),
                source: None,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| HwbotError::ApiUnavailable {
                message: format!("failed to read response body: {e}"),
                source: Some(Box::new(e)),
            })?;
        serde_json::from_str::<serde_json::Value>(&body).map_err(|e| {
            HwbotError::MalformedResponse {
                reason: format!("response body is not valid JSON: {e}"),
            }
        })
    }
}
